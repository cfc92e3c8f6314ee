use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_pastel_color, generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    /// Free text as entered; only its leading integer is used for age grouping.
    pub age: String,
    pub allergies: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub weight: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(
        name: String,
        age: String,
        allergies: Vec<String>,
        conditions: Vec<String>,
        weight: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: name.trim().to_string(),
            age: age.trim().to_string(),
            allergies: normalize_allergies(allergies),
            conditions: normalize_conditions(conditions),
            weight: normalize_weight(weight),
            color: generate_pastel_color(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        age: Option<String>,
        allergies: Option<Vec<String>>,
        conditions: Option<Vec<String>>,
        weight: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name.trim().to_string();
        }
        if let Some(age) = age {
            self.age = age.trim().to_string();
        }
        if let Some(allergies) = allergies {
            self.allergies = normalize_allergies(allergies);
        }
        if let Some(conditions) = conditions {
            self.conditions = normalize_conditions(conditions);
        }
        if weight.is_some() {
            self.weight = normalize_weight(weight);
        }
        self.updated_at = Utc::now();
    }
}

/// Trims, lowercases and deduplicates allergies, keeping first-seen order.
pub fn normalize_allergies(allergies: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(allergies.len());
    for allergy in allergies {
        let allergy = allergy.trim().to_lowercase();
        if !allergy.is_empty() && !normalized.contains(&allergy) {
            normalized.push(allergy);
        }
    }
    normalized
}

fn normalize_conditions(conditions: Vec<String>) -> Vec<String> {
    conditions
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

fn normalize_weight(weight: Option<String>) -> Option<String> {
    weight
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
}
