use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Babies,
    Children,
    Adults,
    Elderly,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Babies,
        AgeGroup::Children,
        AgeGroup::Adults,
        AgeGroup::Elderly,
    ];

    /// Inclusive upper bounds: 2, 12, 60; everything above 60 is elderly.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=2 => AgeGroup::Babies,
            3..=12 => AgeGroup::Children,
            13..=60 => AgeGroup::Adults,
            _ => AgeGroup::Elderly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Babies => "babies",
            AgeGroup::Children => "children",
            AgeGroup::Adults => "adults",
            AgeGroup::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgeGroupFlags {
    pub babies: bool,
    pub children: bool,
    pub adults: bool,
    pub elderly: bool,
}

impl AgeGroupFlags {
    pub fn set(&mut self, group: AgeGroup) {
        match group {
            AgeGroup::Babies => self.babies = true,
            AgeGroup::Children => self.children = true,
            AgeGroup::Adults => self.adults = true,
            AgeGroup::Elderly => self.elderly = true,
        }
    }

    pub fn is_set(&self, group: AgeGroup) -> bool {
        match group {
            AgeGroup::Babies => self.babies,
            AgeGroup::Children => self.children,
            AgeGroup::Adults => self.adults,
            AgeGroup::Elderly => self.elderly,
        }
    }

    /// Flagged groups, youngest first.
    pub fn active_groups(&self) -> Vec<AgeGroup> {
        AgeGroup::ALL
            .into_iter()
            .filter(|group| self.is_set(*group))
            .collect()
    }
}

/// Aggregate of the profiles in context. Derived per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskContext {
    /// Lowercased and deduplicated, in first-seen order.
    pub combined_allergies: Vec<String>,
    pub age_groups: AgeGroupFlags,
}

impl RiskContext {
    pub fn has_allergy(&self, allergy: &str) -> bool {
        let allergy = allergy.trim().to_lowercase();
        self.combined_allergies.contains(&allergy)
    }
}
