use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::risk_context::entities::AgeGroup;

/// Safety rating from 1 (very unsafe) to 5 (very safe). `None` marks a
/// report the provider did not rate; it serializes as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SafetyRating(Option<u8>);

impl SafetyRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` for values outside 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(Some(value)))
    }

    pub fn value(&self) -> Option<u8> {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}/{}", value, Self::MAX),
            None => f.write_str("Unrated"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgeSpecificWarnings {
    pub babies: String,
    pub children: String,
    pub adults: String,
    pub elderly: String,
}

impl AgeSpecificWarnings {
    pub fn get_mut(&mut self, group: AgeGroup) -> &mut String {
        match group {
            AgeGroup::Babies => &mut self.babies,
            AgeGroup::Children => &mut self.children,
            AgeGroup::Adults => &mut self.adults,
            AgeGroup::Elderly => &mut self.elderly,
        }
    }
}

/// Fixed-shape safety assessment. Every field is always present; the report
/// normalizer fills absent ones with empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub product_name: String,
    pub safety_rating: SafetyRating,
    pub overall_safety: String,
    pub general_safety: String,
    pub harmful_ingredients: Vec<String>,
    pub allergy_warnings: Vec<String>,
    pub family_warnings: Vec<String>,
    pub age_specific_warnings: AgeSpecificWarnings,
    pub compound_interactions: Vec<String>,
    pub recommendations: Vec<String>,
    pub personalized_warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_rating_bounds() {
        assert_eq!(SafetyRating::new(0), None);
        assert_eq!(SafetyRating::new(6), None);
        assert_eq!(SafetyRating::new(3).and_then(|r| r.value()), Some(3));
        assert!(!SafetyRating::default().is_rated());
    }

    #[test]
    fn safety_rating_renders_unrated_distinctly() {
        assert_eq!(SafetyRating::new(4).unwrap().to_string(), "4/5");
        assert_eq!(SafetyRating::default().to_string(), "Unrated");
    }

    #[test]
    fn report_serializes_in_camel_case() {
        let value = serde_json::to_value(AnalysisReport::default()).unwrap();

        assert_eq!(value["productName"], "");
        assert!(value["safetyRating"].is_null());
        assert_eq!(value["ageSpecificWarnings"]["elderly"], "");
        assert!(value["personalizedWarnings"].as_array().unwrap().is_empty());
    }
}
