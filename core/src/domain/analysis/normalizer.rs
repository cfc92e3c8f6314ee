//! Turns provider output into a complete [`AnalysisReport`].
//!
//! The provider is asked for strict JSON but routinely wraps it in prose or
//! code fences, omits keys, or returns list items as objects. Only the total
//! absence of a JSON object is an error; every other defect is repaired.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::{
    analysis::entities::{AgeSpecificWarnings, AnalysisReport, SafetyRating},
    common::entities::app_errors::CoreError,
    risk_context::entities::AgeGroup,
};

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)").expect("valid leading number pattern")
});

const ITEM_SUBJECT_KEYS: [&str; 2] = ["ingredient", "name"];
const ITEM_DETAIL_KEYS: [&str; 3] = ["explanation", "description", "warning"];
const UNKNOWN_SUBJECT: &str = "Unknown";

pub fn normalize_report(raw: &str) -> Result<AnalysisReport, CoreError> {
    let object = extract_json_object(raw)?;
    Ok(LooseReport::from_map(object).into_report())
}

/// Locates the JSON object embedded in `raw`: first the widest span from the
/// first `{` to the last `}`, then the balanced object opened by the first
/// `{`.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, CoreError> {
    let start = raw.find('{').ok_or_else(|| {
        warn!("Provider response contains no JSON object");
        CoreError::ParseError("no JSON object in response".to_string())
    })?;

    let mut last_error = String::from("unterminated JSON object");

    if let Some(end) = raw.rfind('}').filter(|end| *end > start) {
        match serde_json::from_str::<Value>(&raw[start..=end]) {
            Ok(Value::Object(object)) => return Ok(object),
            Ok(_) => last_error = "response JSON is not an object".to_string(),
            Err(e) => {
                debug!("Widest JSON span did not parse: {}", e);
                last_error = e.to_string();
            }
        }
    }

    if let Some(len) = balanced_object_len(&raw[start..]) {
        match serde_json::from_str::<Value>(&raw[start..start + len]) {
            Ok(Value::Object(object)) => return Ok(object),
            Ok(_) => last_error = "response JSON is not an object".to_string(),
            Err(e) => last_error = e.to_string(),
        }
    }

    warn!("Failed to parse provider response: {}", last_error);
    Err(CoreError::ParseError(last_error))
}

/// Byte length of the object opening at the start of `text`, skipping
/// braces inside string literals.
fn balanced_object_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Provider output before coercion: every expected key, untyped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LooseReport {
    pub product_name: Value,
    pub safety_rating: Value,
    pub overall_safety: Value,
    pub general_safety: Value,
    pub harmful_ingredients: Value,
    pub allergy_warnings: Value,
    pub family_warnings: Value,
    pub age_specific_warnings: Value,
    pub compound_interactions: Value,
    pub recommendations: Value,
    pub personalized_warnings: Value,
}

impl LooseReport {
    /// Reads each key in camelCase, falling back to snake_case.
    pub fn from_map(mut object: Map<String, Value>) -> Self {
        let mut take = |camel: &str, snake: &str| {
            object
                .remove(camel)
                .or_else(|| object.remove(snake))
                .unwrap_or(Value::Null)
        };

        Self {
            product_name: take("productName", "product_name"),
            safety_rating: take("safetyRating", "safety_rating"),
            overall_safety: take("overallSafety", "overall_safety"),
            general_safety: take("generalSafety", "general_safety"),
            harmful_ingredients: take("harmfulIngredients", "harmful_ingredients"),
            allergy_warnings: take("allergyWarnings", "allergy_warnings"),
            family_warnings: take("familyWarnings", "family_warnings"),
            age_specific_warnings: take("ageSpecificWarnings", "age_specific_warnings"),
            compound_interactions: take("compoundInteractions", "compound_interactions"),
            recommendations: take("recommendations", "recommendations"),
            personalized_warnings: take("personalizedWarnings", "personalized_warnings"),
        }
    }

    pub fn into_report(self) -> AnalysisReport {
        AnalysisReport {
            product_name: coerce_text(&self.product_name),
            safety_rating: coerce_rating(&self.safety_rating),
            overall_safety: coerce_text(&self.overall_safety),
            general_safety: coerce_text(&self.general_safety),
            harmful_ingredients: coerce_list(&self.harmful_ingredients),
            allergy_warnings: coerce_list(&self.allergy_warnings),
            family_warnings: coerce_list(&self.family_warnings),
            age_specific_warnings: coerce_age_warnings(&self.age_specific_warnings),
            compound_interactions: coerce_list(&self.compound_interactions),
            recommendations: coerce_list(&self.recommendations),
            personalized_warnings: coerce_list(&self.personalized_warnings),
        }
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_rating(value: &Value) -> SafetyRating {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => LEADING_NUMBER
            .captures(s)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok()),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .map(f64::round)
        .filter(|n| (f64::from(SafetyRating::MIN)..=f64::from(SafetyRating::MAX)).contains(n))
        .and_then(|n| SafetyRating::new(n as u8))
        .unwrap_or_default()
}

fn coerce_age_warnings(value: &Value) -> AgeSpecificWarnings {
    let mut warnings = AgeSpecificWarnings::default();
    if let Value::Object(object) = value {
        for group in AgeGroup::ALL {
            if let Some(text) = object.get(group.as_str()) {
                *warnings.get_mut(group) = coerce_text(text);
            }
        }
    }
    warnings
}

fn coerce_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(coerce_item).collect(),
        _ => Vec::new(),
    }
}

fn coerce_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(object) => {
            let subject = first_present(object, &ITEM_SUBJECT_KEYS)
                .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string());
            let detail = first_present(object, &ITEM_DETAIL_KEYS).unwrap_or_default();
            format!("{}: {}", subject, detail)
        }
        Value::Null | Value::Array(_) => format!("{}: ", UNKNOWN_SUBJECT),
    }
}

/// First candidate key holding a non-empty value. Empty strings, zero,
/// `false` and `null` count as absent.
fn first_present(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            Value::Array(_) | Value::Object(_) => Some(value.to_string()),
            _ => None,
        })
}
