use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::ContextConfig,
    profile::entities::Profile,
    risk_context::{
        entities::{AgeGroup, RiskContext},
        synonyms::related_ingredients,
        template::ContextTemplate,
    },
};

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\+?(\d+)").expect("valid leading integer pattern"));

/// Reads the leading integer of an age field ("8", " 70", "8 years").
/// Anything else, negative numbers included, has no age.
pub fn parse_age(age: &str) -> Option<u32> {
    LEADING_INTEGER
        .captures(age)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

pub fn build_risk_context(profiles: &[Profile]) -> RiskContext {
    let mut risk_context = RiskContext::default();

    for profile in profiles {
        for allergy in &profile.allergies {
            let allergy = allergy.trim().to_lowercase();
            if !allergy.is_empty() && !risk_context.combined_allergies.contains(&allergy) {
                risk_context.combined_allergies.push(allergy);
            }
        }

        if let Some(age) = parse_age(&profile.age) {
            risk_context.age_groups.set(AgeGroup::from_age(age));
        }
    }

    risk_context
}

/// Output of the context builder: the machine-readable aggregate and the
/// instruction block for the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileContext {
    pub risk_context: RiskContext,
    pub instructions: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    expand_allergen_synonyms: bool,
}

impl ContextBuilder {
    pub fn new(config: &ContextConfig) -> Self {
        Self {
            expand_allergen_synonyms: config.expand_allergen_synonyms,
        }
    }

    pub fn build(&self, profiles: &[Profile]) -> ProfileContext {
        let risk_context = build_risk_context(profiles);

        let mut template = ContextTemplate::new(profiles, &risk_context);
        if self.expand_allergen_synonyms {
            template =
                template.with_related_ingredients(related_ingredients(&risk_context.combined_allergies));
        }

        ProfileContext {
            instructions: template.render(),
            risk_context,
        }
    }
}
