use crate::domain::{
    profile::entities::Profile,
    risk_context::entities::{AgeGroup, RiskContext},
};

pub const NO_PROFILE_INSTRUCTIONS: &str =
    "No profile or family selected. Provide a general safety analysis.";

const CRITICAL_INSTRUCTIONS: &str = "1. Highlight it as a safety concern for those members.
2. Lower the safety rating accordingly.
3. Include a \"familyWarnings\" entry specifying which profile(s) or age group(s) are at risk.
4. Repeat under \"personalizedWarnings.\"";

/// Named slots of the profile instruction block. Each slot is filled
/// independently so the rendered text can be checked piece by piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextTemplate {
    pub profile_lines: Vec<String>,
    pub combined_allergies: Vec<String>,
    pub related_ingredients: Vec<String>,
    pub age_groups: Vec<AgeGroup>,
}

impl ContextTemplate {
    pub fn new(profiles: &[Profile], risk_context: &RiskContext) -> Self {
        Self {
            profile_lines: profiles.iter().map(profile_line).collect(),
            combined_allergies: risk_context.combined_allergies.clone(),
            related_ingredients: Vec::new(),
            age_groups: risk_context.age_groups.active_groups(),
        }
    }

    pub fn with_related_ingredients(mut self, related: Vec<String>) -> Self {
        self.related_ingredients = related;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.profile_lines.is_empty()
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_PROFILE_INSTRUCTIONS.to_string();
        }

        let allergies = join_or(&self.combined_allergies, "None");
        let mut text = format!(
            "IMPORTANT PROFILES IN CONTEXT:\n{}\n\nCOMBINED ALLERGIES: {}\n",
            self.profile_lines.join("\n"),
            allergies
        );

        if !self.related_ingredients.is_empty() {
            text.push_str(&format!(
                "RELATED INGREDIENTS: {}\n",
                self.related_ingredients.join(", ")
            ));
        }

        let age_lines = if self.age_groups.is_empty() {
            "- none".to_string()
        } else {
            self.age_groups
                .iter()
                .map(|group| format!("- {}", group))
                .collect::<Vec<_>>()
                .join("\n")
        };

        text.push_str(&format!(
            "\nAGE GROUPS IN FAMILY:\n{}\n\nCRITICAL: If this product contains any ingredients matching any of the combined allergies ({}) OR is unsafe for any of the age groups listed above, you MUST:\n{}",
            age_lines,
            join_or(&self.combined_allergies, "none"),
            CRITICAL_INSTRUCTIONS
        ));

        text
    }
}

fn join_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}

fn profile_line(profile: &Profile) -> String {
    let mut line = format!(
        "- Name: {} | Age: {} | Allergies: {}",
        profile.name,
        profile.age,
        join_or(&profile.allergies, "None")
    );
    if !profile.conditions.is_empty() {
        line.push_str(&format!(" | Conditions: {}", profile.conditions.join(", ")));
    }
    if let Some(weight) = &profile.weight {
        line.push_str(&format!(" | Weight: {}", weight));
    }
    line
}
