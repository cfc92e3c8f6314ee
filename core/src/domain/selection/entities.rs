use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    family::entities::Family, profile::entities::Profile, risk_context::entities::RiskContext,
};

/// Which profile or family the next analysis is personalized for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActiveSelection {
    #[default]
    None,
    Profile {
        profile_id: Uuid,
    },
    Family {
        family_id: Uuid,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContextPreview {
    pub selection: ActiveSelection,
    pub profiles: Vec<Profile>,
    pub risk_context: RiskContext,
    pub instructions: String,
}

/// Resolves a selection into the profiles it covers. Family members keep the
/// order of the profile list; member ids without a profile are skipped, as
/// is a selection pointing at a missing profile or family.
pub fn resolve_context_profiles(
    selection: &ActiveSelection,
    profiles: &[Profile],
    families: &[Family],
) -> Vec<Profile> {
    match selection {
        ActiveSelection::None => Vec::new(),
        ActiveSelection::Profile { profile_id } => profiles
            .iter()
            .filter(|p| p.id == *profile_id)
            .take(1)
            .cloned()
            .collect(),
        ActiveSelection::Family { family_id } => families
            .iter()
            .find(|f| f.id == *family_id)
            .map(|family| {
                profiles
                    .iter()
                    .filter(|p| family.member_ids.contains(&p.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default(),
    }
}
