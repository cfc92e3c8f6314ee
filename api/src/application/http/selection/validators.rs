use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Exactly one of `profile_id` and `family_id`.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_single_target"))]
pub struct SetSelectionValidator {
    #[serde(default)]
    pub profile_id: Option<Uuid>,

    #[serde(default)]
    pub family_id: Option<Uuid>,
}

fn validate_single_target(payload: &SetSelectionValidator) -> Result<(), ValidationError> {
    match (payload.profile_id, payload.family_id) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(ValidationError::new("single_target")
            .with_message("exactly one of profile_id or family_id is required".into())),
    }
}
