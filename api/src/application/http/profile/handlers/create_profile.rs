use axum::extract::State;
use safecheck_core::domain::profile::{
    entities::Profile, ports::ProfileService, value_objects::CreateProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    profile::validators::CreateProfileValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    post,
    path = "",
    tag = "profile",
    summary = "Create profile",
    description = "Creates a person profile. Allergies are trimmed, lowercased and deduplicated.",
    responses(
        (status = 201, body = CreateProfileResponse),
        (status = 400, description = "Missing name or age")
    ),
    request_body = CreateProfileValidator
)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProfileValidator>,
) -> Result<Response<CreateProfileResponse>, ApiError> {
    let profile = state
        .service
        .create_profile(CreateProfileInput {
            name: payload.name,
            age: payload.age,
            allergies: payload.allergies,
            conditions: payload.conditions,
            weight: payload.weight,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProfileResponse { data: profile }))
}
