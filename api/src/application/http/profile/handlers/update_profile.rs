use axum::extract::{Path, State};
use safecheck_core::domain::profile::{
    entities::Profile, ports::ProfileService, value_objects::UpdateProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    profile::validators::UpdateProfileValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    put,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Update profile",
    description = "Updates the fields present in the body and leaves the others untouched.",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 404, description = "Profile not found")
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(UpdateProfileInput {
            profile_id,
            name: payload.name,
            age: payload.age,
            allergies: payload.allergies,
            conditions: payload.conditions,
            weight: payload.weight,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
