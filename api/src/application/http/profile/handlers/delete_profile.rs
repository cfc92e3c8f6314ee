use axum::extract::{Path, State};
use safecheck_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProfileResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Delete profile",
    description = "Deletes the profile, removes it from every family and clears it from the active selection.",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = DeleteProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn delete_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProfileResponse>, ApiError> {
    state
        .service
        .delete_profile(profile_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProfileResponse {
        message: "Profile deleted successfully".to_string(),
    }))
}
