use axum::extract::{Path, State};
use safecheck_core::domain::family::{entities::Family, ports::FamilyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleMemberResponse {
    pub data: Family,
}

#[utoipa::path(
    post,
    path = "/{family_id}/members/{profile_id}",
    tag = "family",
    summary = "Toggle family member",
    description = "Adds the profile to the family, or removes it when already a member.",
    params(
        ("family_id" = Uuid, Path, description = "Family ID"),
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = ToggleMemberResponse),
        (status = 404, description = "Family or profile not found")
    ),
)]
pub async fn toggle_member(
    Path((family_id, profile_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<ToggleMemberResponse>, ApiError> {
    let family = state
        .service
        .toggle_member(family_id, profile_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleMemberResponse { data: family }))
}
