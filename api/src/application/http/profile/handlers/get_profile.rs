use axum::extract::{Path, State};
use safecheck_core::domain::profile::{entities::Profile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    get,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Get profile",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn get_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(profile_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
