use axum::extract::State;
use safecheck_core::domain::profile::{entities::Profile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfilesResponse {
    pub data: Vec<Profile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "List profiles",
    description = "Returns every saved profile in creation order.",
    responses(
        (status = 200, body = GetProfilesResponse)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
) -> Result<Response<GetProfilesResponse>, ApiError> {
    let profiles = state
        .service
        .get_profiles()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfilesResponse { data: profiles }))
}
