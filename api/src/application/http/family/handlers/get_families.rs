use axum::extract::State;
use safecheck_core::domain::family::{entities::Family, ports::FamilyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFamiliesResponse {
    pub data: Vec<Family>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "family",
    summary = "List families",
    responses(
        (status = 200, body = GetFamiliesResponse)
    ),
)]
pub async fn get_families(
    State(state): State<AppState>,
) -> Result<Response<GetFamiliesResponse>, ApiError> {
    let families = state
        .service
        .get_families()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFamiliesResponse { data: families }))
}
