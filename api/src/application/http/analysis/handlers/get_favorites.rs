use axum::extract::State;
use safecheck_core::domain::analysis::{entities::Favorite, ports::AnalysisService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFavoritesResponse {
    pub data: Vec<Favorite>,
}

#[utoipa::path(
    get,
    path = "/favorites",
    tag = "analysis",
    summary = "List favorites",
    responses(
        (status = 200, body = GetFavoritesResponse)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
) -> Result<Response<GetFavoritesResponse>, ApiError> {
    let favorites = state
        .service
        .get_favorites()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFavoritesResponse { data: favorites }))
}
