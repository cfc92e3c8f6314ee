use axum::extract::{Path, State};
use safecheck_core::domain::analysis::ports::AnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FavoriteStatus {
    pub entry_id: Uuid,
    pub favorite: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleFavoriteResponse {
    pub data: FavoriteStatus,
}

#[utoipa::path(
    post,
    path = "/history/{entry_id}/favorite",
    tag = "analysis",
    summary = "Toggle favorite",
    description = "Marks the analysis as a favorite, or unmarks it when it already is one.",
    params(
        ("entry_id" = Uuid, Path, description = "History entry ID"),
    ),
    responses(
        (status = 200, body = ToggleFavoriteResponse),
        (status = 404, description = "Entry not found")
    ),
)]
pub async fn toggle_favorite(
    Path(entry_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ToggleFavoriteResponse>, ApiError> {
    let favorite = state
        .service
        .toggle_favorite(entry_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleFavoriteResponse {
        data: FavoriteStatus { entry_id, favorite },
    }))
}
