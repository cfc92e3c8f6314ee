use axum::extract::{Path, State};
use safecheck_core::domain::analysis::ports::AnalysisService;
use uuid::Uuid;

use crate::application::http::{
    analysis::handlers::analyze_image::AnalyzeProductResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/history/{entry_id}",
    tag = "analysis",
    summary = "Get analysis",
    params(
        ("entry_id" = Uuid, Path, description = "History entry ID"),
    ),
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 404, description = "Entry not found")
    ),
)]
pub async fn get_history_entry(
    Path(entry_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let entry = state
        .service
        .get_history_entry(entry_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: entry }))
}
