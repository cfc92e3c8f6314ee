use axum::extract::{Query, State};
use safecheck_core::domain::analysis::{
    entities::HistoryEntry, ports::AnalysisService, value_objects::GetHistoryFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::GetHistoryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    pub data: Vec<HistoryEntry>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "analysis",
    summary = "List analysis history",
    description = "Past analyses, newest first.",
    params(GetHistoryParams),
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<GetHistoryParams>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_history(GetHistoryFilter {
            offset: params.offset,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: history }))
}
