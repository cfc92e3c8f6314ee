use axum::extract::State;
use safecheck_core::domain::selection::{entities::ContextPreview, ports::SelectionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetContextResponse {
    pub data: ContextPreview,
}

#[utoipa::path(
    get,
    path = "/context",
    tag = "selection",
    summary = "Preview analysis context",
    description = "Profiles in context, their combined risk context and the instruction block the next analysis will send.",
    responses(
        (status = 200, body = GetContextResponse)
    ),
)]
pub async fn get_context(
    State(state): State<AppState>,
) -> Result<Response<GetContextResponse>, ApiError> {
    let preview = state
        .service
        .preview_context()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetContextResponse { data: preview }))
}
