use axum::extract::State;
use safecheck_core::domain::selection::{entities::ActiveSelection, ports::SelectionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SelectionResponse {
    pub data: ActiveSelection,
}

#[utoipa::path(
    get,
    path = "",
    tag = "selection",
    summary = "Get active selection",
    responses(
        (status = 200, body = SelectionResponse)
    ),
)]
pub async fn get_selection(
    State(state): State<AppState>,
) -> Result<Response<SelectionResponse>, ApiError> {
    let selection = state
        .service
        .get_selection()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SelectionResponse { data: selection }))
}
