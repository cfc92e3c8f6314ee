use axum::extract::State;
use safecheck_core::domain::selection::ports::SelectionService;

use crate::application::http::{
    selection::handlers::get_selection::SelectionResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "",
    tag = "selection",
    summary = "Clear selection",
    description = "Subsequent analyses are not personalized.",
    responses(
        (status = 200, body = SelectionResponse)
    ),
)]
pub async fn clear_selection(
    State(state): State<AppState>,
) -> Result<Response<SelectionResponse>, ApiError> {
    let selection = state
        .service
        .clear_selection()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SelectionResponse { data: selection }))
}
