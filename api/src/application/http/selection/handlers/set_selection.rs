use axum::extract::State;
use safecheck_core::domain::selection::ports::SelectionService;

use crate::application::http::{
    selection::{handlers::get_selection::SelectionResponse, validators::SetSelectionValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "",
    tag = "selection",
    summary = "Select profile or family",
    description = "Replaces the active selection with the given profile or family.",
    responses(
        (status = 200, body = SelectionResponse),
        (status = 404, description = "Profile or family not found")
    ),
    request_body = SetSelectionValidator
)]
pub async fn set_selection(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetSelectionValidator>,
) -> Result<Response<SelectionResponse>, ApiError> {
    let selection = match (payload.profile_id, payload.family_id) {
        (Some(profile_id), _) => state.service.select_profile(profile_id).await,
        (None, Some(family_id)) => state.service.select_family(family_id).await,
        (None, None) => state.service.clear_selection().await,
    }
    .map_err(ApiError::from)?;

    Ok(Response::OK(SelectionResponse { data: selection }))
}
