use axum::extract::{Path, State};
use safecheck_core::domain::family::ports::FamilyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteFamilyResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{family_id}",
    tag = "family",
    summary = "Delete family",
    description = "Deletes the family. Member profiles are kept.",
    params(
        ("family_id" = Uuid, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, body = DeleteFamilyResponse),
        (status = 404, description = "Family not found")
    ),
)]
pub async fn delete_family(
    Path(family_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteFamilyResponse>, ApiError> {
    state
        .service
        .delete_family(family_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteFamilyResponse {
        message: "Family deleted successfully".to_string(),
    }))
}
