use axum::extract::{Path, State};
use safecheck_core::domain::family::{
    entities::Family, ports::FamilyService, value_objects::RenameFamilyInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    family::validators::RenameFamilyValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RenameFamilyResponse {
    pub data: Family,
}

#[utoipa::path(
    put,
    path = "/{family_id}",
    tag = "family",
    summary = "Rename family",
    params(
        ("family_id" = Uuid, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, body = RenameFamilyResponse),
        (status = 404, description = "Family not found")
    ),
    request_body = RenameFamilyValidator
)]
pub async fn rename_family(
    Path(family_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RenameFamilyValidator>,
) -> Result<Response<RenameFamilyResponse>, ApiError> {
    let family = state
        .service
        .rename_family(RenameFamilyInput {
            family_id,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RenameFamilyResponse { data: family }))
}
