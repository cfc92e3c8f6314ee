use axum::extract::State;
use safecheck_core::domain::family::{
    entities::Family, ports::FamilyService, value_objects::CreateFamilyInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    family::validators::CreateFamilyValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFamilyResponse {
    pub data: Family,
}

#[utoipa::path(
    post,
    path = "",
    tag = "family",
    summary = "Create family",
    description = "Creates an empty family group.",
    responses(
        (status = 201, body = CreateFamilyResponse)
    ),
    request_body = CreateFamilyValidator
)]
pub async fn create_family(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFamilyValidator>,
) -> Result<Response<CreateFamilyResponse>, ApiError> {
    let family = state
        .service
        .create_family(CreateFamilyInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateFamilyResponse { data: family }))
}
