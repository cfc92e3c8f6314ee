use axum::extract::{Path, State};
use safecheck_core::domain::family::{entities::Family, ports::FamilyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFamilyResponse {
    pub data: Family,
}

#[utoipa::path(
    get,
    path = "/{family_id}",
    tag = "family",
    summary = "Get family",
    params(
        ("family_id" = Uuid, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, body = GetFamilyResponse),
        (status = 404, description = "Family not found")
    ),
)]
pub async fn get_family(
    Path(family_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetFamilyResponse>, ApiError> {
    let family = state
        .service
        .get_family(family_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFamilyResponse { data: family }))
}
