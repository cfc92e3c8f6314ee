use axum::extract::{Multipart, State};
use safecheck_core::domain::analysis::{
    entities::HistoryEntry,
    ports::AnalysisService,
    value_objects::{AnalyzeProductInput, ImageReference},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    credential::ProviderCredential,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeProductResponse {
    pub data: HistoryEntry,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "analysis",
    summary = "Analyze product photo",
    description = "Analyzes an uploaded product photo (multipart field `image`) against the active profile or family. A bearer token, when present, is used as the provider API key.",
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 400, description = "Missing image or API key"),
        (status = 429, description = "Rate limit exceeded"),
        (status = 502, description = "Provider failure or unparseable result")
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    ProviderCredential(credential): ProviderCredential,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let mut image: Option<ImageReference> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_IMAGE_TYPE)
            .to_string();
        if !mime_type.starts_with("image/") {
            return Err(ApiError::BadRequest(format!(
                "Unsupported image type: {}",
                mime_type
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(ImageReference::inline(mime_type, data.to_vec()));
    }

    let entry = state
        .service
        .analyze_product(AnalyzeProductInput { image, credential })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: entry }))
}
