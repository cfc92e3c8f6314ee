use axum::extract::State;
use safecheck_core::domain::analysis::{
    ports::AnalysisService,
    value_objects::{AnalyzeProductInput, ImageReference},
};

use crate::application::{
    credential::ProviderCredential,
    http::{
        analysis::{
            handlers::analyze_image::AnalyzeProductResponse, validators::AnalyzeUrlValidator,
        },
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/url",
    tag = "analysis",
    summary = "Analyze product photo by URL",
    description = "Same as the upload endpoint, for an image reachable by URL or given as a data URI.",
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 400, description = "Invalid URL or missing API key"),
        (status = 429, description = "Rate limit exceeded"),
        (status = 502, description = "Provider failure or unparseable result")
    ),
    request_body = AnalyzeUrlValidator
)]
pub async fn analyze_url(
    State(state): State<AppState>,
    ProviderCredential(credential): ProviderCredential,
    ValidateJson(payload): ValidateJson<AnalyzeUrlValidator>,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let image = ImageReference::from_url(&payload.image_url).map_err(ApiError::from)?;

    let entry = state
        .service
        .analyze_product(AnalyzeProductInput {
            image: Some(image),
            credential,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: entry }))
}
