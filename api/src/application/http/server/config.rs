use axum::{Json, extract::State};
use safecheck_core::domain::analysis::ports::LLMClient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;

/// Public runtime settings. Never includes the provider key itself.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub model: String,
    pub llm_configured: bool,
    pub expand_allergen_synonyms: bool,
    pub history_limit: Option<usize>,
    pub persistent_storage: bool,
    pub metrics_enabled: bool,
    pub rate_limit_per_minute: u32,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get server configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        model: state.args.openai.model.clone(),
        llm_configured: state.service.llm_client.is_configured(),
        expand_allergen_synonyms: state.service.context_config.expand_allergen_synonyms,
        history_limit: state.service.history_limit.map(|limit| limit.get()),
        persistent_storage: state.service.store().path().is_some(),
        metrics_enabled: state.args.server.metrics_enabled,
        rate_limit_per_minute: state.args.server.rate_limit_per_minute,
    })
}
