use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::{Favorite, HistoryEntry},
        normalizer::normalize_report,
        ports::{AnalysisService, FavoriteRepository, HistoryRepository, LLMClient},
        schema::build_analysis_prompt,
        value_objects::{AnalyzeProductInput, GetHistoryFilter},
    },
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyRepository,
    profile::ports::ProfileRepository,
    risk_context::ContextBuilder,
    selection::{
        entities::{ActiveSelection, resolve_context_profiles},
        ports::SelectionRepository,
    },
};

pub const MISSING_IMAGE_MESSAGE: &str = "Please upload or capture an image first.";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please configure your OpenAI API key.";

impl<P, F, S, H, FV, LLM> AnalysisService for Service<P, F, S, H, FV, LLM>
where
    P: ProfileRepository,
    F: FamilyRepository,
    S: SelectionRepository,
    H: HistoryRepository,
    FV: FavoriteRepository,
    LLM: LLMClient,
{
    async fn analyze_product(&self, input: AnalyzeProductInput) -> Result<HistoryEntry, CoreError> {
        // 1. Validate input
        let image = input
            .image
            .filter(|image| !image.is_empty())
            .ok_or_else(|| CoreError::Validation(MISSING_IMAGE_MESSAGE.to_string()))?;

        let credential = input.credential.filter(|key| !key.trim().is_empty());
        if credential.is_none() && !self.llm_client.is_configured() {
            return Err(CoreError::Validation(MISSING_CREDENTIAL_MESSAGE.to_string()));
        }

        // 2. Resolve the profiles in context
        let selection = self.selection_repository.get_selection().await?;
        let profiles = if selection == ActiveSelection::None {
            Vec::new()
        } else {
            let profiles = self.profile_repository.list_profiles().await?;
            let families = self.family_repository.list_families().await?;
            resolve_context_profiles(&selection, &profiles, &families)
        };

        // 3. Build prompt
        let context = ContextBuilder::new(&self.context_config).build(&profiles);
        let prompt = build_analysis_prompt(&context.instructions);

        // 4. Call LLM
        let image_reference = image.to_request_url();
        let raw_response = self
            .llm_client
            .analyze_image(prompt, image, credential)
            .await
            .inspect_err(|e| error!("Product analysis request failed: {}", e))?;

        // 5. Normalize
        let report = normalize_report(&raw_response)?;

        // 6. Record
        let entry = HistoryEntry::new(image_reference, report);
        let entry = self
            .history_repository
            .prepend_entry(entry, self.history_limit)
            .await?;

        info!(
            entry_id = %entry.id,
            profiles = profiles.len(),
            safety_rating = %entry.report.safety_rating,
            "Product analyzed"
        );
        Ok(entry)
    }

    async fn get_history(&self, filter: GetHistoryFilter) -> Result<Vec<HistoryEntry>, CoreError> {
        self.history_repository.list_history(filter).await
    }

    async fn get_history_entry(&self, entry_id: Uuid) -> Result<HistoryEntry, CoreError> {
        self.history_repository
            .get_by_id(entry_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_favorites(&self) -> Result<Vec<Favorite>, CoreError> {
        self.favorite_repository.list_favorites().await
    }

    async fn toggle_favorite(&self, entry_id: Uuid) -> Result<bool, CoreError> {
        let entry = self.get_history_entry(entry_id).await?;
        let favorite = self
            .favorite_repository
            .toggle_favorite(Favorite::from_history_entry(&entry))
            .await?;

        info!(entry_id = %entry_id, favorite, "Favorite toggled");
        Ok(favorite)
    }
}
