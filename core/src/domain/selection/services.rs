use tracing::info;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::{FavoriteRepository, HistoryRepository, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyRepository,
    profile::{entities::Profile, ports::ProfileRepository},
    risk_context::ContextBuilder,
    selection::{
        entities::{ActiveSelection, ContextPreview, resolve_context_profiles},
        ports::{SelectionRepository, SelectionService},
    },
};

impl<P, F, S, H, FV, LLM> SelectionService for Service<P, F, S, H, FV, LLM>
where
    P: ProfileRepository,
    F: FamilyRepository,
    S: SelectionRepository,
    H: HistoryRepository,
    FV: FavoriteRepository,
    LLM: LLMClient,
{
    async fn get_selection(&self) -> Result<ActiveSelection, CoreError> {
        self.selection_repository.get_selection().await
    }

    async fn select_profile(&self, profile_id: Uuid) -> Result<ActiveSelection, CoreError> {
        self.profile_repository
            .get_by_id(profile_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        info!(profile_id = %profile_id, "Profile selected");
        self.selection_repository
            .set_selection(ActiveSelection::Profile { profile_id })
            .await
    }

    async fn select_family(&self, family_id: Uuid) -> Result<ActiveSelection, CoreError> {
        self.family_repository
            .get_by_id(family_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        info!(family_id = %family_id, "Family selected");
        self.selection_repository
            .set_selection(ActiveSelection::Family { family_id })
            .await
    }

    async fn clear_selection(&self) -> Result<ActiveSelection, CoreError> {
        self.selection_repository
            .set_selection(ActiveSelection::None)
            .await
    }

    async fn get_context_profiles(&self) -> Result<Vec<Profile>, CoreError> {
        let selection = self.selection_repository.get_selection().await?;
        if selection == ActiveSelection::None {
            return Ok(Vec::new());
        }

        let profiles = self.profile_repository.list_profiles().await?;
        let families = self.family_repository.list_families().await?;

        Ok(resolve_context_profiles(&selection, &profiles, &families))
    }

    async fn preview_context(&self) -> Result<ContextPreview, CoreError> {
        let selection = self.selection_repository.get_selection().await?;
        let profiles = self.get_context_profiles().await?;
        let context = ContextBuilder::new(&self.context_config).build(&profiles);

        Ok(ContextPreview {
            selection,
            profiles,
            risk_context: context.risk_context,
            instructions: context.instructions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{StubLLMClient, in_memory_service};
    use crate::domain::family::{FamilyService, value_objects::CreateFamilyInput};
    use crate::domain::profile::{ProfileService, value_objects::CreateProfileInput};
    use crate::domain::risk_context::template::NO_PROFILE_INSTRUCTIONS;

    fn input(name: &str, age: &str, allergies: &[&str]) -> CreateProfileInput {
        CreateProfileInput {
            name: name.to_string(),
            age: age.to_string(),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
            conditions: vec![],
            weight: None,
        }
    }

    #[tokio::test]
    async fn selecting_unknown_targets_fails() {
        let service = in_memory_service(StubLLMClient::replying("{}"));

        assert_eq!(
            service.select_profile(Uuid::new_v4()).await.unwrap_err(),
            CoreError::NotFound
        );
        assert_eq!(
            service.select_family(Uuid::new_v4()).await.unwrap_err(),
            CoreError::NotFound
        );
        assert_eq!(service.get_selection().await.unwrap(), ActiveSelection::None);
    }

    #[tokio::test]
    async fn preview_without_selection_uses_fallback() {
        let service = in_memory_service(StubLLMClient::replying("{}"));
        service.create_profile(input("Al", "8", &["nuts"])).await.unwrap();

        let preview = service.preview_context().await.unwrap();

        assert_eq!(preview.selection, ActiveSelection::None);
        assert!(preview.profiles.is_empty());
        assert_eq!(preview.instructions, NO_PROFILE_INSTRUCTIONS);
    }

    #[tokio::test]
    async fn family_selection_replaces_profile_selection() {
        let service = in_memory_service(StubLLMClient::replying("{}"));
        let al = service.create_profile(input("Al", "8", &["nuts"])).await.unwrap();
        let bo = service
            .create_profile(input("Bo", "70", &["dairy"]))
            .await
            .unwrap();
        let family = service
            .create_family(CreateFamilyInput { name: "Home".into() })
            .await
            .unwrap();
        service.toggle_member(family.id, al.id).await.unwrap();
        service.toggle_member(family.id, bo.id).await.unwrap();

        service.select_profile(al.id).await.unwrap();
        assert_eq!(service.get_context_profiles().await.unwrap(), vec![al.clone()]);

        service.select_family(family.id).await.unwrap();
        let preview = service.preview_context().await.unwrap();

        assert_eq!(
            preview.selection,
            ActiveSelection::Family {
                family_id: family.id
            }
        );
        assert_eq!(preview.profiles, vec![al, bo]);
        assert_eq!(preview.risk_context.combined_allergies, vec!["nuts", "dairy"]);
        assert!(preview.instructions.contains("- children\n- elderly"));

        service.clear_selection().await.unwrap();
        assert!(service.get_context_profiles().await.unwrap().is_empty());
    }
}
