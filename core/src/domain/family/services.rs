use tracing::info;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::{FavoriteRepository, HistoryRepository, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    family::{
        entities::Family,
        ports::{FamilyRepository, FamilyService},
        value_objects::{CreateFamilyInput, RenameFamilyInput},
    },
    profile::ports::ProfileRepository,
    selection::{entities::ActiveSelection, ports::SelectionRepository},
};

fn ensure_family_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name is required".to_string()));
    }
    Ok(())
}

impl<P, F, S, H, FV, LLM> FamilyService for Service<P, F, S, H, FV, LLM>
where
    P: ProfileRepository,
    F: FamilyRepository,
    S: SelectionRepository,
    H: HistoryRepository,
    FV: FavoriteRepository,
    LLM: LLMClient,
{
    async fn get_families(&self) -> Result<Vec<Family>, CoreError> {
        self.family_repository.list_families().await
    }

    async fn get_family(&self, family_id: Uuid) -> Result<Family, CoreError> {
        self.family_repository
            .get_by_id(family_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_family(&self, input: CreateFamilyInput) -> Result<Family, CoreError> {
        ensure_family_name(&input.name)?;

        let family = self
            .family_repository
            .create_family(Family::new(input.name))
            .await?;

        info!(family_id = %family.id, "Family created");
        Ok(family)
    }

    async fn rename_family(&self, input: RenameFamilyInput) -> Result<Family, CoreError> {
        ensure_family_name(&input.name)?;

        let mut family = self
            .family_repository
            .get_by_id(input.family_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        family.rename(input.name);
        self.family_repository.update_family(family).await
    }

    async fn delete_family(&self, family_id: Uuid) -> Result<(), CoreError> {
        self.family_repository
            .get_by_id(family_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.family_repository.delete_family(family_id).await?;

        let selection = self.selection_repository.get_selection().await?;
        if selection == (ActiveSelection::Family { family_id }) {
            self.selection_repository
                .set_selection(ActiveSelection::None)
                .await?;
        }

        info!(family_id = %family_id, "Family deleted");
        Ok(())
    }

    async fn toggle_member(&self, family_id: Uuid, profile_id: Uuid) -> Result<Family, CoreError> {
        let mut family = self
            .family_repository
            .get_by_id(family_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // Removing an orphaned id is allowed; adding requires a live profile.
        if !family.member_ids.contains(&profile_id) {
            self.profile_repository
                .get_by_id(profile_id)
                .await?
                .ok_or(CoreError::NotFound)?;
        }

        let is_member = family.toggle_member(profile_id);
        let family = self.family_repository.update_family(family).await?;

        info!(
            family_id = %family_id,
            profile_id = %profile_id,
            is_member,
            "Family membership toggled"
        );
        Ok(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{StubLLMClient, in_memory_service};
    use crate::domain::profile::{ProfileService, value_objects::CreateProfileInput};
    use crate::domain::selection::SelectionService;

    async fn create_profile<T: ProfileService>(service: &T, name: &str) -> Uuid {
        service
            .create_profile(CreateProfileInput {
                name: name.to_string(),
                age: "30".to_string(),
                allergies: vec![],
                conditions: vec![],
                weight: None,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_family_rejects_blank_name() {
        let service = in_memory_service(StubLLMClient::replying("{}"));

        let err = service
            .create_family(CreateFamilyInput { name: "   ".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn rename_family() {
        let service = in_memory_service(StubLLMClient::replying("{}"));
        let family = service
            .create_family(CreateFamilyInput { name: "Home".into() })
            .await
            .unwrap();

        let renamed = service
            .rename_family(RenameFamilyInput {
                family_id: family.id,
                name: "Cabin".into(),
            })
            .await
            .unwrap();

        assert_eq!(renamed.name, "Cabin");
        assert_eq!(service.get_families().await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn toggle_member_requires_existing_profile() {
        let service = in_memory_service(StubLLMClient::replying("{}"));
        let family = service
            .create_family(CreateFamilyInput { name: "Home".into() })
            .await
            .unwrap();

        let err = service
            .toggle_member(family.id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);

        let al = create_profile(&service, "Al").await;
        let family = service.toggle_member(family.id, al).await.unwrap();
        assert_eq!(family.member_ids, vec![al]);

        let family = service.toggle_member(family.id, al).await.unwrap();
        assert!(family.member_ids.is_empty());
    }

    #[tokio::test]
    async fn delete_active_family_clears_selection() {
        let service = in_memory_service(StubLLMClient::replying("{}"));
        let family = service
            .create_family(CreateFamilyInput { name: "Home".into() })
            .await
            .unwrap();
        service.select_family(family.id).await.unwrap();

        service.delete_family(family.id).await.unwrap();

        assert_eq!(service.get_selection().await.unwrap(), ActiveSelection::None);
        assert_eq!(
            service.delete_family(family.id).await.unwrap_err(),
            CoreError::NotFound
        );
    }
}
