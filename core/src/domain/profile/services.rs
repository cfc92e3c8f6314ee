use tracing::info;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::{FavoriteRepository, HistoryRepository, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyRepository,
    profile::{
        entities::Profile,
        ports::{ProfileRepository, ProfileService},
        value_objects::{CreateProfileInput, UpdateProfileInput},
    },
    selection::{entities::ActiveSelection, ports::SelectionRepository},
};

fn ensure_present(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

impl<P, F, S, H, FV, LLM> ProfileService for Service<P, F, S, H, FV, LLM>
where
    P: ProfileRepository,
    F: FamilyRepository,
    S: SelectionRepository,
    H: HistoryRepository,
    FV: FavoriteRepository,
    LLM: LLMClient,
{
    async fn get_profiles(&self) -> Result<Vec<Profile>, CoreError> {
        self.profile_repository.list_profiles().await
    }

    async fn get_profile(&self, profile_id: Uuid) -> Result<Profile, CoreError> {
        self.profile_repository
            .get_by_id(profile_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_profile(&self, input: CreateProfileInput) -> Result<Profile, CoreError> {
        ensure_present(&input.name, "name")?;
        ensure_present(&input.age, "age")?;

        let profile = Profile::new(
            input.name,
            input.age,
            input.allergies,
            input.conditions,
            input.weight,
        );
        let profile = self.profile_repository.create_profile(profile).await?;

        info!(profile_id = %profile.id, "Profile created");
        Ok(profile)
    }

    async fn update_profile(&self, input: UpdateProfileInput) -> Result<Profile, CoreError> {
        if let Some(name) = &input.name {
            ensure_present(name, "name")?;
        }
        if let Some(age) = &input.age {
            ensure_present(age, "age")?;
        }

        let mut profile = self
            .profile_repository
            .get_by_id(input.profile_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        profile.update(
            input.name,
            input.age,
            input.allergies,
            input.conditions,
            input.weight,
        );

        self.profile_repository.update_profile(profile).await
    }

    async fn delete_profile(&self, profile_id: Uuid) -> Result<(), CoreError> {
        self.profile_repository
            .get_by_id(profile_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.profile_repository.delete_profile(profile_id).await?;
        self.family_repository
            .remove_member_from_all(profile_id)
            .await?;

        let selection = self.selection_repository.get_selection().await?;
        if selection == (ActiveSelection::Profile { profile_id }) {
            self.selection_repository
                .set_selection(ActiveSelection::None)
                .await?;
        }

        info!(profile_id = %profile_id, "Profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{StubLLMClient, in_memory_service};
    use crate::domain::family::{FamilyService, value_objects::CreateFamilyInput};
    use crate::domain::selection::SelectionService;

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
    async fn create_profile_requires_name_and_age() {
        let service = in_memory_service(StubLLMClient::replying("{}"));

        let err = service
            .create_profile(input("", "8", &[]))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Validation("name is required".to_string()));

        let err = service
            .create_profile(input("Al", "  ", &[]))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Validation("age is required".to_string()));
    }

    #[tokio::test]
    async fn create_and_update_profile() {
        let service = in_memory_service(StubLLMClient::replying("{}"));

        let profile = service
            .create_profile(input("Al", "8", &["Nuts"]))
            .await
            .unwrap();
        assert_eq!(profile.allergies, vec!["nuts"]);

        let updated = service
            .update_profile(UpdateProfileInput {
                profile_id: profile.id,
                name: None,
                age: Some("9".into()),
                allergies: Some(vec!["Nuts".into(), "Sesame".into()]),
                conditions: None,
                weight: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.age, "9");
        assert_eq!(updated.allergies, vec!["nuts", "sesame"]);
        assert_eq!(service.get_profiles().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_profile_is_not_found() {
        let service = in_memory_service(StubLLMClient::replying("{}"));

        let err = service
            .update_profile(UpdateProfileInput {
                profile_id: Uuid::new_v4(),
                name: Some("X".into()),
                age: None,
                allergies: None,
                conditions: None,
                weight: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn delete_profile_cascades_to_families_and_selection() {
        let service = in_memory_service(StubLLMClient::replying("{}"));

        let al = service.create_profile(input("Al", "8", &[])).await.unwrap();
        let bo = service.create_profile(input("Bo", "70", &[])).await.unwrap();
        let family = service
            .create_family(CreateFamilyInput {
                name: "Home".into(),
            })
            .await
            .unwrap();
        service.toggle_member(family.id, al.id).await.unwrap();
        service.toggle_member(family.id, bo.id).await.unwrap();
        service.select_profile(al.id).await.unwrap();

        service.delete_profile(al.id).await.unwrap();

        let family = service.get_family(family.id).await.unwrap();
        assert_eq!(family.member_ids, vec![bo.id]);
        assert_eq!(service.get_selection().await.unwrap(), ActiveSelection::None);
        assert_eq!(
            service.get_profile(al.id).await.unwrap_err(),
            CoreError::NotFound
        );
    }
}
