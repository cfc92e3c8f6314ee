use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, ports::ProfileRepository},
};
use crate::infrastructure::store::{JsonStore, PROFILES_KEY};

#[derive(Debug, Clone)]
pub struct StoreProfileRepository {
    pub store: JsonStore,
}

impl StoreProfileRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl ProfileRepository for StoreProfileRepository {
    async fn list_profiles(&self) -> Result<Vec<Profile>, CoreError> {
        self.store.get_or_default(PROFILES_KEY).await
    }

    async fn get_by_id(&self, profile_id: Uuid) -> Result<Option<Profile>, CoreError> {
        let profiles: Vec<Profile> = self.store.get_or_default(PROFILES_KEY).await?;

        Ok(profiles.into_iter().find(|p| p.id == profile_id))
    }

    async fn create_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        self.store
            .update(PROFILES_KEY, |profiles: &mut Vec<Profile>| {
                profiles.push(profile.clone());
                Ok(())
            })
            .await?;

        Ok(profile)
    }

    async fn update_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        self.store
            .update(PROFILES_KEY, |profiles: &mut Vec<Profile>| {
                let existing = profiles
                    .iter_mut()
                    .find(|p| p.id == profile.id)
                    .ok_or(CoreError::NotFound)?;
                *existing = profile.clone();
                Ok(())
            })
            .await?;

        Ok(profile)
    }

    async fn delete_profile(&self, profile_id: Uuid) -> Result<(), CoreError> {
        self.store
            .update(PROFILES_KEY, |profiles: &mut Vec<Profile>| {
                let before = profiles.len();
                profiles.retain(|p| p.id != profile_id);
                if profiles.len() == before {
                    return Err(CoreError::NotFound);
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile::new(name.into(), "30".into(), vec!["Nuts".into()], vec![], None)
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let repository = StoreProfileRepository::new(JsonStore::in_memory());
        let al = repository.create_profile(profile("Al")).await.unwrap();
        let bo = repository.create_profile(profile("Bo")).await.unwrap();

        assert_eq!(repository.list_profiles().await.unwrap(), vec![al.clone(), bo.clone()]);

        let mut renamed = al.clone();
        renamed.name = "Alan".into();
        repository.update_profile(renamed.clone()).await.unwrap();
        assert_eq!(repository.get_by_id(al.id).await.unwrap(), Some(renamed));

        repository.delete_profile(bo.id).await.unwrap();
        assert_eq!(repository.get_by_id(bo.id).await.unwrap(), None);
        assert_eq!(
            repository.delete_profile(bo.id).await.unwrap_err(),
            CoreError::NotFound
        );
    }

    #[tokio::test]
    async fn updating_missing_profile_fails() {
        let repository = StoreProfileRepository::new(JsonStore::in_memory());

        let err = repository.update_profile(profile("Al")).await.unwrap_err();

        assert_eq!(err, CoreError::NotFound);
        assert!(repository.list_profiles().await.unwrap().is_empty());
    }
}
