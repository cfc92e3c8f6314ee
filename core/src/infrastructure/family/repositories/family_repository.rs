use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{entities::Family, ports::FamilyRepository},
};
use crate::infrastructure::store::{FAMILIES_KEY, JsonStore};

#[derive(Debug, Clone)]
pub struct StoreFamilyRepository {
    pub store: JsonStore,
}

impl StoreFamilyRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl FamilyRepository for StoreFamilyRepository {
    async fn list_families(&self) -> Result<Vec<Family>, CoreError> {
        self.store.get_or_default(FAMILIES_KEY).await
    }

    async fn get_by_id(&self, family_id: Uuid) -> Result<Option<Family>, CoreError> {
        let families: Vec<Family> = self.store.get_or_default(FAMILIES_KEY).await?;

        Ok(families.into_iter().find(|f| f.id == family_id))
    }

    async fn create_family(&self, family: Family) -> Result<Family, CoreError> {
        self.store
            .update(FAMILIES_KEY, |families: &mut Vec<Family>| {
                families.push(family.clone());
                Ok(())
            })
            .await?;

        Ok(family)
    }

    async fn update_family(&self, family: Family) -> Result<Family, CoreError> {
        self.store
            .update(FAMILIES_KEY, |families: &mut Vec<Family>| {
                let existing = families
                    .iter_mut()
                    .find(|f| f.id == family.id)
                    .ok_or(CoreError::NotFound)?;
                *existing = family.clone();
                Ok(())
            })
            .await?;

        Ok(family)
    }

    async fn delete_family(&self, family_id: Uuid) -> Result<(), CoreError> {
        self.store
            .update(FAMILIES_KEY, |families: &mut Vec<Family>| {
                let before = families.len();
                families.retain(|f| f.id != family_id);
                if families.len() == before {
                    return Err(CoreError::NotFound);
                }
                Ok(())
            })
            .await
    }

    async fn remove_member_from_all(&self, profile_id: Uuid) -> Result<(), CoreError> {
        self.store
            .update(FAMILIES_KEY, |families: &mut Vec<Family>| {
                for family in families.iter_mut() {
                    family.remove_member(profile_id);
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_member_from_every_family() {
        let repository = StoreFamilyRepository::new(JsonStore::in_memory());
        let profile_id = Uuid::new_v4();
        let other_id = Uuid::new_v4();

        let mut home = Family::new("Home".into());
        home.toggle_member(profile_id);
        home.toggle_member(other_id);
        let mut cabin = Family::new("Cabin".into());
        cabin.toggle_member(profile_id);
        repository.create_family(home.clone()).await.unwrap();
        repository.create_family(cabin.clone()).await.unwrap();

        repository.remove_member_from_all(profile_id).await.unwrap();

        let families = repository.list_families().await.unwrap();
        assert_eq!(families[0].member_ids, vec![other_id]);
        assert!(families[1].member_ids.is_empty());
    }

    #[tokio::test]
    async fn deleting_unknown_family_fails() {
        let repository = StoreFamilyRepository::new(JsonStore::in_memory());

        assert_eq!(
            repository.delete_family(Uuid::new_v4()).await.unwrap_err(),
            CoreError::NotFound
        );
    }
}
