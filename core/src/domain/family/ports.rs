use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{
        entities::Family,
        value_objects::{CreateFamilyInput, RenameFamilyInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FamilyRepository: Send + Sync {
    fn list_families(&self) -> impl Future<Output = Result<Vec<Family>, CoreError>> + Send;

    fn get_by_id(
        &self,
        family_id: Uuid,
    ) -> impl Future<Output = Result<Option<Family>, CoreError>> + Send;

    fn create_family(
        &self,
        family: Family,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;

    fn update_family(
        &self,
        family: Family,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;

    fn delete_family(&self, family_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Drops the profile from every family that lists it.
    fn remove_member_from_all(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait FamilyService: Send + Sync {
    fn get_families(&self) -> impl Future<Output = Result<Vec<Family>, CoreError>> + Send;

    fn get_family(&self, family_id: Uuid)
    -> impl Future<Output = Result<Family, CoreError>> + Send;

    fn create_family(
        &self,
        input: CreateFamilyInput,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;

    fn rename_family(
        &self,
        input: RenameFamilyInput,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;

    fn delete_family(&self, family_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_member(
        &self,
        family_id: Uuid,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;
}
