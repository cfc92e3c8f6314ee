use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::Profile,
        value_objects::{CreateProfileInput, UpdateProfileInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn list_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    fn get_by_id(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;

    fn create_profile(
        &self,
        profile: Profile,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        profile: Profile,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn delete_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn get_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    fn get_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn create_profile(
        &self,
        input: CreateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    /// Deletes the profile, drops it from every family and clears it from
    /// the active selection.
    fn delete_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
