use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::entities::Profile,
    selection::entities::{ActiveSelection, ContextPreview},
};

#[cfg_attr(test, mockall::automock)]
pub trait SelectionRepository: Send + Sync {
    fn get_selection(&self) -> impl Future<Output = Result<ActiveSelection, CoreError>> + Send;

    fn set_selection(
        &self,
        selection: ActiveSelection,
    ) -> impl Future<Output = Result<ActiveSelection, CoreError>> + Send;
}

pub trait SelectionService: Send + Sync {
    fn get_selection(&self) -> impl Future<Output = Result<ActiveSelection, CoreError>> + Send;

    fn select_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<ActiveSelection, CoreError>> + Send;

    fn select_family(
        &self,
        family_id: Uuid,
    ) -> impl Future<Output = Result<ActiveSelection, CoreError>> + Send;

    fn clear_selection(&self) -> impl Future<Output = Result<ActiveSelection, CoreError>> + Send;

    /// Profiles currently in context, in profile-list order.
    fn get_context_profiles(&self) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    /// The risk context and instruction block the next analysis would use.
    fn preview_context(&self) -> impl Future<Output = Result<ContextPreview, CoreError>> + Send;
}
