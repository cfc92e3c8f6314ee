use std::{future::Future, num::NonZeroUsize};
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::{Favorite, HistoryEntry},
        value_objects::{AnalyzeProductInput, GetHistoryFilter, ImageReference},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    /// Newest first.
    fn list_history(
        &self,
        filter: GetHistoryFilter,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    fn get_by_id(
        &self,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<Option<HistoryEntry>, CoreError>> + Send;

    /// Inserts at the front in a single store update, keeping at most
    /// `limit` entries when set.
    fn prepend_entry(
        &self,
        entry: HistoryEntry,
        limit: Option<NonZeroUsize>,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    fn list_favorites(&self) -> impl Future<Output = Result<Vec<Favorite>, CoreError>> + Send;

    /// Adds the favorite, or removes the one with the same id. Returns
    /// whether it is a favorite afterwards.
    fn toggle_favorite(
        &self,
        favorite: Favorite,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Vision-capable chat completion provider.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt with one image and returns the raw response text.
    fn analyze_image(
        &self,
        prompt: String,
        image: ImageReference,
        credential: Option<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Whether a credential is configured server-side.
    fn is_configured(&self) -> bool;
}

pub trait AnalysisService: Send + Sync {
    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;

    fn get_history(
        &self,
        filter: GetHistoryFilter,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    fn get_history_entry(
        &self,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;

    fn get_favorites(&self) -> impl Future<Output = Result<Vec<Favorite>, CoreError>> + Send;

    fn toggle_favorite(
        &self,
        entry_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
