use std::num::NonZeroUsize;

use crate::domain::{
    analysis::ports::{FavoriteRepository, HistoryRepository, LLMClient},
    common::ContextConfig,
    family::ports::FamilyRepository,
    profile::ports::ProfileRepository,
    selection::ports::SelectionRepository,
};

#[derive(Clone)]
pub struct Service<P, F, S, H, FV, LLM>
where
    P: ProfileRepository,
    F: FamilyRepository,
    S: SelectionRepository,
    H: HistoryRepository,
    FV: FavoriteRepository,
    LLM: LLMClient,
{
    pub profile_repository: P,
    pub family_repository: F,
    pub selection_repository: S,
    pub history_repository: H,
    pub favorite_repository: FV,
    pub llm_client: LLM,
    pub context_config: ContextConfig,
    pub history_limit: Option<NonZeroUsize>,
}

impl<P, F, S, H, FV, LLM> Service<P, F, S, H, FV, LLM>
where
    P: ProfileRepository,
    F: FamilyRepository,
    S: SelectionRepository,
    H: HistoryRepository,
    FV: FavoriteRepository,
    LLM: LLMClient,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_repository: P,
        family_repository: F,
        selection_repository: S,
        history_repository: H,
        favorite_repository: FV,
        llm_client: LLM,
        context_config: ContextConfig,
        history_limit: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            profile_repository,
            family_repository,
            selection_repository,
            history_repository,
            favorite_repository,
            llm_client,
            context_config,
            history_limit,
        }
    }
}
