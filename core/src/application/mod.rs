use tracing::info;

use crate::{
    domain::common::{SafeCheckConfig, StorageConfig, services::Service},
    infrastructure::{
        analysis::repositories::{StoreFavoriteRepository, StoreHistoryRepository},
        family::repositories::StoreFamilyRepository,
        llm::OpenAILLMClient,
        profile::repositories::StoreProfileRepository,
        selection::repositories::StoreSelectionRepository,
        store::JsonStore,
    },
};

pub type SafeCheckService = Service<
    StoreProfileRepository,
    StoreFamilyRepository,
    StoreSelectionRepository,
    StoreHistoryRepository,
    StoreFavoriteRepository,
    OpenAILLMClient,
>;

impl SafeCheckService {
    /// Store shared by every repository.
    pub fn store(&self) -> &JsonStore {
        &self.profile_repository.store
    }
}

pub async fn open_store(config: &StorageConfig) -> Result<JsonStore, anyhow::Error> {
    let store = match &config.data_file {
        Some(path) => JsonStore::open(path.clone()).await?,
        None => {
            info!("No data file configured, using in-memory store");
            JsonStore::in_memory()
        }
    };

    Ok(store)
}

pub fn build_service(
    store: JsonStore,
    config: &SafeCheckConfig,
) -> Result<SafeCheckService, anyhow::Error> {
    let llm_client = OpenAILLMClient::new(&config.llm)?;

    Ok(Service::new(
        StoreProfileRepository::new(store.clone()),
        StoreFamilyRepository::new(store.clone()),
        StoreSelectionRepository::new(store.clone()),
        StoreHistoryRepository::new(store.clone()),
        StoreFavoriteRepository::new(store),
        llm_client,
        config.context.clone(),
        config.storage.history_limit,
    ))
}

pub async fn create_service(config: SafeCheckConfig) -> Result<SafeCheckService, anyhow::Error> {
    let store = open_store(&config.storage).await?;
    let service = build_service(store, &config)?;

    info!(
        model = %config.llm.model,
        llm_configured = config.llm.api_key.is_some(),
        "SafeCheck service ready"
    );
    Ok(service)
}
