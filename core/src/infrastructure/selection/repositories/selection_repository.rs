use crate::domain::{
    common::entities::app_errors::CoreError,
    selection::{entities::ActiveSelection, ports::SelectionRepository},
};
use crate::infrastructure::store::{ACTIVE_SELECTION_KEY, JsonStore};

#[derive(Debug, Clone)]
pub struct StoreSelectionRepository {
    pub store: JsonStore,
}

impl StoreSelectionRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl SelectionRepository for StoreSelectionRepository {
    async fn get_selection(&self) -> Result<ActiveSelection, CoreError> {
        self.store.get_or_default(ACTIVE_SELECTION_KEY).await
    }

    async fn set_selection(&self, selection: ActiveSelection) -> Result<ActiveSelection, CoreError> {
        self.store.set(ACTIVE_SELECTION_KEY, &selection).await?;
        Ok(selection)
    }
}
