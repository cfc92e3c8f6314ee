use std::num::NonZeroUsize;

use uuid::Uuid;

use crate::domain::{
    analysis::{entities::HistoryEntry, ports::HistoryRepository, value_objects::GetHistoryFilter},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::store::{HISTORY_KEY, JsonStore};

#[derive(Debug, Clone)]
pub struct StoreHistoryRepository {
    pub store: JsonStore,
}

impl StoreHistoryRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl HistoryRepository for StoreHistoryRepository {
    async fn list_history(&self, filter: GetHistoryFilter) -> Result<Vec<HistoryEntry>, CoreError> {
        let history: Vec<HistoryEntry> = self.store.get_or_default(HISTORY_KEY).await?;

        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(history.into_iter().skip(offset).take(limit).collect())
    }

    async fn get_by_id(&self, entry_id: Uuid) -> Result<Option<HistoryEntry>, CoreError> {
        let history: Vec<HistoryEntry> = self.store.get_or_default(HISTORY_KEY).await?;

        Ok(history.into_iter().find(|e| e.id == entry_id))
    }

    async fn prepend_entry(
        &self,
        entry: HistoryEntry,
        limit: Option<NonZeroUsize>,
    ) -> Result<HistoryEntry, CoreError> {
        self.store
            .update(HISTORY_KEY, |history: &mut Vec<HistoryEntry>| {
                history.insert(0, entry.clone());
                if let Some(limit) = limit {
                    history.truncate(limit.get());
                }
                Ok(())
            })
            .await?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::AnalysisReport;

    fn entry(product_name: &str) -> HistoryEntry {
        HistoryEntry::new(
            "https://cdn.example.com/a.jpg".into(),
            AnalysisReport {
                product_name: product_name.into(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn prepends_and_pages() {
        let repository = StoreHistoryRepository::new(JsonStore::in_memory());
        let soda = repository.prepend_entry(entry("Soda"), None).await.unwrap();
        let tea = repository.prepend_entry(entry("Tea"), None).await.unwrap();

        let all = repository.list_history(GetHistoryFilter::default()).await.unwrap();
        assert_eq!(all, vec![tea.clone(), soda.clone()]);

        let page = repository
            .list_history(GetHistoryFilter {
                offset: Some(1),
                limit: Some(1),
            })
            .await
            .unwrap();
        assert_eq!(page, vec![soda]);
        assert_eq!(repository.get_by_id(tea.id).await.unwrap(), Some(tea));
    }

    #[tokio::test]
    async fn limit_drops_oldest_entries() {
        let repository = StoreHistoryRepository::new(JsonStore::in_memory());
        for name in ["A", "B", "C"] {
            repository.prepend_entry(entry(name), NonZeroUsize::new(2)).await.unwrap();
        }

        let names: Vec<_> = repository
            .list_history(GetHistoryFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.report.product_name)
            .collect();
        assert_eq!(names, vec!["C", "B"]);
    }
}
