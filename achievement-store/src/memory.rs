use crate::{AchievementStore, CachedAchievementSet, StoreBackend, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use steam_client::TitleId;

/// In-process store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<TitleId, CachedAchievementSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AchievementStore for MemoryStore {
    async fn find_one(&self, title_id: TitleId) -> Result<Option<CachedAchievementSet>, StoreError> {
        let record = self.records.get(&title_id).map(|entry| entry.value().clone());
        log::debug!(
            "Memory store {} for title {}",
            if record.is_some() { "hit" } else { "miss" },
            title_id
        );
        Ok(record)
    }

    async fn insert_one(&self, record: CachedAchievementSet) -> Result<(), StoreError> {
        let title_id = record.title_id();
        if self.records.insert(title_id, record).is_some() {
            log::debug!("Replaced cached record for title {}", title_id);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steam_client::AchievementSet;

    fn record(title_id: TitleId, name: &str) -> CachedAchievementSet {
        CachedAchievementSet::new(AchievementSet::new(title_id, name.to_string(), vec![]))
    }

    #[tokio::test]
    async fn find_after_insert() {
        let store = MemoryStore::new();
        assert!(store.find_one(70).await.unwrap().is_none());

        store.insert_one(record(70, "Half-Life")).await.unwrap();

        let found = store.find_one(70).await.unwrap().unwrap();
        assert_eq!(found.set().title_name(), "Half-Life");
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.backend(), StoreBackend::Memory);
    }

    #[tokio::test]
    async fn second_insert_replaces() {
        let store = MemoryStore::new();
        store.insert_one(record(70, "Old")).await.unwrap();
        store.insert_one(record(70, "New")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.find_one(70).await.unwrap().unwrap().set().title_name(), "New");
    }
}
