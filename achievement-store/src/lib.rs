//! Persistent cache of normalized achievement sets, keyed by title id.
//!
//! Records are written once after a confirmed miss and never refreshed.

mod error;
mod memory;
mod record;
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use record::CachedAchievementSet;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use steam_client::TitleId;
use strum_macros::Display;

/// Which implementation backs the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Sqlite,
}

/// Document store holding one record per title.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Look up the record of a title.
    async fn find_one(&self, title_id: TitleId) -> Result<Option<CachedAchievementSet>, StoreError>;

    /// Store a record. A record already present for the same title is
    /// replaced.
    async fn insert_one(&self, record: CachedAchievementSet) -> Result<(), StoreError>;

    /// Number of cached titles.
    async fn count(&self) -> Result<usize, StoreError>;

    fn backend(&self) -> StoreBackend;
}

pub type SharedAchievementStore = Arc<dyn AchievementStore>;
