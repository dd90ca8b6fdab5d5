use chrono::{DateTime, Utc};
use getset::Getters;
use serde::{Deserialize, Serialize};
use steam_client::{AchievementSet, TitleId};

/// Stored document: the achievement set plus the time it was cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct CachedAchievementSet {
    #[serde(flatten)]
    set: AchievementSet,
    #[serde(rename = "cachedAt")]
    cached_at: DateTime<Utc>,
}

impl CachedAchievementSet {
    pub fn new(set: AchievementSet) -> Self {
        Self::with_timestamp(set, Utc::now())
    }

    pub fn with_timestamp(set: AchievementSet, cached_at: DateTime<Utc>) -> Self {
        Self { set, cached_at }
    }

    pub fn title_id(&self) -> TitleId {
        self.set.title_id()
    }

    /// Drop the storage metadata.
    pub fn into_set(self) -> AchievementSet {
        self.set
    }
}
