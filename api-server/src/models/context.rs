use crate::config::Config;
use achievement_store::{
    CachedAchievementSet, MemoryStore, SharedAchievementStore, SqliteStore, StoreBackend,
    StoreError,
};
use getset::Getters;
use log::{info, warn};
use std::sync::Arc;
use steam_client::{AchievementSet, SteamClient, SteamConfig, TitleId};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("invalid {key} {value:?}: {source}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Process-wide resources shared by every request.
#[derive(Getters)]
#[get = "pub"]
pub struct Context {
    steam_client: SteamClient,
    store: SharedAchievementStore,
    config: Config,
}

impl Context {
    pub fn new(steam_client: SteamClient, store: SharedAchievementStore, config: Config) -> Self {
        Self {
            steam_client,
            store,
            config,
        }
    }

    /// Open the configured store and build the upstream client.
    pub fn from_config(config: Config) -> Result<Self, ContextError> {
        let steam_config = SteamConfig::new(config.steam_api_key().clone())
            .with_api_url(parse_url("steam_api_url", config.steam_api_url())?)
            .with_store_url(parse_url("steam_store_url", config.steam_store_url())?)
            .with_language(config.language().clone())
            .with_country_code(config.country_code().clone())
            .with_search_limit(*config.search_limit());

        if steam_config.api_key().is_empty() {
            warn!("No Steam API key configured; achievement lookups will fail");
        }

        let store: SharedAchievementStore = match config.store().backend() {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::Sqlite => Arc::new(SqliteStore::open(config.store().path())?),
        };
        info!("Initialized {} achievement store", store.backend());

        Ok(Self::new(SteamClient::new(steam_config), store, config))
    }

    /// Cached achievement set of a title, built and stored on first request.
    ///
    /// `None` means the title does not exist upstream.
    pub async fn achievements(
        &self,
        title_id: TitleId,
    ) -> Result<Option<AchievementSet>, StoreError> {
        if let Some(record) = self.store.find_one(title_id).await? {
            info!("Returning cached achievements for title {}", title_id);
            return Ok(Some(record.into_set()));
        }

        let Some(set) = self.steam_client.build_achievement_set(title_id).await else {
            return Ok(None);
        };

        match self
            .store
            .insert_one(CachedAchievementSet::new(set.clone()))
            .await
        {
            Ok(()) => info!(
                "Cached {} achievements for title {}",
                set.achievements().len(),
                title_id
            ),
            Err(e) => warn!("Could not cache achievements for title {}: {}", title_id, e),
        }

        Ok(Some(set))
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ContextError> {
    Url::parse(value).map_err(|source| ContextError::InvalidUrl {
        key,
        value: value.to_string(),
        source,
    })
}

pub type ContextPointer = Arc<Context>;
