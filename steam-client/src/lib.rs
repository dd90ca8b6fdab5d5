mod achievement;
mod config;
mod error;
mod normalizer;
mod responses;
mod title;

#[cfg(test)]
mod tests;

use ::utils::surf_logging::SurfLogging;
use ::utils::UrlBuilder;
pub use achievement::{Achievement, AchievementSet};
pub use config::SteamConfig;
pub use error::{Error, ErrorKind};
pub use normalizer::{normalize, placeholder_name};
use responses::percentages::PercentagesResponse;
pub use responses::percentages::UnlockPercentages;
pub use responses::schema::{GameSchema, SchemaAchievement};
use responses::schema::SchemaResponse;
use responses::store_search::{StoreItemKind, StoreSearchResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use surf::{Client, StatusCode};
pub use title::{Title, TitleId};
use url::Url;

const STORE_SEARCH_PATH: &str = "api/storesearch/";
const SCHEMA_PATH: &str = "ISteamUserStats/GetSchemaForGame/v0002/";
const PERCENTAGES_PATH: &str = "ISteamUserStats/GetGlobalAchievementPercentagesForApp/v0002/";

/// Client for the Steam store and Web API endpoints this gateway relies on.
///
/// One instance is created at startup and shared; cloning is cheap and keeps
/// the same connection pool.
#[derive(Clone)]
pub struct SteamClient {
    http: Client,
    config: Arc<SteamConfig>,
}

impl Default for SteamClient {
    fn default() -> Self {
        Self::new(SteamConfig::default())
    }
}

impl SteamClient {
    pub fn new(config: SteamConfig) -> Self {
        Self {
            http: Client::new().with(SurfLogging),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &SteamConfig {
        &self.config
    }

    /// Search store titles by name.
    ///
    /// Only applications are returned, in upstream order, taken from the first
    /// `search_limit` upstream items. Any failure yields an empty list.
    pub async fn search_titles_by_name(&self, query: &str) -> Vec<Title> {
        let url = UrlBuilder::new(self.config.store_url(), STORE_SEARCH_PATH)
            .param("term", query)
            .param("l", self.config.language())
            .param("cc", self.config.country_code())
            .build();

        let response = match url {
            Ok(url) => self.get_json::<StoreSearchResponse>(url).await,
            Err(e) => Err(e.into()),
        };

        match response {
            Ok(response) => response
                .items
                .into_iter()
                .take(self.config.search_limit())
                .filter(|item| item.kind == StoreItemKind::App)
                .filter_map(|item| match (item.id, item.name) {
                    (Some(id), Some(name)) => Some(Title::new(id, name)),
                    _ => {
                        log::debug!("Skipping malformed store item for query: {}", query);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                log::error!("Error searching Steam titles for {:?}: {}", query, e);
                vec![]
            }
        }
    }

    /// Fetch the achievement schema of a title.
    ///
    /// `None` means the title is unknown to the platform (or the schema could
    /// not be retrieved). A known title without achievements yields a schema
    /// with an empty achievement list.
    pub async fn fetch_achievement_schema(&self, title_id: TitleId) -> Option<GameSchema> {
        match self.try_fetch_achievement_schema(title_id).await {
            Ok(Some(schema)) => Some(schema),
            Ok(None) => {
                log::info!("No schema payload for title {}", title_id);
                None
            }
            Err(e) => {
                log::error!("Error fetching schema for title {}: {}", title_id, e);
                None
            }
        }
    }

    async fn try_fetch_achievement_schema(
        &self,
        title_id: TitleId,
    ) -> Result<Option<GameSchema>, Error> {
        let url = UrlBuilder::new(self.config.api_url(), SCHEMA_PATH)
            .param("key", self.config.api_key())
            .param("appid", title_id)
            .param("l", self.config.language())
            .build()?;

        let response = self.get_json::<SchemaResponse>(url).await?;
        Ok(response.game.filter(|game| !game.is_empty()))
    }

    /// Fetch the global unlock percentage of every achievement of a title.
    ///
    /// Best effort: any failure collapses to an empty mapping.
    pub async fn fetch_global_unlock_percentages(&self, title_id: TitleId) -> UnlockPercentages {
        let url = UrlBuilder::new(self.config.api_url(), PERCENTAGES_PATH)
            .param("gameid", title_id)
            .build();

        let response = match url {
            Ok(url) => self.get_json::<PercentagesResponse>(url).await,
            Err(e) => Err(e.into()),
        };

        match response {
            Ok(response) => response.into_percentages(),
            Err(e) => {
                log::warn!(
                    "Continuing without unlock percentages for title {}: {}",
                    title_id,
                    e
                );
                UnlockPercentages::empty()
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let mut response = self
            .http
            .get(url.as_str())
            .await
            .map_err(|e| Error::transport(&url, e))?;

        let status = response.status();
        if status != StatusCode::Ok {
            return Err(Error::status(&url, status));
        }

        response
            .body_json::<T>()
            .await
            .map_err(|e| Error::decode(&url, e))
    }
}
