use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use url::Url;

lazy_static! {
    static ref STEAM_API_URL: Url =
        Url::parse("https://api.steampowered.com").expect("valid Steam Web API url");
    static ref STEAM_STORE_URL: Url =
        Url::parse("https://store.steampowered.com").expect("valid Steam store url");
}

pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Upstream endpoints and request parameters.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct SteamConfig {
    #[getset(get = "pub")]
    api_key: String,
    #[getset(get = "pub")]
    api_url: Url,
    #[getset(get = "pub")]
    store_url: Url,
    #[getset(get = "pub")]
    language: String,
    #[getset(get = "pub")]
    country_code: String,
    #[getset(get_copy = "pub")]
    search_limit: usize,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: STEAM_API_URL.clone(),
            store_url: STEAM_STORE_URL.clone(),
            language: "english".to_string(),
            country_code: "US".to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SteamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn with_store_url(mut self, store_url: Url) -> Self {
        self.store_url = store_url;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }
}
