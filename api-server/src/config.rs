use achievement_store::StoreBackend;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use getset::Getters;
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use std::path::PathBuf;

/// Environment variable naming the YAML config file.
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const ENV_PREFIX: &str = "GATEWAY_";

#[serde_inline_default]
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct Config {
    #[serde_inline_default(String::new())]
    steam_api_key: String,
    #[serde_inline_default("https://api.steampowered.com".to_string())]
    steam_api_url: String,
    #[serde_inline_default("https://store.steampowered.com".to_string())]
    steam_store_url: String,
    #[serde_inline_default("english".to_string())]
    language: String,
    #[serde_inline_default("US".to_string())]
    country_code: String,
    #[serde_inline_default(20)]
    search_limit: usize,
    #[serde(default)]
    store: StoreConfig,
    #[serde_inline_default("info".to_string())]
    log_level: String,
    #[serde(default)]
    log_file: Option<PathBuf>,
    #[serde_inline_default("*".to_string())]
    cors_allowed_origin: String,
    #[serde_inline_default("127.0.0.1".to_string())]
    address: String,
    #[serde_inline_default(8000)]
    port: u16,
}

#[serde_inline_default]
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct StoreConfig {
    #[serde(default)]
    backend: StoreBackend,
    #[serde_inline_default(PathBuf::from("achievements.sqlite3"))]
    path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: PathBuf::from("achievements.sqlite3"),
        }
    }
}

impl Config {
    /// Defaults, then the YAML file, then `GATEWAY_*` environment variables.
    /// Nested keys use `__`, e.g. `GATEWAY_STORE__BACKEND=sqlite`.
    pub fn figment(path: &str) -> Figment {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::figment(&path).extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config: Config = Config::figment("missing.yaml").extract()?;

            assert_eq!(config.steam_api_key(), "");
            assert_eq!(config.steam_api_url(), "https://api.steampowered.com");
            assert_eq!(*config.search_limit(), 20);
            assert_eq!(*config.store().backend(), StoreBackend::Memory);
            assert_eq!(*config.port(), 8000);
            assert!(config.log_file().is_none());
            Ok(())
        });
    }

    #[test]
    fn yaml_then_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "gateway.yaml",
                r#"
steam_api_key: from-file
search_limit: 5
store:
  backend: sqlite
  path: /var/lib/gateway/cache.sqlite3
"#,
            )?;
            jail.set_env("GATEWAY_STEAM_API_KEY", "from-env");
            jail.set_env("GATEWAY_PORT", "9090");

            let config: Config = Config::figment("gateway.yaml").extract()?;

            assert_eq!(config.steam_api_key(), "from-env");
            assert_eq!(*config.search_limit(), 5);
            assert_eq!(*config.port(), 9090);
            assert_eq!(*config.store().backend(), StoreBackend::Sqlite);
            assert_eq!(
                config.store().path(),
                &PathBuf::from("/var/lib/gateway/cache.sqlite3")
            );
            Ok(())
        });
    }

    #[test]
    fn nested_keys_from_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("GATEWAY_STORE__BACKEND", "sqlite");

            let config: Config = Config::figment("missing.yaml").extract()?;

            assert_eq!(*config.store().backend(), StoreBackend::Sqlite);
            assert_eq!(config.store().path(), &PathBuf::from("achievements.sqlite3"));
            Ok(())
        });
    }
}
