use getset::{CopyGetters, Getters};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SchemaResponse {
    #[serde(default)]
    pub game: Option<GameSchema>,
}

/// Static achievement definitions of a title.
#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GameSchema {
    #[getset(get = "pub")]
    game_name: Option<String>,
    #[getset(get = "pub")]
    game_version: Option<String>,
    #[serde(default)]
    available_game_stats: Option<AvailableGameStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AvailableGameStats {
    #[serde(default)]
    achievements: Vec<SchemaAchievement>,
}

/// One achievement definition. Fields the platform leaves out default to
/// empty strings and a visible flag.
#[derive(Debug, Clone, Default, Deserialize, Getters, CopyGetters)]
pub struct SchemaAchievement {
    #[serde(default)]
    #[getset(get = "pub")]
    name: String,
    #[serde(default, rename = "displayName")]
    #[getset(get = "pub")]
    display_name: String,
    #[serde(default)]
    #[getset(get = "pub")]
    description: String,
    #[serde(default)]
    #[getset(get = "pub")]
    icon: String,
    #[serde(default)]
    #[getset(get = "pub")]
    icongray: String,
    #[serde(default)]
    #[getset(get_copy = "pub")]
    hidden: u8,
}

impl GameSchema {
    /// The platform answers `{"game": {}}` for titles it has no data for.
    pub(crate) fn is_empty(&self) -> bool {
        self.game_name.is_none()
            && self.game_version.is_none()
            && self.available_game_stats.is_none()
    }

    pub fn achievements(&self) -> &[SchemaAchievement] {
        self.available_game_stats
            .as_ref()
            .map(|stats| stats.achievements.as_slice())
            .unwrap_or_default()
    }
}
