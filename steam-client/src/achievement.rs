use crate::TitleId;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// One achievement of a title, optionally enriched with its global unlock rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Achievement {
    #[serde(rename = "name")]
    #[getset(get = "pub")]
    key: String,
    #[serde(rename = "displayName")]
    #[getset(get = "pub")]
    display_name: String,
    #[getset(get = "pub")]
    description: String,
    #[serde(rename = "icon")]
    #[getset(get = "pub")]
    icon_url: String,
    #[serde(rename = "icongray")]
    #[getset(get = "pub")]
    icon_gray_url: String,
    #[getset(get_copy = "pub")]
    hidden: u8,
    /// Omitted from JSON when the percentage feed has no entry for `key`.
    #[serde(rename = "percent", default, skip_serializing_if = "Option::is_none")]
    #[getset(get_copy = "pub")]
    unlock_percent: Option<f64>,
}

impl Achievement {
    pub fn new(
        key: String,
        display_name: String,
        description: String,
        icon_url: String,
        icon_gray_url: String,
        hidden: u8,
    ) -> Self {
        Self {
            key,
            display_name,
            description,
            icon_url,
            icon_gray_url,
            hidden,
            unlock_percent: None,
        }
    }

    pub fn with_unlock_percent(mut self, unlock_percent: Option<f64>) -> Self {
        self.unlock_percent = unlock_percent;
        self
    }
}

/// All achievements of a title in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct AchievementSet {
    #[serde(rename = "appid")]
    #[getset(get_copy = "pub")]
    title_id: TitleId,
    #[serde(rename = "gameName")]
    #[getset(get = "pub")]
    title_name: String,
    #[getset(get = "pub")]
    achievements: Vec<Achievement>,
}

impl AchievementSet {
    pub fn new(title_id: TitleId, title_name: String, achievements: Vec<Achievement>) -> Self {
        Self {
            title_id,
            title_name,
            achievements,
        }
    }
}
