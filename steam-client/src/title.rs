use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// Steam application id.
pub type TitleId = u32;

/// A store title as returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Title {
    #[serde(rename = "appid")]
    #[getset(get_copy = "pub")]
    id: TitleId,
    #[getset(get = "pub")]
    name: String,
}

impl Title {
    pub fn new(id: TitleId, name: String) -> Self {
        Self { id, name }
    }
}
