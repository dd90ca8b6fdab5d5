use crate::TitleId;
use serde::Deserialize;
use strum_macros::Display;

#[derive(Debug, Deserialize)]
pub(crate) struct StoreSearchResponse {
    #[serde(default)]
    pub items: Vec<StoreItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StoreItem {
    #[serde(rename = "type", default)]
    pub kind: StoreItemKind,
    pub id: Option<TitleId>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum StoreItemKind {
    App,
    Sub,
    Bundle,
    #[default]
    #[serde(other)]
    Other,
}
