use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub(crate) struct PercentagesResponse {
    #[serde(default)]
    achievementpercentages: Option<PercentageList>,
}

#[derive(Debug, Deserialize)]
struct PercentageList {
    #[serde(default)]
    achievements: Vec<PercentageEntry>,
}

#[derive(Debug, Deserialize)]
struct PercentageEntry {
    name: Option<String>,
    percent: Option<PercentValue>,
}

/// The feed has served percentages both as numbers and as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PercentValue {
    Number(f64),
    Text(String),
}

impl PercentValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            PercentValue::Number(value) => Some(*value),
            PercentValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl PercentagesResponse {
    pub(crate) fn into_percentages(self) -> UnlockPercentages {
        self.achievementpercentages
            .map(|list| {
                list.achievements
                    .into_iter()
                    .filter_map(|entry| {
                        let percent = entry.percent.as_ref().and_then(PercentValue::as_f64)?;
                        Some((entry.name?, percent))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Global unlock rate per achievement key. Empty when the feed was
/// unavailable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnlockPercentages(HashMap<String, f64>);

impl UnlockPercentages {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for UnlockPercentages {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
