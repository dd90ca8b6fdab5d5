use crate::{
    Achievement, AchievementSet, GameSchema, SteamClient, TitleId, UnlockPercentages,
};

/// Name used when the schema does not carry one.
pub fn placeholder_name(title_id: TitleId) -> String {
    format!("Game {}", title_id)
}

/// Merge a schema with the unlock percentages into an [`AchievementSet`].
///
/// Achievements keep schema order; `unlock_percent` is set only for keys
/// present in `percentages`.
pub fn normalize(
    title_id: TitleId,
    schema: &GameSchema,
    percentages: &UnlockPercentages,
) -> AchievementSet {
    let title_name = schema
        .game_name()
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_name(title_id));

    let achievements = schema
        .achievements()
        .iter()
        .map(|entry| {
            Achievement::new(
                entry.name().clone(),
                entry.display_name().clone(),
                entry.description().clone(),
                entry.icon().clone(),
                entry.icongray().clone(),
                entry.hidden(),
            )
            .with_unlock_percent(percentages.get(entry.name()))
        })
        .collect();

    AchievementSet::new(title_id, title_name, achievements)
}

impl SteamClient {
    /// Build the achievement set of a title from the schema and the global
    /// percentage feed. `None` means the title was not found.
    pub async fn build_achievement_set(&self, title_id: TitleId) -> Option<AchievementSet> {
        let schema = self.fetch_achievement_schema(title_id).await?;

        if schema.achievements().is_empty() {
            log::info!("Title {} defines no achievements", title_id);
            return Some(normalize(title_id, &schema, &UnlockPercentages::empty()));
        }

        let percentages = self.fetch_global_unlock_percentages(title_id).await;
        log::debug!(
            "Title {}: {} achievements, {} unlock percentages",
            title_id,
            schema.achievements().len(),
            percentages.len()
        );

        Some(normalize(title_id, &schema, &percentages))
    }
}
