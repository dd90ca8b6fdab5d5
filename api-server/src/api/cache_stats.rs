use super::error::ApiError;
use crate::models::context::ContextPointer;
use achievement_store::StoreBackend;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub cached_titles: usize,
    pub backend: StoreBackend,
}

/// Number of titles currently held by the achievement store.
#[get("/cache/stats")]
pub async fn cache_stats(
    context: &State<ContextPointer>,
) -> Result<Json<CacheStatsResponse>, ApiError> {
    let store = context.store();

    Ok(Json(CacheStatsResponse {
        cached_titles: store.count().await?,
        backend: store.backend(),
    }))
}
