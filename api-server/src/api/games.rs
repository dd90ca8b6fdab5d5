use super::error::ApiError;
use crate::models::context::ContextPointer;
use lazy_static::lazy_static;
use regex::Regex;
use rocket::serde::json::Json;
use rocket::State;
use steam_client::{AchievementSet, Title, TitleId};

pub const MIN_QUERY_CHARS: usize = 2;

lazy_static! {
    static ref TITLE_ID_QUERY: Regex = Regex::new(r"^[0-9]+$").expect("valid title id pattern");
}

/// Search titles by name, or look one up directly by its numeric id.
#[get("/games/search?<q>")]
pub async fn search(
    q: Option<String>,
    context: &State<ContextPointer>,
) -> Result<Json<Vec<Title>>, ApiError> {
    let query = q.as_deref().unwrap_or_default().trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(ApiError::InvalidInput(format!(
            "Query must be at least {} characters",
            MIN_QUERY_CHARS
        )));
    }

    if TITLE_ID_QUERY.is_match(query) {
        // Digit strings beyond the id range cannot name a title.
        let set = match query.parse::<TitleId>() {
            Ok(title_id) => context.achievements(title_id).await?,
            Err(_) => None,
        };

        return match set {
            Some(set) => Ok(Json(vec![Title::new(
                set.title_id(),
                set.title_name().clone(),
            )])),
            None => Err(ApiError::NotFound("Game not found".to_string())),
        };
    }

    let titles = context.steam_client().search_titles_by_name(query).await;
    Ok(Json(titles))
}

/// Any integer is accepted; ids outside the title id range are not found.
#[get("/games/<appid>/achievements")]
pub async fn achievements(
    appid: i64,
    context: &State<ContextPointer>,
) -> Result<Json<AchievementSet>, ApiError> {
    let set = match TitleId::try_from(appid) {
        Ok(title_id) => context.achievements(title_id).await?,
        Err(_) => None,
    };

    set.map(Json)
        .ok_or_else(|| ApiError::NotFound("Game not found or has no achievements".to_string()))
}
