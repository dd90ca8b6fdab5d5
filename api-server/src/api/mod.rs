pub mod cache_stats;
pub mod cors;
pub mod error;
pub mod games;

use rocket::serde::json::{json, Json, Value};
use rocket::{Catcher, Route};

/// Service banner, mounted at the root.
#[get("/api")]
pub fn index() -> Json<Value> {
    Json(json!({ "message": "Steam Achievements API" }))
}

pub fn routes() -> Vec<Route> {
    routes![games::search, games::achievements, cache_stats::cache_stats]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![error::default_catcher]
}
