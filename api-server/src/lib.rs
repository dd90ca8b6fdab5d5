#[macro_use]
extern crate rocket;

pub mod api;
pub mod config;
pub mod logging;
pub mod models;

use api::cors::Cors;
use models::context::ContextPointer;
use rocket::{Build, Rocket};

/// Assemble the HTTP server around an already built context.
pub fn build_rocket(context: ContextPointer) -> Rocket<Build> {
    let config = context.config();
    let figment = rocket::Config::figment()
        .merge(("address", config.address().clone()))
        .merge(("port", *config.port()));
    let cors = Cors::new(config.cors_allowed_origin().clone());

    rocket::custom(figment)
        .manage(context)
        .attach(cors)
        .mount("/", routes![api::index, api::cors::preflight])
        .mount("/api", api::routes())
        .register("/", api::catchers())
}
