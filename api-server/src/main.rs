use api_server::config::Config;
use api_server::models::context::Context;
use api_server::{build_rocket, logging};
use log::info;
use std::sync::Arc;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(&config)?;

    let context = Arc::new(Context::from_config(config)?);
    info!(
        "Starting gateway on {}:{}",
        context.config().address(),
        context.config().port()
    );

    let _ = build_rocket(context).launch().await?;
    Ok(())
}
