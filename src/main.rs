use std::env;

use notice_engine::api::{AppState, create_router};
use notice_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_CONFIG_DIR: &str = "./config/my-kl";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir =
        env::var("NOTICE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("NOTICE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        jurisdiction = %config.jurisdiction().code,
        holidays = config.holiday_table().len(),
        "Loaded jurisdiction configuration"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Notice engine listening");
    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
