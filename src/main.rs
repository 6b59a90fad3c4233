use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use spacex_explorer::{config::Config, preferences::LanguageStore, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spacex_explorer=info".parse()?),
        )
        .init();

    info!("Starting SpaceX Explorer locale service");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    // Restore the persisted language preference before serving anything
    let preferences = LanguageStore::load(&config.preferences_file);
    info!(
        "Restored language preference: {}",
        preferences.current().code()
    );

    let app = server::build_router(Arc::clone(&config));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
