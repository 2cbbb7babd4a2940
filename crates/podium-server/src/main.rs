use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use podium_core::ScraperConfig;
use podium_server::config::ServerConfig;
use podium_server::routes;
use podium_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("podium=info".parse()?))
        .with_target(false)
        .init();

    let scraper_config = ScraperConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;
    let addr = server_config.bind_addr();

    tracing::info!(
        base_url = %scraper_config.base_url,
        principal_challenge = %scraper_config.principal_challenge,
        max_retries = scraper_config.max_retries,
        "Scraper configured"
    );

    let state = Arc::new(AppState::new(scraper_config));

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
