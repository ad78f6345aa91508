use anyhow::Result;
use tracing::info;

use poolbuilder_core::app_state::build_app_state;
use poolbuilder_core::config::AppConfig;
use poolbuilder_core::logging::init_tracing;
use poolbuilder_core::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(&config);

    let app = app_router().with_state(build_app_state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("🚀 Pool builder listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
