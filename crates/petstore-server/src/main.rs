//! Binary entrypoint for the pet store HTTP server.
//!
//! Reads configuration from environment variables:
//! - `PETSTORE_HOST`: bind address (default: "0.0.0.0")
//! - `PETSTORE_PORT`: listen port (default: "8080")
//! - `PETSTORE_LOOKUP`: "placeholder" or "strict" (default: "placeholder")
//! - `PETSTORE_SEED`: start with the sample pets (default: "true")

use petstore_server::config::ServerConfig;
use petstore_server::router::build_router;
use petstore_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("petstore server failed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config);

    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(
        lookup = %config.lookup,
        seed = config.seed,
        "petstore server starting on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("petstore server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
