use std::sync::Arc;

use tokio::signal;

use roster::errors::Report;
use roster::log;
use roster_backend::{AppState, config::Config};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    roster::log::setup()?;

    let config = Config::from_env()?;
    log::debug!("Loaded configuration: {:?}", config);

    let state = Arc::new(AppState::default());
    let app = roster_backend::router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
