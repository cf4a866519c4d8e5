use std::process::ExitCode;

use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tram_server::config::{ConfigError, ServerConfig};
use tram_server::domain::{Network, NetworkError};
use tram_server::loader::{self, LoadError};
use tram_server::planner::SearchConfig;
use tram_server::web::{AppState, create_router};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("network file: {0}")]
    Load(#[from] LoadError),

    #[error("network: {0}")]
    Network(#[from] NetworkError),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tram_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    info!(
        network_file = %config.network_file.display(),
        bind_addr = %config.bind_addr,
        "Configuration loaded"
    );

    let records = loader::load_file(&config.network_file)?;
    let loaded = Network::load(records)?;
    if !loaded.skipped.is_empty() {
        warn!(count = loaded.skipped.len(), "Some lines were skipped");
    }

    let state = AppState::new(loaded.network, SearchConfig::default());
    info!(
        lines = state.network.len(),
        stops = state.index.len(),
        "Network loaded"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Tram route planner listening on http://{}", config.bind_addr);
    info!("  GET /health");
    info!("  GET /api/lines");
    info!("  GET /api/lines/:id");
    info!("  GET /api/stops");
    info!("  GET /api/stops/lines?stop=");
    info!("  GET /api/route?from=&to=");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
