// ABOUTME: Entry point for the roster binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the store, and serves the REST API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use roster_server::{AppState, RosterConfig, create_router};
use roster_store::{PersonStore, StoreHandle};

/// Embedded HTTP server exposing the person store as a REST API.
#[derive(Debug, Parser)]
#[command(name = "roster")]
struct Args {
    /// Socket address to bind, overriding ROSTER_BIND.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Data directory, overriding ROSTER_HOME.
    #[arg(long)]
    home: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster=debug,roster_server=debug,roster_store=debug,tower_http=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();
    let mut config = RosterConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(home) = args.home {
        config.home = home;
    }

    tracing::info!("roster starting up, data in {}", config.home.display());

    let handle = StoreHandle::open(&config.db_path())?;
    let store = PersonStore::new(handle.clone());
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Explicit store shutdown once the server has drained.
    handle.close()?;
    tracing::info!("roster stopped");

    Ok(())
}

/// Resolve when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
