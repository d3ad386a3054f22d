//! SWAPI Demo - cached Star Wars API client with a small HTTP front end

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swapi_demo::api::{create_router, AppState};
use swapi_demo::report::run_report_logged;
use swapi_demo::{Cli, Config, SwapiClient};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Parse CLI flags and build the configuration
/// 2. Initialize tracing subscriber for logging
/// 3. Create the fetch client
/// 4. Either run one report (`--once`) or serve HTTP until Ctrl+C/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli).context("invalid configuration")?;

    // Defaults to "info" level (debug for our crate in debug mode),
    // can be overridden with RUST_LOG env var
    let default_filter = if config.debug {
        "swapi_demo=debug,tower_http=info"
    } else {
        "swapi_demo=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = SwapiClient::from_config(&config).context("failed to build HTTP client")?;

    if config.once {
        run_report_logged(&client, config.character_id, config.debug).await;
        return Ok(());
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running at http://localhost:{}/", config.server_port);
    info!("Open the URL in your browser and click the button to fetch Star Wars data");
    if config.debug {
        info!("Debug mode: ON");
        info!("Timeout: {} ms", config.timeout_ms);
    }

    let app = create_router(AppState::new(client, config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
