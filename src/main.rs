//! Live Quiz Server (v1)
//!
//! Serves the quiz API, the live leaderboard socket and the frontend shell.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                  QUIZ SERVER                  │
//!                        │                                               │
//!     Browser / CLI      │  ┌─────────┐    ┌──────────┐   ┌───────────┐  │
//!     ───────────────────┼─▶│  http   │───▶│ handlers │──▶│   quiz    │  │
//!                        │  │ server  │    └──────────┘   │ registry  │  │
//!                        │  └────┬────┘                   └─────┬─────┘  │
//!                        │       │        ┌──────────┐          │        │
//!     Deep links         │       ├───────▶│ frontend │──▶ routing        │
//!                        │       │        └──────────┘          │        │
//!     Leaderboard        │       │        ┌──────────┐          ▼        │
//!     ◀──────────────────┼───────┴────────│websocket │◀── leaderboard    │
//!                        │                └──────────┘                   │
//!                        │  config · observability · lifecycle           │
//!                        └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use quiz_app::config::{load_config, loader::load_defaults};
use quiz_app::lifecycle::{signals::shutdown_signal, Shutdown};
use quiz_app::observability::{logging, metrics};
use quiz_app::HttpServer;

#[derive(Parser)]
#[command(name = "quiz-server")]
#[command(about = "Live quiz server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => load_defaults()?,
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("quiz-server v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_url = %config.frontend.base_url,
        quizzes = config.quizzes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let drain_secs = config.timeouts.shutdown_secs;

    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, server_shutdown));

    shutdown_signal().await;
    shutdown.trigger();

    match tokio::time::timeout(std::time::Duration::from_secs(drain_secs), handle).await {
        Ok(result) => result??,
        Err(_) => tracing::warn!(drain_secs, "Connections still open after grace period"),
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
