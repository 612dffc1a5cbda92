//! Arithmetic HTTP Service
//!
//! Stateless JSON endpoints for integer arithmetic, square roots,
//! palindromes, echo and calendar helpers, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request         ┌──────────────────────────────────────────────┐
//!     ───────────────────────┼─▶ request id ─▶ trace ─▶ metrics ─▶ timeout  │
//!                            │                                   │          │
//!                            │                                   ▼          │
//!                            │                         ┌──────────────────┐ │
//!                            │                         │ router/handlers  │ │
//!                            │                         └────────┬─────────┘ │
//!                            │                                  ▼           │
//!     Client Response        │                         ┌──────────────────┐ │
//!     ◀──────────────────────┼──── JSON body ◀─────────│  calc (pure fns) │ │
//!                            │                         └──────────────────┘ │
//!                            └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use arith_service::config::{self, validation::validate_config, ConfigError, ServiceConfig};
use arith_service::lifecycle::{startup, Shutdown};
use arith_service::observability::logging;

#[derive(Parser)]
#[command(name = "arith-service")]
#[command(about = "Arithmetic and string-utility HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8080).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!("arith-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
