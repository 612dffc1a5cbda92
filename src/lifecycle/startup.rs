//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Bind the listener
//! - Run the HTTP server until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last so traffic only arrives when ready

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Fatal error while bringing the service up or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid {field} '{value}'")]
    Address { field: &'static str, value: String },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bring the service up and serve until `shutdown` fires or a signal arrives.
pub async fn run(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = parse_addr(
            "observability.metrics_address",
            &config.observability.metrics_address,
        )?;
        metrics::init_metrics(addr)?;
    }

    let bind_addr = parse_addr("listener.bind_address", &config.listener.bind_address)?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_addr,
            source,
        })?;

    let server = HttpServer::new(config);
    tracing::info!(
        address = %bind_addr,
        request_timeout_secs = server.config().timeouts.request_secs,
        "Listening for connections"
    );

    server
        .run(listener, shutdown.listener())
        .await
        .map_err(StartupError::Serve)
}

fn parse_addr(field: &'static str, value: &str) -> Result<SocketAddr, StartupError> {
    value.parse().map_err(|_| StartupError::Address {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_bind_address() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();

        let err = run(config, &Shutdown::new()).await.unwrap_err();
        assert!(matches!(
            err,
            StartupError::Address { field: "listener.bind_address", .. }
        ));
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ServiceConfig::default();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let err = run(config, &Shutdown::new()).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }

    #[tokio::test]
    async fn test_run_serves_until_triggered() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.timeouts.request_secs = 3;
        let shutdown = Shutdown::new();

        let trigger = async {
            while shutdown.listeners() == 0 {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            }
            shutdown.trigger();
        };
        let (result, ()) = tokio::join!(run(config, &shutdown), trigger);
        assert!(result.is_ok());
    }
}
