//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, metrics, timeout)
//! - Bind server to listener
//! - Stop on OS signal or internal shutdown broadcast

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::calc::{Clock, SystemClock};
use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::{signals, ShutdownListener};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }
}

/// HTTP server for the arithmetic endpoints.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server reading time from the system clock.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_state(config, AppState::default())
    }

    /// Create a new HTTP server with explicit handler state.
    pub fn with_state(config: ServiceConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Self::with_middleware(Self::routes(), config).with_state(state)
    }

    /// The endpoint table, without middleware.
    fn routes() -> Router<AppState> {
        Router::new()
            .route("/", get(handlers::welcome))
            .route("/current-date", get(handlers::current_date))
            .route("/add/{a}/{b}", get(handlers::add))
            .route("/subtract/{a}/{b}", get(handlers::subtract))
            .route("/multiply/{a}/{b}", get(handlers::multiply))
            .route("/divide/{a}/{b}", get(handlers::divide))
            .route("/square/{n}", get(handlers::square))
            .route("/sqrt/{n}", get(handlers::sqrt))
            .route("/is-palindrome/{text}", get(handlers::is_palindrome))
            .route("/days-until-new-year", get(handlers::days_until_new_year))
            .route("/echo/{message}", get(handlers::echo))
    }

    /// Wrap `routes` in the request ID, trace, metrics and timeout layers.
    #[allow(deprecated)]
    fn with_middleware(routes: Router<AppState>, config: &ServiceConfig) -> Router<AppState> {
        routes
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(metrics::track_metrics))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// A clone of the configured router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until an OS signal or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown.wait() => {
                        tracing::info!("Internal shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
