//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
