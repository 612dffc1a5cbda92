//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Metrics exporter → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT or Shutdown::trigger → Stop accepting → Drain → Exit
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
pub use startup::StartupError;
