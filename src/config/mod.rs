//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → CLI overrides applied in main
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, TimeoutConfig};
