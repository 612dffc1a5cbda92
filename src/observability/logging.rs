//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Pick pretty or JSON output from config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level when set

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Default filter directive for a configured level.
pub fn default_directive(level: &str) -> String {
    let level = level.to_lowercase();
    format!("arith_service={level},tower_http={level}")
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive("DEBUG"),
            "arith_service=debug,tower_http=debug"
        );
    }
}
