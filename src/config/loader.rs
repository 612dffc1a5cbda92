//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:3000"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_unknown_log_format_is_parse_error() {
        let err = parse_config("[observability]\nlog_format = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_surfaces() {
        let err = parse_config("[timeouts]\nrequest_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("request_secs"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
