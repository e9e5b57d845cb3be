//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
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

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:5000");
        assert!(!config.server.debug);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.security.enable_headers);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [server]
            debug = true

            [observability]
            log_level = "warn"
            "#,
        )
        .unwrap();
        assert!(config.server.debug);
        assert_eq!(config.server.bind_address, "127.0.0.1:5000");
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[server\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[timeouts]\nrequest_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref v) if v.len() == 1));
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs must be greater than zero"
        );
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config = parse_config(include_str!("../../fundas.example.toml")).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.server.bind_address, defaults.server.bind_address);
        assert_eq!(config.observability.log_level, defaults.observability.log_level);
        assert_eq!(config.observability.metrics_address, defaults.observability.metrics_address);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/fundas.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
