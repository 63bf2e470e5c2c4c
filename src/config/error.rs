//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("rti.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(io_err.to_string().contains("rti.toml"));

        let missing = ConfigError::NotFound(PathBuf::from("site/rti.toml"));
        assert_eq!(missing.to_string(), "Config file `site/rti.toml` not found");

        let validation_err = ConfigError::Validation("[documents.default_state] unknown".into());
        assert!(validation_err.to_string().contains("default_state"));
    }

    #[test]
    fn test_toml_error_keeps_parser_source() {
        let parse_err = toml::from_str::<SiteConfig>("[base
title = 1").unwrap_err();
        let detail = parse_err.to_string();
        let err = ConfigError::from(parse_err);

        assert!(matches!(err, ConfigError::Toml(_)));
        assert_eq!(err.to_string(), "Config file parsing error");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), detail);
    }
}
