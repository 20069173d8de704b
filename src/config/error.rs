//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Io(
            PathBuf::from("pseo.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("pseo.toml"));

        let err = ConfigError::Validation("[base.url] is empty".to_string());
        assert!(err.to_string().contains("[base.url] is empty"));
    }

    #[test]
    fn test_toml_error_converts() {
        let toml_err = toml::from_str::<toml::Table>("[broken").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
