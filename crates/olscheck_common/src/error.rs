//! Error types for olscheck.

use thiserror::Error;

/// Errors from the OLS query endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OlsError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("OLS reply has no 'response' text field")]
    MissingResponse,
}

/// Errors while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
