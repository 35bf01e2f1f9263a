//! Error types for section and field configuration

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or querying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Section not found by handle
    #[error("section not found: {handle}")]
    SectionNotFound { handle: String },

    /// A configuration document is structurally valid YAML but breaks an invariant
    #[error("invalid {what} configuration: {message}")]
    InvalidConfig { what: &'static str, message: String },

    /// Runtime settings could not be extracted
    #[error("failed to load settings: {source}")]
    Settings { source: figment::Error },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Settings { source: error }
    }
}
