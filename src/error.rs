//! Error types for menu configuration

use thiserror::Error;

/// Errors raised while constructing a menu model.
///
/// These are detected once, when the model is built. A model that failed to
/// build is never rendered.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Duplicate href '{0}' in menu")]
    DuplicateHref(String),

    #[error("Menu has no items")]
    EmptyModel,

    #[error("Invalid menu configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type for menu configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
