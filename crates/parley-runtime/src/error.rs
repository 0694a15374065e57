//! Runtime error types.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(String),

    /// The configuration could not be parsed or extracted.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during runtime operations.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The transport failed to connect or disconnect.
    #[error(transparent)]
    Transport(#[from] parley_core::TransportError),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
