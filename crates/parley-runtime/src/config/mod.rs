//! Configuration loading and schema.
//!
//! See [`ConfigLoader`] for the source layering rules and
//! [`ParleyConfig`] for the schema.

mod loader;
mod schema;

pub use loader::{ConfigLoader, load_config};
pub use schema::{LogFormat, LogLevel, LogOutput, LoggingConfig, ParleyConfig, RuntimeSettings};
