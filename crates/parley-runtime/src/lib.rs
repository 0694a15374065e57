//! Parley Runtime - Orchestration layer for the Parley bot framework.
//!
//! This crate provides:
//! - Runtime orchestration (`BotRuntime`, `EventSink`)
//! - Layered configuration loading (`ConfigLoader`, `ParleyConfig`)
//! - Logging configuration (`LoggingBuilder`)
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use parley_runtime::{load_config, logging, BotRuntime};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     logging::init_from_config(&config.logging);
//!
//!     let transport = Arc::new(MyTransport::new());
//!     let (runtime, sink) = BotRuntime::new(transport, &config);
//!
//!     // Hand `sink` to whatever produces inbound events, then pump
//!     // until ctrl-c.
//!     runtime.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

// Re-exports
pub use config::{
    ConfigLoader, LogFormat, LogLevel, LogOutput, LoggingConfig, ParleyConfig, RuntimeSettings,
    load_config,
};
pub use error::{ConfigError, ConfigResult, RuntimeError, RuntimeResult};
pub use logging::LoggingBuilder;
pub use runtime::{BotRuntime, EventSink, InboundEvent};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides all the commonly used logging macros:
/// - `trace!`, `debug!`, `info!`, `warn!`, `error!`
/// - `span`, `event`
/// - `instrument` attribute
/// - `Level` for span creation
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
