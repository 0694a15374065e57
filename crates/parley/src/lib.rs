//! # Parley
//!
//! A pattern-matching command framework for chat bots.
//!
//! ## Overview
//!
//! Parley turns regular expressions into typed bot commands. A command
//! declares a trigger kind, a pattern, and the capture groups it wants
//! coerced into typed arguments; the dispatcher scans commands in
//! declaration order and invokes the first one that matches.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌─────┐     ┌────────────┐     ┌───────────────────────┐
//! │ Transport │────▶│ Bot │────▶│ Dispatcher │────▶│ Command (fresh handler│──▶ reply
//! │ (events)  │     │     │     │            │     │  instance per call)   │
//! └───────────┘     └─────┘     └────────────┘     └───────────────────────┘
//! ```
//!
//! - **Transport**: A [`core::ChatTransport`] implementation for one chat service
//! - **Bot**: Self-message filtering and directive delivery
//! - **Dispatcher**: First-match scan over the command registry
//! - **Commands**: Declared with [`framework::define_command!`], discovered at link time
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parley::prelude::*;
//!
//! #[derive(Default)]
//! struct Greeter;
//!
//! impl Greeter {
//!     fn greet(&self, name: String) -> String {
//!         format!("hello, {name}!")
//!     }
//! }
//!
//! define_command! {
//!     static GREET: Greeter => greet,
//!     trigger: RespondTo,
//!     pattern: r"^greet (\w+)$",
//!     params: [required(1, Str)],
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     let transport = std::sync::Arc::new(MyTransport::new());
//!     let (runtime, sink) = BotRuntime::new(transport, &config);
//!     // feed `sink` from your transport's event loop
//!     runtime.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json-log`: JSON-formatted log output

pub use parley_core as core;
pub use parley_framework as framework;
pub use parley_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use parley::prelude::*;
/// ```
pub mod prelude {
    // Runtime - main entry point
    pub use parley_runtime::{BotRuntime, EventSink, InboundEvent, load_config};

    // Command declaration and dispatch
    pub use parley_framework::{
        Bot, CommandRegistry, CommandSpec, Dispatcher, ParamSpec, TriggerKind, define_command,
    };

    // Message and reply types
    pub use parley_core::{
        Attachment, AttachmentField, ChatTransport, IncomingMessage, OutboundDirective, Value,
        ValueType,
    };
}
