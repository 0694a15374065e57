//! # Parley Framework
//!
//! The command registry and dispatch engine of the Parley bot framework.
//!
//! A developer declares handler methods with [`define_command!`]; each
//! declaration carries a trigger kind (`Listen` for any plain message,
//! `RespondTo` for mentions and direct messages), a regex pattern, and
//! per-parameter capture-group metadata. Incoming messages are routed to the
//! first declared command whose pattern matches and whose every argument
//! coerces to its declared type.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────┐    ┌────────────┐    ┌────────────┐    ┌──────────────┐
//! │ Transport │───▶│ Bot facade │───▶│ Dispatcher │───▶│ first match  │
//! │  events   │    │ (self-     │    │ (registry  │    │  invoked on  │
//! └───────────┘    │  filter)   │    │   order)   │    │   a fresh    │
//!                  └────────────┘    └────────────┘    │   instance   │
//!                                                      └──────────────┘
//! ```
//!
//! - Discovery: every [`define_command!`] in any linked crate contributes a
//!   [`CommandSpec`](command::CommandSpec) to the
//!   [`COMMANDS`](registry::COMMANDS) distributed slice. The global
//!   [`CommandRegistry`](registry::CommandRegistry) compiles them exactly
//!   once, lazily, and shares the immutable result across all dispatches.
//! - Selection: first eligible descriptor in stable registration order wins.
//!   A pattern match whose argument fails coercion does **not** select the
//!   command; the scan continues.
//! - Replies: a handler's return value is translated into an
//!   [`OutboundDirective`](parley_core::OutboundDirective) (text, a rich
//!   attachment, or no response) and the [`Bot`](bot::Bot) facade delivers
//!   it through the [`ChatTransport`](parley_core::ChatTransport).

pub mod bot;
pub mod command;
pub mod dispatcher;
pub mod error;
mod macros;
pub mod registry;

pub use bot::Bot;
pub use command::{
    CommandDescriptor, CommandSpec, InvokeFn, MatchOutcome, ParamSpec, Reply, TriggerKind,
};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, SpecError};
pub use registry::{COMMANDS, CommandRegistry};

// Re-exported for use by `define_command!` expansions.
pub use linkme;
pub use parley_core::{FromValue, Value, ValueType};
