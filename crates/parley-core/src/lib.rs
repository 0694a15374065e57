//! # Parley Core
//!
//! Foundation types for the Parley bot framework.
//!
//! This crate defines the vocabulary shared by the framework and by
//! transport integrations:
//!
//! - **Values & coercion** ([`ValueType`], [`Value`], [`FromValue`]): the
//!   closed set of primitive types a command parameter may declare, and the
//!   conversion of raw regex capture text into them.
//! - **Messages** ([`IncomingMessage`], [`Attachment`]): the neutral inbound
//!   representation and the rich outbound attachment model.
//! - **Directives** ([`OutboundDirective`]): the normalized form of a
//!   command's reply.
//! - **Transport boundary** ([`ChatTransport`]): the trait a chat-network
//!   integration implements; the framework performs no network I/O itself.
//!
//! Error policy is split by class: [`CoercionError`] is expected and
//! recoverable (a candidate that fails coercion simply does not match),
//! while [`TransportError`] is logged and never crashes the event loop.
//! Configuration errors live in `parley-framework`, next to the registry
//! that detects them.

pub mod directive;
pub mod error;
pub mod message;
pub mod transport;
pub mod value;

pub use directive::OutboundDirective;
pub use error::{CoercionError, TransportError, TransportResult};
pub use message::{Attachment, AttachmentField, IncomingMessage};
pub use transport::ChatTransport;
pub use value::{FromValue, Value, ValueType};
