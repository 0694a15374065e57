//! Error types for the Parley framework.
//!
//! Both enums here describe programming mistakes in registered command code,
//! never transient per-message failures. [`SpecError`] is caught at registry
//! build time and skips the offending command; [`DispatchError`] is fatal for
//! the single dispatch that hit it and is reported by the facade.

use thiserror::Error;

/// A command declaration failed validation at registry build time.
///
/// The registry reports the error via `tracing::error!` and excludes the
/// command; one bad declaration never prevents the others from registering.
#[derive(Debug, Clone, Error)]
pub enum SpecError {
    /// The declared pattern is not a valid regular expression.
    #[error("command '{command}': invalid pattern: {source}")]
    InvalidPattern {
        /// The declared command name.
        command: &'static str,
        /// The regex compilation failure.
        #[source]
        source: regex::Error,
    },

    /// A parameter references a capture group the pattern does not have.
    #[error(
        "command '{command}': parameter references capture group {group}, \
         but the pattern only defines groups 0..{available}"
    )]
    GroupOutOfRange {
        /// The declared command name.
        command: &'static str,
        /// The out-of-range group index.
        group: usize,
        /// Number of groups the pattern defines (including group 0).
        available: usize,
    },
}

/// A configuration mistake surfaced while invoking a matched command.
///
/// Fatal for that single dispatch, but the process keeps serving subsequent
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The handler returned a type the dispatcher cannot translate into an
    /// outbound directive.
    #[error(
        "command '{command}' returned an unsupported type; \
         handlers must return text, an attachment, an Option of either, or ()"
    )]
    InvalidReturnType {
        /// The offending command.
        command: &'static str,
    },

    /// A declared parameter's [`ValueType`](parley_core::ValueType) does not
    /// convert into the handler method's parameter type.
    #[error("command '{command}': argument {index} does not convert to the handler parameter type")]
    ArgumentMismatch {
        /// The offending command.
        command: &'static str,
        /// Zero-based parameter position.
        index: usize,
    },

    /// The invoker received fewer arguments than the declaration lists.
    /// Cannot occur through the registry, which coerces one value per
    /// declared parameter.
    #[error("command '{command}': argument count does not match the declared parameters")]
    ArityMismatch {
        /// The offending command.
        command: &'static str,
    },
}
