//! Unified error types for the Parley core.
//!
//! Each error class has a distinct policy (see the crate docs): coercion
//! failures are recoverable and make a candidate count as "not matching";
//! transport failures are logged and never crash the event loop.

use thiserror::Error;

use crate::value::ValueType;

/// A raw capture could not be converted into its declared parameter type.
///
/// Expected and recoverable: the dispatcher treats the candidate as not
/// matching and continues scanning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The capture text does not parse as the declared type.
    #[error("'{raw}' does not parse as {target}")]
    ParseFailed {
        /// The raw capture text.
        raw: String,
        /// The declared target type.
        target: ValueType,
    },

    /// A non-nullable parameter's capture group did not participate in the
    /// match.
    #[error("missing capture for non-nullable {target} parameter")]
    MissingCapture {
        /// The declared target type.
        target: ValueType,
    },
}

/// Errors reported by a [`ChatTransport`](crate::transport::ChatTransport).
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The transport is not connected.
    #[error("transport is not connected")]
    NotConnected,

    /// An outbound message could not be delivered.
    #[error("failed to send message: {0}")]
    SendFailed(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
