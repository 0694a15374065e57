//! The chat-transport boundary.
//!
//! Session establishment, reconnection, and wire framing all live behind
//! this trait. The framework only ever needs the bot's own identity (to
//! filter self-authored events) and the two send operations.

use async_trait::async_trait;

use crate::error::TransportResult;
use crate::message::Attachment;

/// Boundary trait implemented by chat-network integrations.
///
/// Implementations deliver inbound events on their own tasks; the framework
/// makes no single-threaded delivery assumption. Send operations may block or
/// retry at the transport's discretion; the framework imposes no timeout,
/// but it logs a send failure and keeps serving.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// The bot's own user identity, used to ignore self-authored events.
    fn self_id(&self) -> &str;

    /// Sends plain text to a channel.
    async fn send_text(&self, channel_id: &str, text: &str) -> TransportResult<()>;

    /// Sends a rich attachment to a channel.
    async fn send_attachment(
        &self,
        channel_id: &str,
        attachment: &Attachment,
    ) -> TransportResult<()>;

    /// Establishes the session. Default: nothing to do.
    async fn connect(&self) -> TransportResult<()> {
        Ok(())
    }

    /// Tears the session down. Default: nothing to do.
    async fn disconnect(&self) -> TransportResult<()> {
        Ok(())
    }
}
