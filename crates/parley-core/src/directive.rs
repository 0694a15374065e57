//! Outbound directives.
//!
//! The normalized form of a command's reply, ready for the transport layer
//! to deliver. Produced by the dispatcher from a handler's return value; a
//! directive has no lifecycle beyond the dispatch that created it.

use crate::message::Attachment;

/// What the bot should send back for one dispatched message.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundDirective {
    /// Send plain text to the originating channel.
    Text(String),
    /// Send a rich attachment to the originating channel.
    Attachment(Attachment),
    /// Send nothing. A message with no matching command yields this.
    None,
}

impl OutboundDirective {
    /// Returns `true` if nothing should be sent.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<String> for OutboundDirective {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Attachment> for OutboundDirective {
    fn from(attachment: Attachment) -> Self {
        Self::Attachment(attachment)
    }
}
