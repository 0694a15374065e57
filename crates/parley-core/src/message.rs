//! Inbound message and rich-attachment models.

use serde::{Deserialize, Serialize};

/// A neutral representation of one inbound chat message.
///
/// The transport collaborator translates its provider-specific payload into
/// this triple before handing the event to the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Message text as the user typed it (mention markup already stripped or
    /// not, at the transport's discretion).
    pub text: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Identity of the author.
    pub sender_id: String,
}

impl IncomingMessage {
    pub fn new(
        text: impl Into<String>,
        channel_id: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            channel_id: channel_id.into(),
            sender_id: sender_id.into(),
        }
    }
}

/// A rich outbound attachment.
///
/// Modeled on the common chat-provider attachment shape: a plain-text
/// fallback, an optional title, body text, an accent color, and a list of
/// short key/value fields. Serialization is left to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary for clients that cannot render the attachment.
    pub fallback: String,
    /// Optional title line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Accent color, e.g. `"#36a64f"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Tabular key/value fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
}

impl Attachment {
    /// Creates an attachment with the given fallback text.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }

    /// Sets the title line.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the accent color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Appends a key/value field.
    pub fn field(mut self, title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        self.fields.push(AttachmentField {
            title: title.into(),
            value: value.into(),
            short,
        });
        self
    }
}

/// One key/value field inside an [`Attachment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    /// Whether the field is narrow enough to render side by side.
    #[serde(default)]
    pub short: bool,
}
