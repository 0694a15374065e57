//! Bot facade: wires transport events to the dispatcher.
//!
//! The facade maps transport-level events to trigger kinds (plain channel
//! post → `Listen`; mention or direct message → `RespondTo`), filters out the
//! bot's own posts, and turns the dispatcher's directive into transport send
//! calls. Dispatch errors and send failures are logged and never escape the
//! event loop.

use std::sync::Arc;

use tracing::{debug, error};

use crate::command::TriggerKind;
use crate::dispatcher::Dispatcher;
use crate::registry::CommandRegistry;
use parley_core::{ChatTransport, IncomingMessage, OutboundDirective};

/// The outward face of the framework: one bot identity over one transport.
#[derive(Clone)]
pub struct Bot {
    transport: Arc<dyn ChatTransport>,
    dispatcher: Dispatcher,
}

impl Bot {
    /// Creates a bot over the process-wide command registry.
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self::with_registry(transport, CommandRegistry::global())
    }

    /// Creates a bot over an explicit registry.
    pub fn with_registry(transport: Arc<dyn ChatTransport>, registry: Arc<CommandRegistry>) -> Self {
        Self {
            transport,
            dispatcher: Dispatcher::new(registry),
        }
    }

    /// The transport this bot sends through.
    pub fn transport(&self) -> &Arc<dyn ChatTransport> {
        &self.transport
    }

    /// Handles a plain channel message.
    pub async fn on_plain_message(&self, message: &IncomingMessage) {
        self.handle(message, TriggerKind::Listen).await;
    }

    /// Handles a message that mentions the bot, or a direct message.
    pub async fn on_mention_or_dm(&self, message: &IncomingMessage) {
        self.handle(message, TriggerKind::RespondTo).await;
    }

    async fn handle(&self, message: &IncomingMessage, kind: TriggerKind) {
        // Required boundary rule: never react to our own posts.
        if message.sender_id == self.transport.self_id() {
            debug!(channel = %message.channel_id, "ignoring self-authored event");
            return;
        }

        let directive = match self.dispatcher.dispatch(&message.text, kind) {
            Ok(directive) => directive,
            Err(err) => {
                // A misconfigured command is fatal for this dispatch only.
                error!(channel = %message.channel_id, %err, "dispatch failed");
                return;
            }
        };

        let result = match &directive {
            OutboundDirective::Text(text) => {
                self.transport.send_text(&message.channel_id, text).await
            }
            OutboundDirective::Attachment(attachment) => {
                self.transport
                    .send_attachment(&message.channel_id, attachment)
                    .await
            }
            OutboundDirective::None => return,
        };

        if let Err(err) = result {
            error!(channel = %message.channel_id, %err, "failed to deliver reply");
        }
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("self_id", &self.transport.self_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandSpec, ParamSpec};
    use async_trait::async_trait;
    use parley_core::{Attachment, TransportError, TransportResult, ValueType};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Text(String, String),
        Attachment(String, Attachment),
    }

    #[derive(Default)]
    struct MockTransport {
        sent: Mutex<Vec<Sent>>,
        fail_sends: bool,
    }

    #[async_trait]
    impl ChatTransport for MockTransport {
        fn self_id(&self) -> &str {
            "bot-self"
        }

        async fn send_text(&self, channel_id: &str, text: &str) -> TransportResult<()> {
            if self.fail_sends {
                return Err(TransportError::SendFailed("mock failure".into()));
            }
            self.sent
                .lock()
                .unwrap()
                .push(Sent::Text(channel_id.into(), text.into()));
            Ok(())
        }

        async fn send_attachment(
            &self,
            channel_id: &str,
            attachment: &Attachment,
        ) -> TransportResult<()> {
            self.sent
                .lock()
                .unwrap()
                .push(Sent::Attachment(channel_id.into(), attachment.clone()));
            Ok(())
        }
    }

    fn test_registry() -> Arc<CommandRegistry> {
        Arc::new(CommandRegistry::from_specs(&[
            CommandSpec {
                name: "echo",
                trigger: TriggerKind::Listen,
                pattern: r"^say (\w+)$",
                params: &const { [ParamSpec::required(1, ValueType::Str)] },
                invoke: |args| Ok(Box::new(args[0].to_string())),
            },
            CommandSpec {
                name: "report",
                trigger: TriggerKind::RespondTo,
                pattern: "^report$",
                params: &[],
                invoke: |_| Ok(Box::new(Attachment::new("report").title("Report"))),
            },
        ]))
    }

    fn bot_with(transport: Arc<MockTransport>) -> Bot {
        Bot::with_registry(transport, test_registry())
    }

    #[tokio::test]
    async fn text_reply_goes_through_send_text() {
        let transport = Arc::new(MockTransport::default());
        let bot = bot_with(Arc::clone(&transport));

        bot.on_plain_message(&IncomingMessage::new("say hello", "C1", "alice"))
            .await;

        assert_eq!(
            *transport.sent.lock().unwrap(),
            vec![Sent::Text("C1".into(), "hello".into())]
        );
    }

    #[tokio::test]
    async fn attachment_reply_goes_through_send_attachment_only() {
        let transport = Arc::new(MockTransport::default());
        let bot = bot_with(Arc::clone(&transport));

        bot.on_mention_or_dm(&IncomingMessage::new("report", "C2", "alice"))
            .await;

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(matches!(&sent[0], Sent::Attachment(channel, _) if channel == "C2"));
    }

    #[tokio::test]
    async fn self_authored_events_are_ignored() {
        let transport = Arc::new(MockTransport::default());
        let bot = bot_with(Arc::clone(&transport));

        bot.on_plain_message(&IncomingMessage::new("say hello", "C1", "bot-self"))
            .await;

        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unmatched_message_sends_nothing() {
        let transport = Arc::new(MockTransport::default());
        let bot = bot_with(Arc::clone(&transport));

        bot.on_plain_message(&IncomingMessage::new("unrelated", "C1", "alice"))
            .await;

        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn send_failure_does_not_panic_and_later_events_still_flow() {
        let failing = Arc::new(MockTransport {
            fail_sends: true,
            ..MockTransport::default()
        });
        let bot = bot_with(Arc::clone(&failing));

        bot.on_plain_message(&IncomingMessage::new("say hello", "C1", "alice"))
            .await;
        // The failed send is logged; the bot keeps handling events.
        bot.on_plain_message(&IncomingMessage::new("say again", "C1", "alice"))
            .await;
    }
}
