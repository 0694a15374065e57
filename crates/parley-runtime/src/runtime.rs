//! Runtime orchestration: the event pump between transport and bot.
//!
//! A transport integration pushes neutral events through an [`EventSink`];
//! the [`BotRuntime`] pump spawns one task per event, so dispatches run
//! independently and never block one another. Shutdown is cooperative: the
//! pump stops on ctrl-c or when every sink has been dropped, then asks the
//! transport to disconnect.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ParleyConfig;
use crate::error::RuntimeResult;
use parley_core::{ChatTransport, IncomingMessage};
use parley_framework::{Bot, CommandRegistry};

/// One transport-level event, already mapped to the neutral message form.
#[derive(Debug, Clone)]
pub enum InboundEvent {
    /// A plain channel post.
    Plain(IncomingMessage),
    /// A post that mentions the bot, or a direct message.
    MentionOrDirect(IncomingMessage),
}

/// Cloneable handle a transport uses to feed events into the runtime.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::Sender<InboundEvent>,
}

impl EventSink {
    /// Pushes an event into the pump. Returns `false` when the runtime has
    /// shut down and the event was dropped.
    pub async fn push(&self, event: InboundEvent) -> bool {
        if self.tx.send(event).await.is_err() {
            warn!("runtime is gone, dropping inbound event");
            return false;
        }
        true
    }

    /// Convenience wrapper for a plain channel post.
    pub async fn plain(&self, message: IncomingMessage) -> bool {
        self.push(InboundEvent::Plain(message)).await
    }

    /// Convenience wrapper for a mention or direct message.
    pub async fn mention_or_direct(&self, message: IncomingMessage) -> bool {
        self.push(InboundEvent::MentionOrDirect(message)).await
    }
}

/// Owns the bot, the transport, and the inbound event channel.
pub struct BotRuntime {
    bot: Arc<Bot>,
    transport: Arc<dyn ChatTransport>,
    events: mpsc::Receiver<InboundEvent>,
}

impl BotRuntime {
    /// Creates a runtime over the process-wide command registry.
    ///
    /// Returns the runtime and the [`EventSink`] the transport should push
    /// events through. The runtime keeps no sender of its own, so dropping
    /// every sink closes the pump.
    pub fn new(transport: Arc<dyn ChatTransport>, config: &ParleyConfig) -> (Self, EventSink) {
        Self::with_registry(transport, CommandRegistry::global(), config)
    }

    /// Creates a runtime over an explicit registry.
    pub fn with_registry(
        transport: Arc<dyn ChatTransport>,
        registry: Arc<CommandRegistry>,
        config: &ParleyConfig,
    ) -> (Self, EventSink) {
        let (tx, rx) = mpsc::channel(config.runtime.event_buffer.max(1));
        let bot = Arc::new(Bot::with_registry(Arc::clone(&transport), registry));
        (
            Self {
                bot,
                transport,
                events: rx,
            },
            EventSink { tx },
        )
    }

    /// The bot facade this runtime drives.
    pub fn bot(&self) -> Arc<Bot> {
        Arc::clone(&self.bot)
    }

    /// Connects the transport and pumps events until ctrl-c or until every
    /// [`EventSink`] has been dropped.
    pub async fn run(mut self) -> RuntimeResult<()> {
        self.transport.connect().await?;
        info!(self_id = self.transport.self_id(), "transport connected");

        loop {
            tokio::select! {
                maybe = self.events.recv() => match maybe {
                    Some(event) => self.spawn_dispatch(event),
                    None => {
                        debug!("all event sinks dropped, stopping pump");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }

        self.transport.disconnect().await?;
        info!("transport disconnected");
        Ok(())
    }

    /// Pumps events until every sink is dropped, without installing a signal
    /// handler and without touching the transport lifecycle. Used by
    /// embedders that manage the session themselves, and by tests.
    pub async fn run_until_closed(mut self) {
        while let Some(event) = self.events.recv().await {
            self.spawn_dispatch(event);
        }
    }

    fn spawn_dispatch(&self, event: InboundEvent) {
        let bot = Arc::clone(&self.bot);
        tokio::spawn(async move {
            match event {
                InboundEvent::Plain(message) => bot.on_plain_message(&message).await,
                InboundEvent::MentionOrDirect(message) => bot.on_mention_or_dm(&message).await,
            }
        });
    }
}

impl std::fmt::Debug for BotRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotRuntime")
            .field("self_id", &self.transport.self_id())
            .finish()
    }
}
