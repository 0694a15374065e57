//! First-match command dispatch.
//!
//! Given an incoming message and a trigger kind, the dispatcher scans the
//! registry's descriptors of that kind in registration order and selects the
//! first candidate whose pattern matches AND whose every parameter coerces.
//! There is no scoring and no "best match": first eligible wins,
//! deterministically, because registry order is stable within a process run.
//!
//! A candidate whose pattern matches but whose argument fails coercion is
//! treated as not matching and the scan continues; this lets two commands
//! share a surface syntax and disambiguate on argument types.

use std::sync::Arc;

use tracing::{Level, debug, span, trace};

use crate::command::{MatchOutcome, Reply, TriggerKind};
use crate::error::DispatchError;
use crate::registry::CommandRegistry;
use parley_core::{Attachment, OutboundDirective};

/// Routes messages to the first eligible command.
///
/// Holds a read-only registry reference; dispatches are independent and may
/// run concurrently.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher over an explicit registry.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a dispatcher over the process-wide registry, building it on
    /// first use.
    pub fn global() -> Self {
        Self::new(CommandRegistry::global())
    }

    /// The registry this dispatcher reads from.
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Dispatches one message.
    ///
    /// Returns `Ok(OutboundDirective::None)` when no command is eligible;
    /// silence is the normal outcome, not an error. `Err` means a matched
    /// command is misconfigured (invalid return type or argument mismatch);
    /// that is fatal for this dispatch only.
    pub fn dispatch(
        &self,
        message: &str,
        kind: TriggerKind,
    ) -> Result<OutboundDirective, DispatchError> {
        let span = span!(Level::DEBUG, "dispatch", kind = ?kind);
        let _enter = span.enter();

        for command in self.registry.of_kind(kind) {
            match command.try_match(message) {
                MatchOutcome::NoPatternMatch => continue,
                MatchOutcome::CoercionFailed(err) => {
                    trace!(
                        command = command.name(),
                        %err,
                        "pattern matched but an argument failed coercion, continuing scan"
                    );
                    continue;
                }
                MatchOutcome::Matched(args) => {
                    debug!(command = command.name(), "command selected");
                    let reply = command.invoke(&args)?;
                    return interpret_reply(command.name(), reply);
                }
            }
        }

        trace!("no eligible command");
        Ok(OutboundDirective::None)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("commands", &self.registry.len())
            .finish()
    }
}

/// Translates a handler's boxed return value into an outbound directive.
///
/// Text and attachments (bare or inside `Option`) are the supported reply
/// shapes; `()` and `None` mean no response. Anything else is a programming
/// mistake in the handler and surfaces as [`DispatchError::InvalidReturnType`].
fn interpret_reply(command: &'static str, reply: Reply) -> Result<OutboundDirective, DispatchError> {
    let reply = match reply.downcast::<OutboundDirective>() {
        Ok(directive) => return Ok(*directive),
        Err(other) => other,
    };
    let reply = match reply.downcast::<String>() {
        Ok(text) => return Ok(OutboundDirective::Text(*text)),
        Err(other) => other,
    };
    let reply = match reply.downcast::<&'static str>() {
        Ok(text) => return Ok(OutboundDirective::Text((*text).to_string())),
        Err(other) => other,
    };
    let reply = match reply.downcast::<Attachment>() {
        Ok(attachment) => return Ok(OutboundDirective::Attachment(*attachment)),
        Err(other) => other,
    };
    let reply = match reply.downcast::<Option<String>>() {
        Ok(text) => {
            return Ok(match *text {
                Some(text) => OutboundDirective::Text(text),
                None => OutboundDirective::None,
            });
        }
        Err(other) => other,
    };
    let reply = match reply.downcast::<Option<Attachment>>() {
        Ok(attachment) => {
            return Ok(match *attachment {
                Some(attachment) => OutboundDirective::Attachment(attachment),
                None => OutboundDirective::None,
            });
        }
        Err(other) => other,
    };
    if reply.downcast::<()>().is_ok() {
        return Ok(OutboundDirective::None);
    }

    Err(DispatchError::InvalidReturnType { command })
}
