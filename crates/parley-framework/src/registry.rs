//! Command registry: discovery and compiled descriptor ownership.
//!
//! Declared commands are discovered through the [`COMMANDS`] distributed
//! slice: every [`define_command!`](crate::define_command) invocation in any
//! linked crate contributes one [`CommandSpec`] entry. Slice order is fixed
//! at link time, so it is stable within a process run; that order is the
//! dispatcher's tie-break, see [`Dispatcher`](crate::dispatcher::Dispatcher).
//!
//! The global registry is built at most once (`OnceLock`), even when several
//! dispatches race to trigger the first build, and is read-only afterwards.

use std::sync::{Arc, OnceLock};

use linkme::distributed_slice;
use tracing::{debug, error};

use crate::command::{CommandDescriptor, CommandSpec, TriggerKind};

/// Distributed slice of every command declared in the linked binary.
#[distributed_slice]
pub static COMMANDS: [CommandSpec];

static GLOBAL: OnceLock<Arc<CommandRegistry>> = OnceLock::new();

/// Owns the compiled descriptors for the process lifetime.
///
/// Immutable once built; safe to share across concurrent dispatches.
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Returns the process-wide registry, building it on first call.
    ///
    /// Construction runs at most once; every later call (and every racing
    /// first call) gets the same cached registry.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::from_specs(&COMMANDS))))
    }

    /// Compiles an explicit list of declarations, preserving their order.
    ///
    /// A declaration that fails validation is reported through the error log
    /// and skipped; the remaining commands still register.
    pub fn from_specs(specs: &[CommandSpec]) -> Self {
        let mut commands = Vec::with_capacity(specs.len());
        for spec in specs {
            match CommandDescriptor::compile(spec) {
                Ok(descriptor) => {
                    debug!(
                        command = descriptor.name(),
                        trigger = ?descriptor.trigger(),
                        pattern = descriptor.pattern_str(),
                        "registered command"
                    );
                    commands.push(descriptor);
                }
                Err(err) => {
                    error!(command = spec.name, %err, "skipping invalid command declaration");
                }
            }
        }
        Self { commands }
    }

    /// All compiled descriptors in registration order.
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Descriptors of one trigger kind, preserving registration order.
    pub fn of_kind(&self, kind: TriggerKind) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().filter(move |c| c.trigger() == kind)
    }

    /// Number of usable (successfully compiled) commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no command compiled.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ParamSpec;
    use parley_core::ValueType;

    fn named(name: &'static str, pattern: &'static str) -> CommandSpec {
        CommandSpec {
            name,
            trigger: TriggerKind::Listen,
            pattern,
            params: &[],
            invoke: |_| Ok(Box::new(())),
        }
    }

    #[test]
    fn build_preserves_declaration_order() {
        let registry = CommandRegistry::from_specs(&[
            named("a", "^a$"),
            named("b", "^b$"),
            named("c", "^c$"),
        ]);
        let names: Vec<_> = registry.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn one_bad_declaration_does_not_abort_the_build() {
        let registry = CommandRegistry::from_specs(&[
            named("good", "^ok$"),
            named("broken", "^(unclosed"),
            CommandSpec {
                name: "bad_group",
                trigger: TriggerKind::Listen,
                pattern: "^x$",
                params: &const { [ParamSpec::required(1, ValueType::Str)] },
                invoke: |_| Ok(Box::new(())),
            },
            named("also_good", "^fine$"),
        ]);

        let names: Vec<_> = registry.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["good", "also_good"]);
    }

    #[test]
    fn build_is_idempotent() {
        let specs = [named("a", "^a$"), named("b", "^b$")];
        let first = CommandRegistry::from_specs(&specs);
        let second = CommandRegistry::from_specs(&specs);

        let names = |r: &CommandRegistry| -> Vec<&str> {
            r.commands().iter().map(|c| c.name()).collect()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn of_kind_filters_but_keeps_order() {
        let registry = CommandRegistry::from_specs(&[
            CommandSpec {
                trigger: TriggerKind::RespondTo,
                ..named("r1", "^1$")
            },
            named("l1", "^2$"),
            CommandSpec {
                trigger: TriggerKind::RespondTo,
                ..named("r2", "^3$")
            },
        ]);

        let respond: Vec<_> = registry
            .of_kind(TriggerKind::RespondTo)
            .map(|c| c.name())
            .collect();
        assert_eq!(respond, ["r1", "r2"]);
    }
}
