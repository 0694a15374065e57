//! Command declarations and compiled descriptors.
//!
//! A command goes through two representations:
//!
//! 1. [`CommandSpec`]: the static, const-constructible declaration produced
//!    by [`define_command!`](crate::define_command) and collected through the
//!    [`COMMANDS`](crate::registry::COMMANDS) distributed slice.
//! 2. [`CommandDescriptor`]: the compiled form: pattern compiled to a
//!    [`regex::Regex`], capture-group indices validated against it. Built
//!    once at registry build time and immutable for the process lifetime.
//!
//! Matching is explicit at the type level: [`CommandDescriptor::try_match`]
//! returns a [`MatchOutcome`] so the dispatcher can tell "pattern did not
//! match" apart from "pattern matched but an argument failed coercion"
//! without using errors as control flow.

use std::any::Any;

use regex::Regex;

use crate::error::{DispatchError, SpecError};
use parley_core::{CoercionError, FromValue, Value, ValueType};

/// Which chat events a command considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Any plain channel message.
    Listen,
    /// Messages that mention the bot, and all direct messages.
    RespondTo,
}

/// Declaration of one formal handler parameter: which capture group supplies
/// its raw text, what type it coerces to, and whether an absent capture is
/// acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Regex capture group index (0 is the whole match).
    pub group: usize,
    /// Target type for coercion.
    pub ty: ValueType,
    /// Whether an absent or empty capture yields `Value::Null` instead of a
    /// coercion failure.
    pub nullable: bool,
}

impl ParamSpec {
    /// A parameter whose capture must participate in the match.
    pub const fn required(group: usize, ty: ValueType) -> Self {
        Self {
            group,
            ty,
            nullable: false,
        }
    }

    /// A parameter that becomes `Value::Null` when its capture is absent.
    pub const fn optional(group: usize, ty: ValueType) -> Self {
        Self {
            group,
            ty,
            nullable: true,
        }
    }
}

/// A handler's boxed return value, interpreted by the dispatcher into an
/// outbound directive.
pub type Reply = Box<dyn Any + Send>;

/// Invoker stored in a command declaration.
///
/// Constructs a fresh handler instance and calls the method with the coerced
/// arguments in declaration order. Generated by
/// [`define_command!`](crate::define_command).
pub type InvokeFn = fn(&[Value]) -> Result<Reply, DispatchError>;

/// The static declaration of one command handler.
///
/// Every field is const-constructible so a `CommandSpec` can live in a
/// `static` registered through the [`COMMANDS`](crate::registry::COMMANDS)
/// distributed slice.
pub struct CommandSpec {
    /// Diagnostic name, conventionally `Owner::method`.
    pub name: &'static str,
    /// Which events this command considers.
    pub trigger: TriggerKind,
    /// Regular expression with numbered capture groups.
    pub pattern: &'static str,
    /// Formal parameters in declaration order.
    pub params: &'static [ParamSpec],
    /// Fresh-instance invoker.
    pub invoke: InvokeFn,
}

/// Per-candidate result of matching one message against one descriptor.
#[derive(Debug)]
pub enum MatchOutcome {
    /// The pattern matched and every parameter coerced; the values are in
    /// parameter declaration order.
    Matched(Vec<Value>),
    /// The pattern found no match anywhere in the message.
    NoPatternMatch,
    /// The pattern matched but an argument failed coercion. The candidate is
    /// treated as not matching and the scan continues.
    CoercionFailed(CoercionError),
}

/// The compiled, immutable representation of one declared command.
pub struct CommandDescriptor {
    name: &'static str,
    trigger: TriggerKind,
    pattern: Regex,
    params: &'static [ParamSpec],
    invoke: InvokeFn,
}

impl CommandDescriptor {
    /// Compiles a declaration, validating the pattern and every declared
    /// capture-group index against it.
    pub fn compile(spec: &CommandSpec) -> Result<Self, SpecError> {
        let pattern = Regex::new(spec.pattern).map_err(|source| SpecError::InvalidPattern {
            command: spec.name,
            source,
        })?;

        let available = pattern.captures_len();
        for param in spec.params {
            if param.group >= available {
                return Err(SpecError::GroupOutOfRange {
                    command: spec.name,
                    group: param.group,
                    available,
                });
            }
        }

        Ok(Self {
            name: spec.name,
            trigger: spec.trigger,
            pattern,
            params: spec.params,
            invoke: spec.invoke,
        })
    }

    /// Diagnostic name of this command.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Which events this command considers.
    pub fn trigger(&self) -> TriggerKind {
        self.trigger
    }

    /// The declared pattern text.
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Matches the message with an unanchored first-match search and coerces
    /// every parameter's capture group.
    pub fn try_match(&self, message: &str) -> MatchOutcome {
        let Some(caps) = self.pattern.captures(message) else {
            return MatchOutcome::NoPatternMatch;
        };

        let mut args = Vec::with_capacity(self.params.len());
        for param in self.params {
            let raw = caps.get(param.group).map(|m| m.as_str());
            match param.ty.coerce(raw, param.nullable) {
                Ok(value) => args.push(value),
                Err(err) => return MatchOutcome::CoercionFailed(err),
            }
        }
        MatchOutcome::Matched(args)
    }

    /// Invokes the handler on a freshly constructed instance with arguments
    /// in parameter declaration order.
    pub fn invoke(&self, args: &[Value]) -> Result<Reply, DispatchError> {
        (self.invoke)(args)
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("trigger", &self.trigger)
            .field("pattern", &self.pattern.as_str())
            .field("params", &self.params)
            .finish()
    }
}

/// Pulls the next coerced argument and converts it to the handler's concrete
/// parameter type. Used by the invokers that `define_command!` generates.
#[doc(hidden)]
pub fn __next_arg<T: FromValue>(
    command: &'static str,
    args: &mut std::iter::Enumerate<std::slice::Iter<'_, Value>>,
) -> Result<T, DispatchError> {
    let (index, value) = args
        .next()
        .ok_or(DispatchError::ArityMismatch { command })?;
    T::from_value(value).ok_or(DispatchError::ArgumentMismatch { command, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(pattern: &'static str, params: &'static [ParamSpec]) -> CommandSpec {
        CommandSpec {
            name: "test::cmd",
            trigger: TriggerKind::Listen,
            pattern,
            params,
            invoke: |_| Ok(Box::new(())),
        }
    }

    #[test]
    fn compile_rejects_invalid_pattern() {
        let err = CommandDescriptor::compile(&spec(r"^(unclosed", &[])).unwrap_err();
        assert!(matches!(err, SpecError::InvalidPattern { .. }));
    }

    #[test]
    fn compile_rejects_out_of_range_group() {
        let params = &const { [ParamSpec::required(2, ValueType::Str)] };
        let err = CommandDescriptor::compile(&spec(r"^hello (\w+)$", params)).unwrap_err();
        assert!(matches!(
            err,
            SpecError::GroupOutOfRange {
                group: 2,
                available: 2,
                ..
            }
        ));
    }

    #[test]
    fn try_match_extracts_in_declaration_order() {
        // Parameters reference groups out of numeric order.
        let params = &const {
            [
                ParamSpec::required(2, ValueType::Int),
                ParamSpec::required(1, ValueType::Str),
            ]
        };
        let desc = CommandDescriptor::compile(&spec(r"^(\w+) (\d+)$", params)).unwrap();

        match desc.try_match("roll 6") {
            MatchOutcome::Matched(args) => {
                assert_eq!(args, vec![Value::Int(6), Value::Str("roll".into())]);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn try_match_reports_no_pattern_match() {
        let desc = CommandDescriptor::compile(&spec(r"^hello (\w+)$", &[])).unwrap();
        assert!(matches!(
            desc.try_match("hello"),
            MatchOutcome::NoPatternMatch
        ));
    }

    #[test]
    fn try_match_is_unanchored() {
        let params = &const { [ParamSpec::required(1, ValueType::Str)] };
        let desc = CommandDescriptor::compile(&spec(r"ping (\w+)", params)).unwrap();
        assert!(matches!(
            desc.try_match("please ping gateway now"),
            MatchOutcome::Matched(_)
        ));
    }

    #[test]
    fn try_match_distinguishes_coercion_failure() {
        let params = &const { [ParamSpec::required(1, ValueType::Int)] };
        let desc = CommandDescriptor::compile(&spec(r"^add (\w+)$", params)).unwrap();
        assert!(matches!(
            desc.try_match("add five"),
            MatchOutcome::CoercionFailed(CoercionError::ParseFailed { .. })
        ));
    }

    #[test]
    fn optional_param_absent_is_null() {
        let params = &const {
            [
                ParamSpec::required(1, ValueType::Str),
                ParamSpec::optional(2, ValueType::Int),
            ]
        };
        let desc = CommandDescriptor::compile(&spec(r"^roll (\w+)(?: (\d+))?$", params)).unwrap();

        match desc.try_match("roll dice") {
            MatchOutcome::Matched(args) => {
                assert_eq!(args, vec![Value::Str("dice".into()), Value::Null]);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }
}
