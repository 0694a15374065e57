//! The `define_command!` declaration macro.
//!
//! This is the only declaration surface a handler author touches: trigger
//! kind, pattern, and per-parameter capture-group metadata live next to the
//! handler they describe, and the macro will not compile without them: a
//! parameter can never silently lack its group index or type.

/// Declares a command handler and registers it for discovery.
///
/// The owning type must implement [`Default`]; a fresh instance is
/// constructed for every invocation, so handlers carry no state between
/// dispatches. The method receives one argument per `params` entry, in
/// declaration order, with types matching the declared
/// [`ValueType`](parley_core::ValueType)s (`Option<T>` for `optional`
/// parameters). Its return value becomes the reply: `String`, `&'static
/// str`, [`Attachment`](parley_core::Attachment), an `Option` of either, or
/// `()` for no response.
///
/// # Example
///
/// ```rust,ignore
/// use parley_framework::define_command;
///
/// #[derive(Default)]
/// struct Greet;
///
/// impl Greet {
///     fn greet(&self, name: String) -> String {
///         format!("hi, {name}")
///     }
/// }
///
/// define_command! {
///     static GREET: Greet => greet,
///     trigger: Listen,
///     pattern: r"^hello (\w+)$",
///     params: [required(1, Str)],
/// }
/// ```
#[macro_export]
macro_rules! define_command {
    (
        static $ident:ident : $owner:ty => $method:ident,
        trigger: $trigger:ident,
        pattern: $pattern:expr,
        params: [ $( $pkind:ident ( $group:expr, $vt:ident ) ),* $(,)? ] $(,)?
    ) => {
        #[$crate::linkme::distributed_slice($crate::registry::COMMANDS)]
        #[linkme(crate = $crate::linkme)]
        static $ident: $crate::command::CommandSpec = $crate::command::CommandSpec {
            name: ::core::concat!(
                ::core::stringify!($owner), "::", ::core::stringify!($method)
            ),
            trigger: $crate::command::TriggerKind::$trigger,
            pattern: $pattern,
            params: &[
                $( $crate::command::ParamSpec::$pkind($group, $crate::ValueType::$vt) ),*
            ],
            invoke: |__args| {
                const __NAME: &str = ::core::concat!(
                    ::core::stringify!($owner), "::", ::core::stringify!($method)
                );
                #[allow(unused_mut, unused_variables)]
                let mut __args = __args.iter().enumerate();
                let __handler = <$owner as ::core::default::Default>::default();
                let __reply = __handler.$method(
                    $( {
                        let _: usize = $group;
                        $crate::command::__next_arg(__NAME, &mut __args)?
                    } ),*
                );
                ::core::result::Result::Ok(
                    ::std::boxed::Box::new(__reply) as $crate::command::Reply
                )
            },
        };
    };
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::command::TriggerKind;
    use crate::dispatcher::Dispatcher;
    use crate::registry::CommandRegistry;
    use parley_core::{Attachment, OutboundDirective};

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    struct Greet;

    impl Default for Greet {
        fn default() -> Self {
            CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
            Self
        }
    }

    impl Greet {
        fn greet(&self, name: String) -> String {
            format!("hi, {name}")
        }
    }

    define_command! {
        static GREET: Greet => greet,
        trigger: Listen,
        pattern: r"^hello (\w+)$",
        params: [required(1, Str)],
    }

    #[derive(Default)]
    struct Roll;

    impl Roll {
        fn roll(&self, sides: i32, label: Option<String>) -> String {
            match label {
                Some(label) => format!("rolling d{sides} for {label}"),
                None => format!("rolling d{sides}"),
            }
        }
    }

    define_command! {
        static ROLL: Roll => roll,
        trigger: RespondTo,
        pattern: r"^roll d(\d+)(?: for (\w+))?$",
        params: [required(1, Int), optional(2, Str)],
    }

    #[derive(Default)]
    struct Status;

    impl Status {
        fn status(&self) -> Attachment {
            Attachment::new("all good").title("Status")
        }
    }

    define_command! {
        static STATUS: Status => status,
        trigger: RespondTo,
        pattern: r"^status$",
        params: [],
    }

    fn global_names() -> Vec<&'static str> {
        CommandRegistry::global()
            .commands()
            .iter()
            .map(|c| c.name())
            .collect()
    }

    #[test]
    fn declared_commands_are_discovered() {
        let names = global_names();
        assert!(names.contains(&"Greet::greet"));
        assert!(names.contains(&"Roll::roll"));
        assert!(names.contains(&"Status::status"));
    }

    #[test]
    fn global_build_is_idempotent() {
        assert_eq!(global_names(), global_names());
    }

    #[test]
    fn generated_invoker_converts_arguments() {
        let dispatcher = Dispatcher::global();

        assert_eq!(
            dispatcher.dispatch("hello world", TriggerKind::Listen).unwrap(),
            OutboundDirective::Text("hi, world".into())
        );
        assert_eq!(
            dispatcher.dispatch("roll d20", TriggerKind::RespondTo).unwrap(),
            OutboundDirective::Text("rolling d20".into())
        );
        assert_eq!(
            dispatcher
                .dispatch("roll d6 for damage", TriggerKind::RespondTo)
                .unwrap(),
            OutboundDirective::Text("rolling d6 for damage".into())
        );
    }

    #[test]
    fn zero_parameter_command_returns_attachment() {
        let dispatcher = Dispatcher::global();
        match dispatcher.dispatch("status", TriggerKind::RespondTo).unwrap() {
            OutboundDirective::Attachment(att) => {
                assert_eq!(att.title.as_deref(), Some("Status"));
            }
            other => panic!("expected attachment, got {other:?}"),
        }
    }

    #[test]
    fn each_invocation_constructs_a_fresh_handler() {
        let dispatcher = Dispatcher::global();
        let before = CONSTRUCTED.load(Ordering::SeqCst);

        dispatcher.dispatch("hello one", TriggerKind::Listen).unwrap();
        dispatcher.dispatch("hello two", TriggerKind::Listen).unwrap();

        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), before + 2);
    }
}
