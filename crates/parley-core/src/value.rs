//! Value types and text coercion.
//!
//! Command arguments arrive as raw regex capture text and are converted into
//! one of a closed set of primitive types before a handler runs. The set is
//! deliberately closed: an "unsupported parameter type" cannot be expressed,
//! so that failure class is ruled out at compile time instead of being
//! checked per message.
//!
//! # Coercion rules
//!
//! | target | succeeds when |
//! |--------|---------------|
//! | `Byte`/`Short`/`Int`/`Long` | raw parses as a base-10 integer in range |
//! | `Float`/`Double` | raw parses as a base-10 float literal |
//! | `Bool` | raw is exactly `"true"` or `"false"` |
//! | `Str` | always (value = raw) |
//!
//! An empty or absent capture with `nullable == true` becomes [`Value::Null`]
//! without attempting a parse. An absent capture on a non-nullable parameter
//! is a [`CoercionError::MissingCapture`].

use crate::error::CoercionError;

/// The closed set of primitive types a command parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 8-bit signed integer (`i8`).
    Byte,
    /// 16-bit signed integer (`i16`).
    Short,
    /// 32-bit signed integer (`i32`).
    Int,
    /// 64-bit signed integer (`i64`).
    Long,
    /// 32-bit float (`f32`).
    Float,
    /// 64-bit float (`f64`).
    Double,
    /// Boolean, spelled exactly `true` or `false`.
    Bool,
    /// Raw text, never fails to coerce.
    Str,
}

impl ValueType {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Str => "str",
        }
    }

    /// Coerces a raw capture into a typed [`Value`].
    ///
    /// `raw` is `None` when the capture group did not participate in the
    /// match. Empty and absent captures are equivalent for nullable
    /// parameters; a non-nullable parameter requires a participating group
    /// (except `Str`, which accepts the empty string).
    pub fn coerce(self, raw: Option<&str>, nullable: bool) -> Result<Value, CoercionError> {
        let raw = match raw {
            Some(s) if !(s.is_empty() && nullable) => s,
            Some(_) => return Ok(Value::Null),
            None if nullable => return Ok(Value::Null),
            None => return Err(CoercionError::MissingCapture { target: self }),
        };

        let fail = || CoercionError::ParseFailed {
            raw: raw.to_string(),
            target: self,
        };

        Ok(match self {
            Self::Byte => Value::Byte(raw.parse().map_err(|_| fail())?),
            Self::Short => Value::Short(raw.parse().map_err(|_| fail())?),
            Self::Int => Value::Int(raw.parse().map_err(|_| fail())?),
            Self::Long => Value::Long(raw.parse().map_err(|_| fail())?),
            Self::Float => Value::Float(raw.parse().map_err(|_| fail())?),
            Self::Double => Value::Double(raw.parse().map_err(|_| fail())?),
            Self::Bool => match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => return Err(fail()),
            },
            Self::Str => Value::Str(raw.to_string()),
        })
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A coerced argument value, one variant per [`ValueType`] plus `Null` for
/// absent nullable captures.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Str(String),
    Null,
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Conversion from a coerced [`Value`] into a concrete handler parameter type.
///
/// Generated command invokers use this to turn the argument vector into the
/// handler method's real signature. `None` means the declared [`ValueType`]
/// does not line up with the parameter type, a configuration mistake in the
/// command declaration, not a per-message failure.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    String => Str,
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_parse_base_10() {
        assert_eq!(ValueType::Int.coerce(Some("5"), false), Ok(Value::Int(5)));
        assert_eq!(
            ValueType::Long.coerce(Some("-42"), false),
            Ok(Value::Long(-42))
        );
        assert_eq!(
            ValueType::Byte.coerce(Some("127"), false),
            Ok(Value::Byte(127))
        );
    }

    #[test]
    fn integer_out_of_range_fails() {
        assert!(matches!(
            ValueType::Byte.coerce(Some("300"), false),
            Err(CoercionError::ParseFailed { .. })
        ));
        assert!(matches!(
            ValueType::Short.coerce(Some("70000"), false),
            Err(CoercionError::ParseFailed { .. })
        ));
    }

    #[test]
    fn non_numeric_text_fails() {
        assert!(ValueType::Int.coerce(Some("five"), false).is_err());
        assert!(ValueType::Double.coerce(Some("half"), false).is_err());
    }

    #[test]
    fn floats_parse() {
        assert_eq!(
            ValueType::Double.coerce(Some("2.5"), false),
            Ok(Value::Double(2.5))
        );
        assert_eq!(
            ValueType::Float.coerce(Some("-0.25"), false),
            Ok(Value::Float(-0.25))
        );
    }

    #[test]
    fn bool_is_case_sensitive() {
        assert_eq!(
            ValueType::Bool.coerce(Some("true"), false),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            ValueType::Bool.coerce(Some("false"), false),
            Ok(Value::Bool(false))
        );
        assert!(ValueType::Bool.coerce(Some("True"), false).is_err());
        assert!(ValueType::Bool.coerce(Some("yes"), false).is_err());
    }

    #[test]
    fn str_always_succeeds() {
        assert_eq!(
            ValueType::Str.coerce(Some("anything"), false),
            Ok(Value::Str("anything".into()))
        );
        // An empty participating capture is still a value for Str.
        assert_eq!(
            ValueType::Str.coerce(Some(""), false),
            Ok(Value::Str(String::new()))
        );
    }

    #[test]
    fn nullable_absent_yields_null() {
        assert_eq!(ValueType::Int.coerce(None, true), Ok(Value::Null));
        assert_eq!(ValueType::Str.coerce(Some(""), true), Ok(Value::Null));
    }

    #[test]
    fn non_nullable_absent_fails() {
        assert!(matches!(
            ValueType::Int.coerce(None, false),
            Err(CoercionError::MissingCapture { .. })
        ));
    }

    #[test]
    fn round_trip_through_display() {
        for (ty, text) in [
            (ValueType::Int, "123"),
            (ValueType::Long, "-9001"),
            (ValueType::Bool, "true"),
            (ValueType::Str, "hello"),
        ] {
            let value = ty.coerce(Some(text), false).unwrap();
            assert_eq!(value.to_string(), text);
            assert_eq!(ty.coerce(Some(&value.to_string()), false).unwrap(), value);
        }
    }

    #[test]
    fn from_value_matches_variants() {
        assert_eq!(i32::from_value(&Value::Int(7)), Some(7));
        assert_eq!(String::from_value(&Value::Str("x".into())), Some("x".into()));
        assert_eq!(i32::from_value(&Value::Str("7".into())), None);
        assert_eq!(Option::<i32>::from_value(&Value::Null), Some(None));
        assert_eq!(Option::<i32>::from_value(&Value::Int(7)), Some(Some(7)));
    }
}
