//! String-valued enumerations.

use serde_json::Value;

use crate::error::ConvertError;
use crate::value::ValueKind;

/// An enumeration whose values travel as one of a fixed set of strings.
pub trait StringEnum: Sized + Copy {
    /// Every declared string, in schema order.
    const VALUES: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;

    fn name(self) -> &'static str;
}

/// Decode a string value into `E`, rejecting undeclared strings.
pub fn decode<E: StringEnum>(value: &Value) -> Result<E, ConvertError> {
    let name = value
        .as_str()
        .ok_or_else(|| ConvertError::mismatch(ValueKind::String.name(), value))?;
    E::from_name(name).ok_or_else(|| ConvertError::invalid_enum(name, E::VALUES))
}

pub fn encode<E: StringEnum>(value: E) -> Value {
    Value::String(value.name().to_owned())
}

/// Declare a string enumeration together with its [`StringEnum`],
/// [`FromValue`](crate::FromValue) and [`ToValue`](crate::ToValue) impls.
///
/// ```
/// jsonbind_core::string_enum! {
///     pub enum State {
///         Foo => "foo",
///         Bar => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::StringEnum for $name {
            const VALUES: &'static [&'static str] = &[$($value),+];

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    $($value => ::core::option::Option::Some($name::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl $crate::FromValue for $name {
            fn from_value(
                value: &$crate::Value,
            ) -> ::core::result::Result<Self, $crate::ConvertError> {
                $crate::enumeration::decode(value)
            }
        }

        impl $crate::ToValue for $name {
            fn to_value(&self) -> $crate::Value {
                $crate::enumeration::encode(*self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Size {
        Small,
        Large,
    }

    impl StringEnum for Size {
        const VALUES: &'static [&'static str] = &["small", "large"];

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "small" => Some(Size::Small),
                "large" => Some(Size::Large),
                _ => None,
            }
        }

        fn name(self) -> &'static str {
            match self {
                Size::Small => "small",
                Size::Large => "large",
            }
        }
    }

    #[test]
    fn decode_declared_value() {
        assert_eq!(decode::<Size>(&json!("large")).unwrap(), Size::Large);
        assert_eq!(encode(Size::Small), json!("small"));
    }

    #[test]
    fn undeclared_string_is_rejected() {
        let err = decode::<Size>(&json!("medium")).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"$: 'medium' is not one of ["small", "large"]"#
        );
    }

    crate::string_enum! {
        enum Color {
            Red => "red",
            Green => "green",
        }
    }

    #[test]
    fn macro_declared_enum_round_trips() {
        use crate::{FromValue, ToValue};

        let c = Color::from_value(&json!("green")).unwrap();
        assert_eq!(c, Color::Green);
        assert_eq!(c.to_value(), json!("green"));
        assert_eq!(Color::VALUES, &["red", "green"]);
        assert!(Color::from_value(&json!("blue")).is_err());
        assert_eq!(Color::Red.name(), "red");
    }

    #[test]
    fn non_string_is_a_type_mismatch() {
        let err = decode::<Size>(&json!(1)).unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { .. }));
    }
}
