//! Bindings for the `choices` namespace.
//!
//! A choice is a field or parameter that may hold one of several types.
//! Each choice becomes a sum type that dispatches on the value's runtime
//! tag.

use jsonbind_core::{ConvertError, FromValue, ToValue, Value, ValueKind};

/// `integer` or `integer[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Integers {
    Integer(i64),
    Array(Vec<i64>),
}

impl FromValue for Integers {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match ValueKind::of(value) {
            ValueKind::Integer => i64::from_value(value).map(Integers::Integer),
            ValueKind::List => Vec::from_value(value).map(Integers::Array),
            _ => Err(ConvertError::mismatch("integer or list", value)),
        }
    }
}

impl ToValue for Integers {
    fn to_value(&self) -> Value {
        match self {
            Integers::Integer(i) => i.to_value(),
            Integers::Array(a) => a.to_value(),
        }
    }
}

/// `string` or `string[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strings {
    String(String),
    Array(Vec<String>),
}

impl FromValue for Strings {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match ValueKind::of(value) {
            ValueKind::String => String::from_value(value).map(Strings::String),
            ValueKind::List => Vec::from_value(value).map(Strings::Array),
            _ => Err(ConvertError::mismatch("string or list", value)),
        }
    }
}

impl ToValue for Strings {
    fn to_value(&self) -> Value {
        match self {
            Strings::String(s) => s.to_value(),
            Strings::Array(a) => a.to_value(),
        }
    }
}

// ── Functions ───────────────────────────────────────────────────────

/// `takesIntegers((integer or integer[]) nums)`
pub mod takes_integers {
    use super::Integers;
    use jsonbind_core::{call, Args, ConvertError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub nums: Integers,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "choices.takesIntegers";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                nums: args.required("nums")?,
            })
        }
    }
}

/// `objectWithChoices(object stringInfo)`
pub mod object_with_choices {
    use super::{Integers, Strings};
    use jsonbind_core::record::{insert, insert_optional, optional, required};
    use jsonbind_core::{call, Args, ConvertError, FromValue, Map, Record, ToValue, Value};

    /// The inline object type of the `stringInfo` parameter.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StringInfo {
        pub strings: Strings,
        pub integers: Option<Integers>,
    }

    impl Record for StringInfo {
        const NAME: &'static str = "StringInfo";

        fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
            Ok(StringInfo {
                strings: required(dict, "strings")?,
                integers: optional(dict, "integers")?,
            })
        }

        fn to_dict(&self) -> Map<String, Value> {
            let mut dict = Map::new();
            insert(&mut dict, "strings", &self.strings);
            insert_optional(&mut dict, "integers", &self.integers);
            dict
        }
    }

    impl FromValue for StringInfo {
        fn from_value(value: &Value) -> Result<Self, ConvertError> {
            StringInfo::from_dict_value(value)
        }
    }

    impl ToValue for StringInfo {
        fn to_value(&self) -> Value {
            self.to_dict_value()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub string_info: StringInfo,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "choices.objectWithChoices";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                string_info: args.required("stringInfo")?,
            })
        }
    }
}

/// `returnChoices()` returning `integer[]` or `integer`
pub mod return_choices {
    pub mod result {
        use crate::choices::Integers;
        use jsonbind_core::{call, Value};

        pub fn create(result: &Integers) -> Value {
            call::result(result)
        }

        pub fn create_array(integers: &[i64]) -> Value {
            call::result(integers)
        }

        pub fn create_integer(integer: i64) -> Value {
            call::result(&integer)
        }
    }
}
