//! Name-indexed table of every binding in this crate.
//!
//! Lets tools drive a binding by its schema name without knowing its Rust
//! type at compile time.

use std::fmt::Debug;

use jsonbind_core::{call, ConvertError, FromValue, Params, Record, ToValue, Value};

use crate::{arrays, choices, enums};

/// Decode a value and re-encode it canonically.
pub type RoundTripFn = fn(&Value) -> Result<Value, ConvertError>;
/// Decode an argument list and describe the resulting bundle. The
/// description is human-readable debug text, not a JSON encoding.
pub type ParamsFn = fn(&[Value]) -> Result<String, ConvertError>;

/// A declared type.
#[derive(Clone, Copy)]
pub struct TypeBinding {
    /// Qualified schema name, e.g. `"arrays.RefArrayType"`.
    pub name: &'static str,
    pub round_trip: RoundTripFn,
}

/// A declared function. Either side may be absent.
#[derive(Clone, Copy)]
pub struct FunctionBinding {
    /// Qualified schema name, e.g. `"arrays.integerArray"`.
    pub name: &'static str,
    pub params: Option<ParamsFn>,
    pub result: Option<RoundTripFn>,
}

fn record_round_trip<R: Record>(value: &Value) -> Result<Value, ConvertError> {
    R::from_dict_value(value).map(|r| r.to_dict_value())
}

fn describe_params<P: Params + Debug>(args: &[Value]) -> Result<String, ConvertError> {
    P::try_create(args).map(|p| format!("{:#?}", p))
}

fn result_round_trip<T: FromValue + ToValue>(value: &Value) -> Result<Value, ConvertError> {
    T::from_value(value).map(|t| call::result(&t))
}

pub const TYPES: &[TypeBinding] = &[
    TypeBinding {
        name: "arrays.BasicArrayType",
        round_trip: record_round_trip::<arrays::BasicArrayType>,
    },
    TypeBinding {
        name: "arrays.Item",
        round_trip: record_round_trip::<arrays::Item>,
    },
    TypeBinding {
        name: "arrays.RefArrayType",
        round_trip: record_round_trip::<arrays::RefArrayType>,
    },
    TypeBinding {
        name: "arrays.OptionalArrayType",
        round_trip: record_round_trip::<arrays::OptionalArrayType>,
    },
    TypeBinding {
        name: "enums.EnumType",
        round_trip: record_round_trip::<enums::EnumType>,
    },
    TypeBinding {
        name: "enums.OptionalEnumType",
        round_trip: record_round_trip::<enums::OptionalEnumType>,
    },
];

pub const FUNCTIONS: &[FunctionBinding] = &[
    FunctionBinding {
        name: "arrays.integerArray",
        params: Some(describe_params::<arrays::integer_array::Params>),
        result: None,
    },
    FunctionBinding {
        name: "arrays.anyArray",
        params: Some(describe_params::<arrays::any_array::Params>),
        result: None,
    },
    FunctionBinding {
        name: "arrays.refArray",
        params: Some(describe_params::<arrays::ref_array::Params>),
        result: None,
    },
    FunctionBinding {
        name: "arrays.returnIntegerArray",
        params: None,
        result: Some(result_round_trip::<Vec<i64>>),
    },
    FunctionBinding {
        name: "arrays.returnRefArray",
        params: None,
        result: Some(result_round_trip::<Vec<arrays::Item>>),
    },
    FunctionBinding {
        name: "choices.takesIntegers",
        params: Some(describe_params::<choices::takes_integers::Params>),
        result: None,
    },
    FunctionBinding {
        name: "choices.objectWithChoices",
        params: Some(describe_params::<choices::object_with_choices::Params>),
        result: None,
    },
    FunctionBinding {
        name: "choices.returnChoices",
        params: None,
        result: Some(result_round_trip::<choices::Integers>),
    },
    FunctionBinding {
        name: "enums.takesEnum",
        params: Some(describe_params::<enums::takes_enum::Params>),
        result: None,
    },
    FunctionBinding {
        name: "enums.takesOptionalEnum",
        params: Some(describe_params::<enums::takes_optional_enum::Params>),
        result: None,
    },
    FunctionBinding {
        name: "enums.takesMultipleOptionalEnums",
        params: Some(describe_params::<enums::takes_multiple_optional_enums::Params>),
        result: None,
    },
    FunctionBinding {
        name: "enums.returnsEnum",
        params: None,
        result: Some(result_round_trip::<enums::State>),
    },
];

pub fn find_type(name: &str) -> Option<&'static TypeBinding> {
    TYPES.iter().find(|t| t.name == name)
}

pub fn find_function(name: &str) -> Option<&'static FunctionBinding> {
    FUNCTIONS.iter().find(|f| f.name == name)
}
