//! Holder for `any`-typed fields, elements and parameters.

use serde_json::{Map, Value};

use crate::convert::{FromValue, ToValue};
use crate::error::ConvertError;
use crate::value::ValueKind;

/// A value of unconstrained type, held as-is.
///
/// Used as the element type of `any`-typed arrays and as the type of
/// `any`-typed fields. The accessors are tag-exact: `as_integer` returns
/// `None` for a double even when it has no fractional part.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyValue(Value);

impl AnyValue {
    pub fn new(value: Value) -> Self {
        AnyValue(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn kind(&self) -> ValueKind {
        ValueKind::of(&self.0)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_boolean(&self) -> Option<bool> {
        self.0.as_bool()
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.kind() {
            ValueKind::Integer => self.0.as_i64(),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self.kind() {
            ValueKind::Double => self.0.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        self.0.as_array().map(Vec::as_slice)
    }

    pub fn as_dict(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Interpret the held value as a concrete type.
    pub fn decode<T: FromValue>(&self) -> Result<T, ConvertError> {
        T::from_value(&self.0)
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        AnyValue(value)
    }
}

impl FromValue for AnyValue {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        Ok(AnyValue(value.clone()))
    }
}

impl ToValue for AnyValue {
    fn to_value(&self) -> Value {
        self.0.clone()
    }
}
