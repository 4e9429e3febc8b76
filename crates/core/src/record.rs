//! Record conversion.
//!
//! A [`Record`] is a struct with a fixed, schema-declared set of named
//! fields. Generated code implements [`Record::populate`] and
//! [`Record::to_dict`] with the field helpers in this module; the blanket
//! behaviour (dictionary shape check, wrapping) lives on the trait.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::convert::{FromValue, ToValue};
use crate::error::ConvertError;
use crate::value::expect_dict;

/// A strongly typed structure decoded from, and encoded to, a dictionary.
pub trait Record: Sized {
    /// Schema name of the type, e.g. `"RefArrayType"`.
    const NAME: &'static str;

    /// Validate `dict` and build the record. Fails on the first field that
    /// is missing or does not decode; no partially built record escapes.
    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError>;

    /// Encode every present field. Absent optional fields emit no key.
    fn to_dict(&self) -> Map<String, Value>;

    /// Decode from a value that must be dictionary-shaped.
    fn from_dict_value(value: &Value) -> Result<Self, ConvertError> {
        expect_dict(value)
            .and_then(Self::populate)
            .inspect_err(|e| tracing::debug!(record = Self::NAME, error = %e, "record rejected"))
    }

    fn to_dict_value(&self) -> Value {
        Value::Object(self.to_dict())
    }
}

// ── Decode helpers ──────────────────────────────────────────────────

/// Look up and decode a required field.
pub fn required<T: FromValue>(dict: &Map<String, Value>, key: &str) -> Result<T, ConvertError> {
    let value = dict
        .get(key)
        .ok_or_else(|| ConvertError::missing_field(key))?;
    T::from_value(value).map_err(|e| e.in_field(key))
}

/// Decode an optional field. Absence is not a failure; a present value
/// must still decode.
pub fn optional<T: FromValue>(
    dict: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, ConvertError> {
    match dict.get(key) {
        None => Ok(None),
        Some(value) => T::from_value(value)
            .map(Some)
            .map_err(|e| e.in_field(key)),
    }
}

/// Collect every key not in `declared` into a typed map.
pub fn additional<T: FromValue>(
    dict: &Map<String, Value>,
    declared: &[&str],
) -> Result<BTreeMap<String, T>, ConvertError> {
    dict.iter()
        .filter(|(k, _)| !declared.contains(&k.as_str()))
        .map(|(k, v)| {
            T::from_value(v)
                .map(|t| (k.clone(), t))
                .map_err(|e| e.in_field(k))
        })
        .collect()
}

// ── Encode helpers ──────────────────────────────────────────────────

pub fn insert<T: ToValue + ?Sized>(dict: &mut Map<String, Value>, key: &str, value: &T) {
    dict.insert(key.to_owned(), value.to_value());
}

/// Insert `value` only when it is present.
pub fn insert_optional<T: ToValue>(dict: &mut Map<String, Value>, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        insert(dict, key, v);
    }
}

/// Merge an additional-properties map back into the dictionary.
pub fn insert_additional<T: ToValue>(dict: &mut Map<String, Value>, extra: &BTreeMap<String, T>) {
    for (k, v) in extra {
        insert(dict, k, v);
    }
}
