//! Typed array conversion.
//!
//! Converts between an ordered list of values and a `Vec<T>` for any element
//! type with a conversion strategy: scalars, records, enums, choices,
//! [`AnyValue`](crate::AnyValue), or nested arrays.

use serde_json::Value;

use crate::convert::{FromValue, ToValue};
use crate::error::ConvertError;
use crate::value::expect_list;

/// Decode every element of an already list-shaped value.
///
/// Stops at the first element that fails; the error path names its index.
/// On success the result has exactly `list.len()` elements in source order.
pub fn decode<T: FromValue>(list: &[Value]) -> Result<Vec<T>, ConvertError> {
    let mut out = Vec::with_capacity(list.len());
    for (index, item) in list.iter().enumerate() {
        match T::from_value(item) {
            Ok(element) => out.push(element),
            Err(e) => {
                tracing::trace!(index, error = %e, "array element rejected");
                return Err(e.at_index(index));
            }
        }
    }
    Ok(out)
}

/// Encode every element, preserving order.
pub fn encode<T: ToValue>(items: &[T]) -> Vec<Value> {
    items.iter().map(ToValue::to_value).collect()
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        decode(expect_list(value)?)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(encode(self))
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Array(encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnyValue;
    use crate::ValueKind;
    use serde_json::json;

    #[test]
    fn decode_preserves_order_and_length() {
        let v = json!([3, 1, 2]);
        let nums: Vec<i64> = Vec::from_value(&v).unwrap();
        assert_eq!(nums, vec![3, 1, 2]);
        assert_eq!(nums.to_value(), v);
    }

    #[test]
    fn decode_fails_fast_on_first_bad_element() {
        let err = decode::<i64>(&[json!(1), json!(2), json!("not-an-int"), json!(true)])
            .unwrap_err();
        assert_eq!(err.to_string(), "$[2]: expected integer, found string");
    }

    #[test]
    fn empty_list_decodes_to_empty_vec() {
        let nums: Vec<String> = Vec::from_value(&json!([])).unwrap();
        assert!(nums.is_empty());
    }

    #[test]
    fn non_list_is_rejected() {
        let err = Vec::<i64>::from_value(&json!({"0": 1})).unwrap_err();
        assert_eq!(err.to_string(), "$: expected list, found dictionary");
    }

    #[test]
    fn no_numeric_widening_in_double_arrays() {
        assert!(Vec::<f64>::from_value(&json!([1.5, 2])).is_err());
        assert_eq!(Vec::<f64>::from_value(&json!([1.5, 2.0])).unwrap(), vec![1.5, 2.0]);
    }

    #[test]
    fn any_array_accepts_every_kind() {
        let v = json!([1, "test", {"val": 2}, null, [true]]);
        let anys: Vec<AnyValue> = Vec::from_value(&v).unwrap();
        assert_eq!(anys.len(), 5);
        assert_eq!(anys[0].as_integer(), Some(1));
        assert_eq!(anys[3].kind(), ValueKind::Null);
        assert_eq!(anys.to_value(), v);
    }

    #[test]
    fn nested_arrays_report_both_indices() {
        let v = json!([[1, 2], [3, "x"]]);
        let err = Vec::<Vec<i64>>::from_value(&v).unwrap_err();
        assert_eq!(err.to_string(), "$[1][1]: expected integer, found string");

        let ok: Vec<Vec<i64>> = Vec::from_value(&json!([[1], [], [2, 3]])).unwrap();
        assert_eq!(ok, vec![vec![1], vec![], vec![2, 3]]);
    }

    #[test]
    fn slice_encodes_as_list() {
        let items: &[bool] = &[true, false];
        assert_eq!(items.to_value(), json!([true, false]));
    }
}
