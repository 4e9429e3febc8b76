//! Bindings for the `arrays` namespace.
//!
//! Covers every array shape: arrays of each primitive, arrays of a declared
//! type, arrays of `any`, and array-typed parameters and results.

use jsonbind_core::record::{insert, insert_optional, optional, required};
use jsonbind_core::{ConvertError, FromValue, Map, Record, ToValue, Value};

// ── Types ───────────────────────────────────────────────────────────

/// One array field per primitive type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasicArrayType {
    pub strings: Vec<String>,
    pub booleans: Vec<bool>,
    pub numbers: Vec<f64>,
    pub integers: Vec<i64>,
}

impl Record for BasicArrayType {
    const NAME: &'static str = "BasicArrayType";

    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
        Ok(BasicArrayType {
            strings: required(dict, "strings")?,
            booleans: required(dict, "booleans")?,
            numbers: required(dict, "numbers")?,
            integers: required(dict, "integers")?,
        })
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        insert(&mut dict, "strings", &self.strings);
        insert(&mut dict, "booleans", &self.booleans);
        insert(&mut dict, "numbers", &self.numbers);
        insert(&mut dict, "integers", &self.integers);
        dict
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub val: i64,
}

impl Record for Item {
    const NAME: &'static str = "Item";

    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
        Ok(Item {
            val: required(dict, "val")?,
        })
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        insert(&mut dict, "val", &self.val);
        dict
    }
}

impl FromValue for Item {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        Item::from_dict_value(value)
    }
}

impl ToValue for Item {
    fn to_value(&self) -> Value {
        self.to_dict_value()
    }
}

/// An array of references to [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefArrayType {
    pub refs: Vec<Item>,
}

impl Record for RefArrayType {
    const NAME: &'static str = "RefArrayType";

    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
        Ok(RefArrayType {
            refs: required(dict, "refs")?,
        })
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        insert(&mut dict, "refs", &self.refs);
        dict
    }
}

/// Optional array fields: `None` and `Some(vec![])` are different states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalArrayType {
    pub strings: Option<Vec<String>>,
    pub refs: Option<Vec<Item>>,
}

impl Record for OptionalArrayType {
    const NAME: &'static str = "OptionalArrayType";

    fn populate(dict: &Map<String, Value>) -> Result<Self, ConvertError> {
        Ok(OptionalArrayType {
            strings: optional(dict, "strings")?,
            refs: optional(dict, "refs")?,
        })
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        insert_optional(&mut dict, "strings", &self.strings);
        insert_optional(&mut dict, "refs", &self.refs);
        dict
    }
}

// ── Functions ───────────────────────────────────────────────────────

/// `integerArray(integer[] nums)`
pub mod integer_array {
    use jsonbind_core::{call, Args, ConvertError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub nums: Vec<i64>,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "arrays.integerArray";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                nums: args.required("nums")?,
            })
        }
    }
}

/// `anyArray(any[] anys)`
pub mod any_array {
    use jsonbind_core::{call, AnyValue, Args, ConvertError};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Params {
        pub anys: Vec<AnyValue>,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "arrays.anyArray";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                anys: args.required("anys")?,
            })
        }
    }
}

/// `refArray(Item[] refs)`
pub mod ref_array {
    use super::Item;
    use jsonbind_core::{call, Args, ConvertError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Params {
        pub refs: Vec<Item>,
    }

    impl call::Params for Params {
        const FUNCTION: &'static str = "arrays.refArray";
        const MAX_ARITY: usize = 1;

        fn from_args(args: &mut Args<'_>) -> Result<Self, ConvertError> {
            Ok(Params {
                refs: args.required("refs")?,
            })
        }
    }
}

/// `returnIntegerArray()` returning `integer[]`
pub mod return_integer_array {
    pub mod result {
        use jsonbind_core::{call, Value};

        pub fn create(integers: &[i64]) -> Value {
            call::result(integers)
        }
    }
}

/// `returnRefArray()` returning `Item[]`
pub mod return_ref_array {
    pub mod result {
        use crate::arrays::Item;
        use jsonbind_core::{call, Value};

        pub fn create(refs: &[Item]) -> Value {
            call::result(refs)
        }
    }
}
