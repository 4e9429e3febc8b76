//! jsonbind-core: runtime marshaling for schema-generated API bindings.
//!
//! Converts between the generic JSON value tree (`serde_json::Value`) and
//! the strongly typed structs, enums and call bundles that the binding
//! generator emits for each declared type and function.
//!
//! # Public API
//!
//! - [`FromValue`] / [`ToValue`] -- per-type decode and encode strategies
//! - [`array`] -- typed array conversion (`Vec<T>` from a list)
//! - [`Record`] and the [`record`] field helpers -- named-field structs
//! - [`AnyValue`] -- holder for `any`-typed values
//! - [`Params`], [`Args`] and [`call::result`] -- call marshaling
//! - [`StringEnum`] -- string-valued enumerations
//! - [`ConvertError`] -- the decode error type
//!
//! Decoding is fail-fast and never panics on malformed input. Encoding is
//! total.

pub mod any;
pub mod array;
pub mod call;
pub mod convert;
pub mod enumeration;
pub mod error;
pub mod record;
pub mod value;

// ── Convenience re-exports ───────────────────────────────────────────

pub use any::AnyValue;
pub use call::{Args, Params};
pub use convert::{FromValue, ToValue};
pub use enumeration::StringEnum;
pub use error::{ConvertError, FailureKind, PathSegment, ValuePath};
pub use record::Record;
pub use value::{expect_dict, expect_list, ValueKind};

pub use serde_json::{Map, Value};
