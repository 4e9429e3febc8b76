//! jsonbind-api: bindings for the `arrays`, `choices` and `enums` namespaces.
//!
//! Each namespace module holds the records, enums and choice types declared
//! by the schema, and one submodule per function carrying its `Params`
//! bundle and/or `result::create` encoder. [`registry`] indexes all of
//! them by qualified schema name.

pub mod arrays;
pub mod choices;
pub mod enums;
pub mod registry;
