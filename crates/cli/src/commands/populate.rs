use std::path::Path;

use jsonbind_api::registry;

use super::{print_json, read_json, reject, unknown};
use crate::OutputFormat;

/// Populate `type_name` from the input and print its canonical encoding.
pub(crate) fn cmd_populate(type_name: &str, file: Option<&Path>, output: OutputFormat, quiet: bool) {
    let Some(binding) = registry::find_type(type_name) else {
        unknown("type", type_name, output, quiet);
    };

    let input = read_json(file, output, quiet);
    match (binding.round_trip)(&input) {
        Ok(encoded) => {
            tracing::debug!(type_name, "populated");
            print_json(&encoded);
        }
        Err(e) => reject(&e, output, quiet),
    }
}
