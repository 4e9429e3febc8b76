use std::path::Path;

use jsonbind_api::registry;

use super::{print_json, read_json, reject, unknown};
use crate::OutputFormat;

/// Decode the input as `function`'s return type and print the value
/// `Result::create` produces for it.
pub(crate) fn cmd_result(function: &str, file: Option<&Path>, output: OutputFormat, quiet: bool) {
    let Some(encode) = registry::find_function(function).and_then(|f| f.result) else {
        unknown("function with a result", function, output, quiet);
    };

    let input = read_json(file, output, quiet);
    match encode(&input) {
        Ok(encoded) => print_json(&encoded),
        Err(e) => reject(&e, output, quiet),
    }
}
