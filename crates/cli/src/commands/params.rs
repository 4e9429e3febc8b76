use std::path::Path;

use jsonbind_api::registry;
use jsonbind_core::{expect_list, Value};

use super::{print_json, read_json, reject, unknown};
use crate::OutputFormat;

/// Decode the input argument list into `function`'s parameter bundle.
pub(crate) fn cmd_params(function: &str, file: Option<&Path>, output: OutputFormat, quiet: bool) {
    let Some(create) = registry::find_function(function).and_then(|f| f.params) else {
        unknown("function with parameters", function, output, quiet);
    };

    let input = read_json(file, output, quiet);
    let args = match expect_list(&input) {
        Ok(args) => args,
        Err(e) => reject(&e, output, quiet),
    };

    match create(args) {
        Ok(described) => match output {
            OutputFormat::Text => println!("{}", described),
            OutputFormat::Json => print_json(&serde_json::json!({
                "function": function,
                "arguments": Value::Array(args.to_vec()),
                "description": described,
            })),
        },
        Err(e) => reject(&e, output, quiet),
    }
}
