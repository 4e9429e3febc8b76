mod params;
mod populate;
mod result;
mod types;

pub(crate) use params::cmd_params;
pub(crate) use populate::cmd_populate;
pub(crate) use result::cmd_result;
pub(crate) use types::cmd_types;

use std::io::Read;
use std::path::Path;
use std::process;

use jsonbind_core::{ConvertError, Value};

use crate::OutputFormat;

/// Exit code for input that was read but rejected by a binding.
pub(crate) const EXIT_REJECTED: i32 = 1;
/// Exit code for an unknown type or function name.
pub(crate) const EXIT_USAGE: i32 = 2;

/// Read and parse JSON from `file`, or from stdin when `file` is `None`.
/// Exits with [`EXIT_REJECTED`] on I/O or parse failure.
pub(crate) fn read_json(file: Option<&Path>, output: OutputFormat, quiet: bool) -> Value {
    let (source, text) = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            match std::fs::read_to_string(path) {
                Ok(s) => (path.display().to_string(), s),
                Err(e) => {
                    let msg = format!("error reading file '{}': {}", path.display(), e);
                    report_error(&msg, output, quiet);
                    process::exit(EXIT_REJECTED);
                }
            }
        }
        None => {
            let mut s = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut s) {
                report_error(&format!("error reading stdin: {}", e), output, quiet);
                process::exit(EXIT_REJECTED);
            }
            ("<stdin>".to_string(), s)
        }
    };

    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error parsing JSON in '{}': {}", source, e);
            report_error(&msg, output, quiet);
            process::exit(EXIT_REJECTED);
        }
    }
}

/// Print a JSON value to stdout, pretty in both output modes.
pub(crate) fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("error serializing output: {}", e),
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Report a rejected conversion and exit with [`EXIT_REJECTED`].
pub(crate) fn reject(err: &ConvertError, output: OutputFormat, quiet: bool) -> ! {
    if !quiet {
        match output {
            OutputFormat::Text => eprintln!("error: {}", err),
            OutputFormat::Json => eprintln!("{}", err.to_json_value()),
        }
    }
    process::exit(EXIT_REJECTED);
}

/// Report an unknown name and exit with [`EXIT_USAGE`].
pub(crate) fn unknown(what: &str, name: &str, output: OutputFormat, quiet: bool) -> ! {
    let msg = format!("unknown {} '{}' (run `jsonbind types` to list them)", what, name);
    report_error(&msg, output, quiet);
    process::exit(EXIT_USAGE);
}
