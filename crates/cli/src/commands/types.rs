use jsonbind_api::registry::{FUNCTIONS, TYPES};

use super::print_json;
use crate::OutputFormat;

pub(crate) fn cmd_types(output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            println!("types:");
            for t in TYPES {
                println!("  {}", t.name);
            }
            println!("functions:");
            for f in FUNCTIONS {
                let mut sides = Vec::new();
                if f.params.is_some() {
                    sides.push("params");
                }
                if f.result.is_some() {
                    sides.push("result");
                }
                println!("  {} ({})", f.name, sides.join(", "));
            }
        }
        OutputFormat::Json => {
            let functions: Vec<_> = FUNCTIONS
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name,
                        "params": f.params.is_some(),
                        "result": f.result.is_some(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "types": TYPES.iter().map(|t| t.name).collect::<Vec<_>>(),
                "functions": functions,
            }));
        }
    }
}
