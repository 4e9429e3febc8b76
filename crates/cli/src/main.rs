mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::{cmd_params, cmd_populate, cmd_result, cmd_types};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Drive generated JSON schema bindings from the command line.
#[derive(Parser)]
#[command(
    name = "jsonbind",
    version,
    about = "Drive generated JSON schema bindings from the command line"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered type and function
    Types,

    /// Populate a declared type from a JSON dictionary and print it re-encoded
    Populate {
        /// Qualified type name, e.g. arrays.RefArrayType
        type_name: String,
        /// JSON input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Decode a JSON argument list into a function's parameters
    Params {
        /// Qualified function name, e.g. arrays.integerArray
        function: String,
        /// JSON input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Decode a function's JSON return value and print it re-encoded
    Result {
        /// Qualified function name, e.g. arrays.returnRefArray
        function: String,
        /// JSON input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Types => cmd_types(cli.output),
        Commands::Populate { type_name, file } => {
            cmd_populate(&type_name, file.as_deref(), cli.output, cli.quiet);
        }
        Commands::Params { function, file } => {
            cmd_params(&function, file.as_deref(), cli.output, cli.quiet);
        }
        Commands::Result { function, file } => {
            cmd_result(&function, file.as_deref(), cli.output, cli.quiet);
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
