//! Entry point for the `geoscore` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use geoscore_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    match geoscore_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("geoscore: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Send library `log` records and spans to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
