//! Command-line interface for scoring candidate business locations.
//!
//! The `score` subcommand reads a JSON `ScoreRequest`, optionally consults
//! a SQLite cache of earlier results keyed by address, and writes the
//! `ScoreResult` JSON to stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod cache;
mod error;
mod score;

pub use error::CliError;
use score::{ScoreArgs, run_score};
#[cfg(test)]
use score::{
    ScoreConfig, ScoreSource, config_from_layers_for_test, load_score_request, run_score_with,
};

pub(crate) const ARG_SCORE_REQUEST: &str = "request";
pub(crate) const ENV_SCORE_REQUEST: &str = "GEOSCORE_CMDS_SCORE_REQUEST_PATH";
pub(crate) const ARG_CACHE_DB: &str = "cache-db";
pub(crate) const ARG_ADDRESS: &str = "address";
pub(crate) const ARG_MAX_AGE_HOURS: &str = "max-age-hours";
pub(crate) const ARG_BUSINESS_TYPE: &str = "business-type";
pub(crate) const DEFAULT_MAX_AGE_HOURS: u32 = 24;

/// Run the GeoScore CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => {
            let source = run_score(args)?;
            log::debug!("score served from {source}");
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "geoscore",
    about = "Score candidate business locations from nearby places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a location described by a JSON request.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
