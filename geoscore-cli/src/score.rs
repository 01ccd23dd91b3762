//! Score command implementation for the GeoScore CLI.

use std::fmt;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use geoscore_core::{LocationScorer, ScoreRequest, ScoreResult};
use geoscore_fs::open_utf8_file;
use geoscore_scorer::GeoScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::cache::ScoreCache;
use crate::{
    ARG_ADDRESS, ARG_BUSINESS_TYPE, ARG_CACHE_DB, ARG_MAX_AGE_HOURS, ARG_SCORE_REQUEST, CliError,
    DEFAULT_MAX_AGE_HOURS, ENV_SCORE_REQUEST,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a location from a JSON-encoded ScoreRequest holding \
                 the coordinates, nearby places and transit stations. When a \
                 cache database is configured, a fresh result stored under \
                 the same address for the same coordinates and business \
                 type is returned instead of rescoring.",
    about = "Score a candidate business location"
)]
#[ortho_config(prefix = "GEOSCORE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing a ScoreRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// SQLite database caching earlier results by address.
    #[arg(long = ARG_CACHE_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) cache_db: Option<Utf8PathBuf>,
    /// Address used as the cache key; defaults to the request's address.
    #[arg(long = ARG_ADDRESS, value_name = "text")]
    #[serde(default)]
    pub(crate) address: Option<String>,
    /// Maximum age of a cached result before it is recomputed.
    #[arg(long = ARG_MAX_AGE_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) max_age_hours: Option<u32>,
    /// Business-type key overriding the request's own. Cached results
    /// scored for another business type are not reused.
    #[arg(long = ARG_BUSINESS_TYPE, value_name = "key")]
    #[serde(default)]
    pub(crate) business_type: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional SQLite cache database.
    pub(crate) cache_db: Option<Utf8PathBuf>,
    /// Address overriding the request's own cache key source.
    pub(crate) address: Option<String>,
    /// Oldest cached result still served.
    pub(crate) max_age: Duration,
    /// Business-type override.
    pub(crate) business_type: Option<String>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SCORE_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match geoscore_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_REQUEST,
            env: ENV_SCORE_REQUEST,
        })?;
        let hours = args.max_age_hours.unwrap_or(DEFAULT_MAX_AGE_HOURS);

        Ok(Self {
            request_path,
            cache_db: args.cache_db,
            address: non_blank(args.address),
            max_age: Duration::hours(i64::from(hours)),
            business_type: non_blank(args.business_type),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Where a printed result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoreSource {
    /// A fresh snapshot from the cache.
    Cache,
    /// A newly computed score.
    Scorer,
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cache => "cache",
            Self::Scorer => "scorer",
        })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<ScoreSource, CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, Utc::now(), &mut stdout)
}

pub(super) fn run_score_with(
    args: ScoreArgs,
    now: DateTime<Utc>,
    writer: &mut dyn Write,
) -> Result<ScoreSource, CliError> {
    let config = resolve_score_config(args)?;
    let request = prepare_request(&config)?;
    let address = config
        .address
        .clone()
        .or_else(|| non_blank(request.address.clone()));

    let mut cache = ScoreCache::open(config.cache_db.as_deref(), address.as_deref())?;
    if let Some(cached) = cache.lookup(&request, now, config.max_age)? {
        write_score_result(writer, &cached)?;
        return Ok(ScoreSource::Cache);
    }

    let result = GeoScorer::default()
        .score(&request)
        .map_err(|source| CliError::InvalidScoreRequest {
            path: config.request_path.clone(),
            source,
        })?;
    cache.remember(&request, &result, now)?;
    write_score_result(writer, &result)?;
    Ok(ScoreSource::Scorer)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn prepare_request(config: &ScoreConfig) -> Result<ScoreRequest, CliError> {
    let mut request = load_score_request(&config.request_path)?;
    if let Some(kind) = &config.business_type {
        request.business_type = Some(kind.clone());
    }
    request
        .validate()
        .map_err(|source| CliError::InvalidScoreRequest {
            path: config.request_path.clone(),
            source,
        })?;
    Ok(request)
}

/// Loads a JSON-encoded [`ScoreRequest`] from disk.
pub(super) fn load_score_request(path: &Utf8Path) -> Result<ScoreRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenScoreRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseScoreRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_score_result(writer: &mut dyn Write, result: &ScoreResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerialiseScoreResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteScoreOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteScoreOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
