//! Error types emitted by the GeoScore CLI.
//!
//! Keep this error type reasonably small, as most CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use geoscore_core::ScoreError;
use thiserror::Error;

/// Errors emitted by the GeoScore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that was disabled at build time.
        feature: &'static str,
        /// Operation that needed it.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the score request file failed.
    #[error("failed to open score request at {path:?}: {source}")]
    OpenScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Score request JSON could not be decoded.
    #[error("failed to parse score request JSON at {path:?}: {source}")]
    ParseScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The score request payload failed validation.
    #[error("score request in {path:?} failed validation: {source}")]
    InvalidScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: ScoreError,
    },
    /// The directory holding the score cache could not be created.
    #[error("failed to prepare cache directory for {path:?}: {source}")]
    PrepareCacheDir {
        /// Cache database path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the score cache failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to open score cache at {path:?}: {source}")]
    OpenScoreCache {
        /// Cache database path.
        path: Utf8PathBuf,
        /// Store failure.
        #[source]
        source: geoscore_core::SqliteScoreStoreError,
    },
    /// Reading a cached score failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to read score cache at {path:?}: {source}")]
    ReadScoreCache {
        /// Cache database path.
        path: Utf8PathBuf,
        /// Store failure.
        #[source]
        source: geoscore_core::SqliteScoreStoreError,
    },
    /// Writing a computed score to the cache failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to write score cache at {path:?}: {source}")]
    WriteScoreCache {
        /// Cache database path.
        path: Utf8PathBuf,
        /// Store failure.
        #[source]
        source: geoscore_core::SqliteScoreStoreError,
    },
    /// Serialising the score result failed.
    #[error("failed to serialise score result: {0}")]
    SerialiseScoreResult(#[source] serde_json::Error),
    /// Writing the score output failed.
    #[error("failed to write score output: {0}")]
    WriteScoreOutput(#[source] std::io::Error),
}
