//! Facade crate for the GeoScore location scoring engine.
//!
//! This crate re-exports the core domain types and the default scorer, and
//! exposes the SQLite score cache behind the `store-sqlite` feature.

#![forbid(unsafe_code)]

pub use geoscore_core::{
    BusinessType, CachedLocation, DetailedAnalysis, FactorScores, LatLng, LocationError,
    LocationScorer, MemoryScoreStore, PointOfInterest, ScoreError, ScoreGrade, ScoreRequest,
    ScoreResult, ScoreStore, StabilityMetrics, WeightTable, location_key, relevant_competitors,
};

#[cfg(feature = "store-sqlite")]
pub use geoscore_core::{SqliteScoreStore, SqliteScoreStoreError};

pub use geoscore_scorer::{CompositeWeights, CompositeWeightsError, GeoScorer, score_location};
