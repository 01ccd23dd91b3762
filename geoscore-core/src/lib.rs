//! Core domain types for the GeoScore engine.
//!
//! The crate defines the inputs a location scorer consumes (coordinates,
//! points of interest, weight tables, business types), the results it
//! produces, the [`LocationScorer`] trait implemented by scoring engines,
//! and the caller-owned [`ScoreStore`] snapshot cache.
//!
//! Constructors that can receive invalid input return `Result` to surface
//! errors early.

pub mod business;
pub mod location;
pub mod poi;
pub mod result;
pub mod scorer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod weights;

pub use business::{
    BusinessType, DEFAULT_COMPETITOR_TAGS, UnknownBusinessType, competitor_tags,
    relevant_competitors,
};
pub use location::{EARTH_RADIUS_METRES, LatLng, LocationError, haversine_distance};
pub use poi::PointOfInterest;
pub use result::{
    CompetitorAnalysis, DetailedAnalysis, FactorScores, HourlyTraffic, Level, Lighting,
    LocationFactors, MarketSaturation, SafetyMetrics, ScoreGrade, ScoreResult, StabilityMetrics,
    WeeklyTrend,
};
pub use scorer::{LocationScorer, ScoreError, ScoreRequest};
pub use store::{CachedLocation, MemoryScoreStore, ScoreStore, location_key};
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteScoreStore, SqliteScoreStoreError};
pub use weights::WeightTable;
