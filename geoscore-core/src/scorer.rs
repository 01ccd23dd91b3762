//! Score a candidate business location.
//!
//! The `LocationScorer` trait turns a [`ScoreRequest`] (coordinates plus the
//! nearby places and transit stations already fetched by the caller) into a
//! [`ScoreResult`](crate::ScoreResult).

use thiserror::Error;

use crate::{LatLng, LocationError, PointOfInterest, ScoreResult};

/// Inputs for a scoring call.
///
/// The request carries data that has already been collected; scorers perform
/// no I/O of their own.
///
/// # Examples
/// ```rust
/// use geoscore_core::{LatLng, ScoreRequest};
///
/// let request = ScoreRequest::new(LatLng { lat: 40.0, lng: -74.0 })
///     .with_business_type("retail");
/// assert!(request.validate().is_ok());
/// assert_eq!(request.business_type.as_deref(), Some("retail"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreRequest {
    /// Location being evaluated.
    pub coordinates: LatLng,
    /// Places within the search radius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nearby_places: Vec<PointOfInterest>,
    /// Transit stations within the search radius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub transit_stations: Vec<PointOfInterest>,
    /// Business-type key used to select relevant competitors.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub business_type: Option<String>,
    /// Free-text address the coordinates were resolved from.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub address: Option<String>,
}

impl ScoreRequest {
    /// Construct a request with no nearby data.
    pub const fn new(coordinates: LatLng) -> Self {
        Self {
            coordinates,
            nearby_places: Vec::new(),
            transit_stations: Vec::new(),
            business_type: None,
            address: None,
        }
    }

    /// Replace the nearby places.
    #[must_use]
    pub fn with_nearby_places(mut self, pois: Vec<PointOfInterest>) -> Self {
        self.nearby_places = pois;
        self
    }

    /// Replace the transit stations.
    #[must_use]
    pub fn with_transit_stations(mut self, stations: Vec<PointOfInterest>) -> Self {
        self.transit_stations = stations;
        self
    }

    /// Set the business-type key.
    #[must_use]
    pub fn with_business_type(mut self, key: impl Into<String>) -> Self {
        self.business_type = Some(key.into());
        self
    }

    /// Set the source address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Check the request before scoring.
    ///
    /// Only the coordinates can be invalid. Empty lists, unlocated POIs and
    /// unknown tags are all accepted.
    pub fn validate(&self) -> Result<(), ScoreError> {
        self.coordinates.validate().map_err(ScoreError::InvalidInput)
    }
}

/// Errors returned by [`LocationScorer::score`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// The request coordinates were NaN, infinite, or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(#[source] LocationError),
}

/// Compute a GeoScore for a request.
///
/// Implementations must be deterministic: identical requests produce
/// identical results. They must be `Send + Sync` so callers can score many
/// locations in parallel.
pub trait LocationScorer: Send + Sync {
    /// Score `request`, failing only on invalid coordinates.
    fn score(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreError>;
}
