//! The default location scorer.

use geoscore_core::{
    FactorScores, LatLng, LocationScorer, PointOfInterest, ScoreError, ScoreGrade, ScoreRequest,
    ScoreResult, relevant_competitors,
};

use crate::analysis::{AnalysisInputs, detailed_analysis};
use crate::composite::{CompositeWeights, stability_metrics};
use crate::error::CompositeWeightsError;
use crate::factors::{accessibility_score, competition_score, foot_traffic_score, safety_score};

/// Scores a location from nearby places, transit and competitors.
///
/// The scorer holds only its composite weights, so it is cheap to clone and
/// safe to share across threads.
///
/// # Examples
/// ```
/// use geoscore_core::{LatLng, LocationScorer, ScoreRequest};
/// use geoscore_scorer::GeoScorer;
///
/// let scorer = GeoScorer::default();
/// let request = ScoreRequest::new(LatLng { lat: 40.0, lng: -74.0 });
/// let result = scorer.score(&request).expect("valid coordinates");
/// assert_eq!(result.factors.foot_traffic, 10);
/// assert_eq!(result.factors.accessibility, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoScorer {
    weights: CompositeWeights,
}

impl GeoScorer {
    /// Construct a scorer with custom composite weights.
    ///
    /// # Errors
    /// Returns [`CompositeWeightsError`] when the weights are not finite, are
    /// negative, or do not sum to one.
    pub fn with_weights(weights: CompositeWeights) -> Result<Self, CompositeWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Composite weights used by this scorer.
    #[must_use]
    pub const fn weights(&self) -> CompositeWeights {
        self.weights
    }

    /// Score a location whose competitor set has already been narrowed.
    ///
    /// [`LocationScorer::score`] derives `competitors` from the request's
    /// business type; this entry point lets callers supply their own set.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidInput`] when `origin` is not a valid
    /// coordinate pair.
    pub fn score_with_competitors(
        &self,
        origin: LatLng,
        nearby: &[PointOfInterest],
        transit_stations: &[PointOfInterest],
        competitors: &[PointOfInterest],
    ) -> Result<ScoreResult, ScoreError> {
        origin.validate().map_err(ScoreError::InvalidInput)?;
        log::debug!(
            "scoring {:.6}, {:.6}: {} nearby, {} transit, {} competitors",
            origin.lat,
            origin.lng,
            nearby.len(),
            transit_stations.len(),
            competitors.len()
        );

        let factors = FactorScores {
            foot_traffic: foot_traffic_score(origin, nearby),
            safety: safety_score(origin, nearby),
            competition: competition_score(origin, competitors),
            accessibility: accessibility_score(transit_stations),
        };
        let score = self.weights.blend(&factors);
        let stability = stability_metrics(&factors, nearby.len());
        log::info!(
            "scored {:.6}, {:.6}: {score} (consistency {})",
            origin.lat,
            origin.lng,
            stability.consistency_score
        );

        Ok(ScoreResult {
            score,
            grade: ScoreGrade::from_score(score),
            factors,
            detailed_analysis: detailed_analysis(AnalysisInputs {
                origin,
                nearby,
                transit_stations,
                competitors,
                factors,
                stability,
            }),
        })
    }
}

impl LocationScorer for GeoScorer {
    fn score(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreError> {
        request.validate()?;
        let competitors =
            relevant_competitors(&request.nearby_places, request.business_type.as_deref());
        self.score_with_competitors(
            request.coordinates,
            &request.nearby_places,
            &request.transit_stations,
            &competitors,
        )
    }
}

/// Score a location with the default weights.
///
/// `business_type` selects which nearby places count as competitors; unknown
/// or absent keys fall back to a broad retail and dining set.
///
/// # Errors
/// Returns [`ScoreError::InvalidInput`] when `coordinates` is not a valid
/// coordinate pair.
///
/// # Examples
/// ```
/// use geoscore_core::LatLng;
/// use geoscore_scorer::score_location;
///
/// let origin = LatLng { lat: 40.0, lng: -74.0 };
/// let first = score_location(origin, &[], &[], None).expect("valid coordinates");
/// let second = score_location(origin, &[], &[], None).expect("valid coordinates");
/// assert_eq!(first, second);
/// ```
pub fn score_location(
    coordinates: LatLng,
    nearby: &[PointOfInterest],
    transit_stations: &[PointOfInterest],
    business_type: Option<&str>,
) -> Result<ScoreResult, ScoreError> {
    let competitors = relevant_competitors(nearby, business_type);
    GeoScorer::default().score_with_competitors(coordinates, nearby, transit_stations, &competitors)
}
