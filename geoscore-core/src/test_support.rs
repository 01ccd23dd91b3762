//! Test-only builders for POIs placed at known distances and for canned
//! results used by store tests.

use std::collections::BTreeMap;

use crate::location::EARTH_RADIUS_METRES;
use crate::{
    CompetitorAnalysis, DetailedAnalysis, FactorScores, LatLng, Level, Lighting, LocationFactors,
    MarketSaturation, PointOfInterest, SafetyMetrics, ScoreGrade, ScoreResult, StabilityMetrics,
};

/// Point reached by travelling `distance_metres` from `origin` along the
/// initial compass `bearing_degrees` on the haversine sphere.
pub fn offset(origin: LatLng, bearing_degrees: f64, distance_metres: f64) -> LatLng {
    let angular = distance_metres / EARTH_RADIUS_METRES;
    let bearing = bearing_degrees.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lng.to_radians();

    let phi2 = (phi1.sin() * angular.cos() + phi1.cos() * angular.sin() * bearing.cos()).asin();
    let lambda2 = lambda1
        + (bearing.sin() * angular.sin() * phi1.cos())
            .atan2(angular.cos() - phi1.sin() * phi2.sin());

    LatLng {
        lat: phi2.to_degrees(),
        lng: lambda2.to_degrees(),
    }
}

/// A POI tagged `types`, placed due north of `origin` at `distance_metres`.
///
/// # Examples
/// ```
/// use geoscore_core::LatLng;
/// use geoscore_core::test_support::poi_at;
///
/// let origin = LatLng { lat: 40.0, lng: -74.0 };
/// let poi = poi_at(origin, 100.0, &["cafe"]);
/// let distance = poi.distance_from(origin).unwrap();
/// assert!((distance - 100.0).abs() < 1e-6);
/// ```
pub fn poi_at(origin: LatLng, distance_metres: f64, types: &[&str]) -> PointOfInterest {
    poi_at_bearing(origin, 0.0, distance_metres, types)
}

/// A POI tagged `types` at `distance_metres` along `bearing_degrees`.
pub fn poi_at_bearing(
    origin: LatLng,
    bearing_degrees: f64,
    distance_metres: f64,
    types: &[&str],
) -> PointOfInterest {
    let name = types.first().copied().unwrap_or("poi");
    PointOfInterest::new(
        name,
        offset(origin, bearing_degrees, distance_metres),
        types.iter().copied(),
    )
}

/// A fixed, internally consistent [`ScoreResult`].
pub fn sample_result() -> ScoreResult {
    ScoreResult {
        score: 64,
        grade: ScoreGrade::Good,
        factors: FactorScores {
            foot_traffic: 55,
            safety: 71,
            competition: 62,
            accessibility: 73,
        },
        detailed_analysis: DetailedAnalysis {
            hourly_traffic: Vec::new(),
            weekly_trends: Vec::new(),
            competitor_analysis: CompetitorAnalysis {
                total: 3,
                density: Level::Low,
                types: BTreeMap::from([("cafe".to_owned(), 2), ("restaurant".to_owned(), 1)]),
                market_saturation: MarketSaturation::Open,
            },
            safety_metrics: SafetyMetrics {
                crime_risk: Level::Low,
                lighting: Lighting::Good,
                surveillance: Level::Medium,
                emergency_services: 1,
            },
            location_factors: LocationFactors {
                restaurants: 1,
                transit: 2,
                ..LocationFactors::default()
            },
            stability_metrics: StabilityMetrics {
                consistency_score: 85,
                data_quality: 12,
                confidence_level: 49,
            },
        },
    }
}
