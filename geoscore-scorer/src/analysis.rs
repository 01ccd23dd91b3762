//! Descriptive report built alongside the score.
//!
//! Nothing here feeds back into the composite score. The hourly and weekly
//! series are illustrative curves shaped by fixed multipliers and jittered
//! from the `"hourly"` and `"weekly"` streams.

use std::collections::BTreeMap;

use geoscore_core::{
    CompetitorAnalysis, DetailedAnalysis, FactorScores, HourlyTraffic, LatLng, Level, Lighting,
    LocationFactors, MarketSaturation, PointOfInterest, SafetyMetrics, StabilityMetrics,
    WeeklyTrend,
};

use crate::numeric::to_count;
use crate::rng::StableRng;

/// PRNG stream tag for the hourly series.
pub const HOURLY_TAG: &str = "hourly";
/// PRNG stream tag for the weekly series.
pub const WEEKLY_TAG: &str = "weekly";

const EMERGENCY_TAGS: &[&str] = &["hospital", "police", "fire_station"];
const HEALTHCARE_TAGS: &[&str] = &["hospital", "pharmacy", "doctor"];
const EDUCATION_TAGS: &[&str] = &["school", "university"];
const SHOPPING_TAGS: &[&str] = &["shopping_mall", "store"];
const ENTERTAINMENT_TAGS: &[&str] = &["movie_theater", "amusement_park", "casino"];
const UNTYPED_COMPETITOR: &str = "other";

const WEEKDAYS: [(&str, f64); 7] = [
    ("Mon", 0.9),
    ("Tue", 1.0),
    ("Wed", 1.0),
    ("Thu", 1.0),
    ("Fri", 1.1),
    ("Sat", 1.2),
    ("Sun", 0.85),
];

/// Inputs shared by every part of the report.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInputs<'a> {
    /// Location being evaluated.
    pub origin: LatLng,
    /// All nearby places.
    pub nearby: &'a [PointOfInterest],
    /// Nearby transit stations.
    pub transit_stations: &'a [PointOfInterest],
    /// Nearby places that compete with the business.
    pub competitors: &'a [PointOfInterest],
    /// Factor scores already computed for the location.
    pub factors: FactorScores,
    /// Stability metrics already computed for the location.
    pub stability: StabilityMetrics,
}

/// Assemble the full descriptive report.
#[must_use]
pub fn detailed_analysis(inputs: AnalysisInputs<'_>) -> DetailedAnalysis {
    let AnalysisInputs {
        origin,
        nearby,
        transit_stations,
        competitors,
        factors,
        stability,
    } = inputs;
    DetailedAnalysis {
        hourly_traffic: hourly_series(origin, factors.foot_traffic),
        weekly_trends: weekly_series(origin, factors.foot_traffic),
        competitor_analysis: competitor_analysis(competitors),
        safety_metrics: safety_metrics(factors.safety, nearby, transit_stations),
        location_factors: location_factors(nearby, transit_stations),
        stability_metrics: stability,
    }
}

/// Bucket the competitor set and histogram it by primary tag.
///
/// # Examples
/// ```
/// use geoscore_core::{Level, MarketSaturation, PointOfInterest};
/// use geoscore_scorer::competitor_analysis;
///
/// let rivals = vec![
///     PointOfInterest::unlocated("A", ["cafe", "food"]),
///     PointOfInterest::unlocated("B", ["cafe"]),
///     PointOfInterest::unlocated("C", Vec::<String>::new()),
/// ];
/// let analysis = competitor_analysis(&rivals);
/// assert_eq!(analysis.total, 3);
/// assert_eq!(analysis.density, Level::Low);
/// assert_eq!(analysis.market_saturation, MarketSaturation::Open);
/// assert_eq!(analysis.types.get("cafe"), Some(&2));
/// assert_eq!(analysis.types.get("other"), Some(&1));
/// ```
#[must_use]
pub fn competitor_analysis(competitors: &[PointOfInterest]) -> CompetitorAnalysis {
    let total = competitors.len();
    let mut types = BTreeMap::new();
    for poi in competitors {
        let tag = poi.primary_type().unwrap_or(UNTYPED_COMPETITOR);
        *types.entry(tag.to_owned()).or_insert(0) += 1;
    }
    CompetitorAnalysis {
        total,
        density: competitor_density(total),
        types,
        market_saturation: market_saturation(total),
    }
}

const fn competitor_density(total: usize) -> Level {
    if total > 15 {
        Level::High
    } else if total > 8 {
        Level::Medium
    } else {
        Level::Low
    }
}

const fn market_saturation(total: usize) -> MarketSaturation {
    if total > 20 {
        MarketSaturation::Saturated
    } else if total > 10 {
        MarketSaturation::Competitive
    } else {
        MarketSaturation::Open
    }
}

/// Safety qualifiers from the safety factor, transit and emergency services.
#[must_use]
pub fn safety_metrics(
    safety: u8,
    nearby: &[PointOfInterest],
    transit_stations: &[PointOfInterest],
) -> SafetyMetrics {
    let crime_risk = if safety < 40 {
        Level::High
    } else if safety < 70 {
        Level::Medium
    } else {
        Level::Low
    };
    let lighting = if safety > 80 {
        Lighting::Excellent
    } else if safety > 60 {
        Lighting::Good
    } else {
        Lighting::Poor
    };
    let surveillance = match transit_stations.len() {
        0 | 1 => Level::Low,
        2 | 3 => Level::Medium,
        _ => Level::High,
    };
    SafetyMetrics {
        crime_risk,
        lighting,
        surveillance,
        emergency_services: count_tagged(nearby, EMERGENCY_TAGS),
    }
}

/// Count nearby places per broad category.
#[must_use]
pub fn location_factors(
    nearby: &[PointOfInterest],
    transit_stations: &[PointOfInterest],
) -> LocationFactors {
    LocationFactors {
        restaurants: count_tagged(nearby, &["restaurant"]),
        transit: transit_stations.len(),
        healthcare: count_tagged(nearby, HEALTHCARE_TAGS),
        education: count_tagged(nearby, EDUCATION_TAGS),
        shopping: count_tagged(nearby, SHOPPING_TAGS),
        entertainment: count_tagged(nearby, ENTERTAINMENT_TAGS),
    }
}

fn count_tagged(pois: &[PointOfInterest], tags: &[&str]) -> usize {
    pois.iter().filter(|poi| poi.has_any_type(tags)).count()
}

const fn hour_multiplier(hour: u8) -> f64 {
    match hour {
        0..=5 => 0.3,
        6..=9 => 0.7,
        10..=16 => 0.9,
        17..=20 => 1.0,
        _ => 0.6,
    }
}

const fn is_night(hour: u8) -> bool {
    hour >= 22 || hour <= 5
}

/// Synthetic 24-hour curve scaled from the foot-traffic factor.
///
/// Each hour draws pedestrians, vehicles and safety jitter in that order
/// from the `"hourly"` stream.
///
/// # Examples
/// ```
/// use geoscore_core::LatLng;
/// use geoscore_scorer::hourly_series;
///
/// let series = hourly_series(LatLng { lat: 40.0, lng: -74.0 }, 60);
/// assert_eq!(series.len(), 24);
/// assert_eq!(series[0].hour, "00:00");
/// assert_eq!(series[23].hour, "23:00");
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "curves scale the base factor")]
pub fn hourly_series(origin: LatLng, foot_traffic: u8) -> Vec<HourlyTraffic> {
    let base = f64::from(foot_traffic);
    let mut rng = StableRng::new(origin.lat, origin.lng, HOURLY_TAG);
    (0..24_u8)
        .map(|hour| {
            let multiplier = hour_multiplier(hour);
            let pedestrians = to_count(base * multiplier + rng.jitter(12.0), 5);
            let vehicles = to_count(base * 0.8 * multiplier + rng.jitter(10.0), 2);
            let night_penalty = if is_night(hour) { 15.0 } else { 0.0 };
            let safety = to_count(85.0 - night_penalty + rng.jitter(8.0), 30);
            HourlyTraffic {
                hour: format!("{hour:02}:00"),
                pedestrians,
                vehicles,
                safety,
            }
        })
        .collect()
}

/// Synthetic Monday-to-Sunday trend scaled from the foot-traffic factor.
///
/// Each day draws traffic, sales and competition jitter in that order from
/// the `"weekly"` stream.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "curves scale the base factor")]
pub fn weekly_series(origin: LatLng, foot_traffic: u8) -> Vec<WeeklyTrend> {
    let base = f64::from(foot_traffic);
    let mut rng = StableRng::new(origin.lat, origin.lng, WEEKLY_TAG);
    WEEKDAYS
        .iter()
        .map(|&(day, multiplier)| WeeklyTrend {
            day: day.to_owned(),
            traffic: to_count(base * multiplier + rng.jitter(6.0), 10),
            sales: to_count(base * multiplier * 0.7 + rng.jitter(5.0), 5),
            competition: to_count(70.0 + rng.jitter(15.0), 20),
        })
        .collect()
}
