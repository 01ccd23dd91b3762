//! The four factor scorers.
//!
//! Each scorer is a pure function of its inputs. Jittered factors draw a
//! single value from their own [`StableRng`] stream so that adding or
//! removing one factor never shifts the others.

use std::collections::BTreeSet;

use geoscore_core::{LatLng, PointOfInterest};

use crate::numeric::{count_to_f64, to_score};
use crate::proximity::proximity_score;
use crate::rng::StableRng;
use crate::tables::{
    ACCESSIBILITY_BOUNDS, COMPETITION_BOUNDS, COMPETITION_ZONES, FOOT_TRAFFIC_BOUNDS, FactorBounds,
    HIGH_TRAFFIC_TAGS, RISK_RADIUS_METRES, RISK_TABLE, SAFETY_BOUNDS, SAFETY_RADIUS_METRES,
    SAFETY_TABLE, TRAFFIC_RADIUS_METRES, TRAFFIC_TABLE, TRANSIT_TAGS,
};

/// PRNG stream tag for foot-traffic jitter.
pub const TRAFFIC_TAG: &str = "traffic";
/// PRNG stream tag for safety jitter.
pub const SAFETY_TAG: &str = "safety";
/// PRNG stream tag for competition jitter.
pub const COMPETITION_TAG: &str = "competition";

const DENSITY_BONUS_PER_PLACE: f64 = 3.0;
const DENSITY_BONUS_CAP: f64 = 20.0;
const SAFETY_BASELINE: f64 = 70.0;
const SAFETY_POSITIVE_SCALE: f64 = 0.3;
const SAFETY_RISK_SCALE: f64 = 0.2;
const COMPETITION_BASELINE: f64 = 90.0;
const COMPETITION_FLOOR: f64 = 20.0;
const COMPETITION_PRESSURE_SCALE: f64 = 8.0;
const ACCESSIBILITY_BASELINE: f64 = 30.0;
const ACCESSIBILITY_LOG_SCALE: f64 = 20.0;
const ACCESSIBILITY_BASE_CAP: f64 = 90.0;
const VARIETY_BONUS_PER_TAG: f64 = 5.0;

impl FactorBounds {
    fn settle(self, value: f64, rng: Option<&mut StableRng>) -> u8 {
        let jitter = rng.map_or(0.0, |stream| stream.jitter(self.jitter));
        to_score(add(value, jitter).clamp(self.floor, self.ceiling))
    }
}

#[expect(clippy::float_arithmetic, reason = "jitter is additive")]
fn add(value: f64, offset: f64) -> f64 {
    value + offset
}

/// Score pedestrian activity around `origin`, in `10..=95`.
///
/// Combines the traffic-weighted proximity average within 800 m with a
/// density bonus of 3 per mall, transit station or restaurant (capped at
/// 20), then adds ±5 of jitter from the `"traffic"` stream.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "density bonus is scaled by count")]
pub fn foot_traffic_score(origin: LatLng, nearby: &[PointOfInterest]) -> u8 {
    let base = proximity_score(origin, nearby, &TRAFFIC_TABLE, TRAFFIC_RADIUS_METRES);
    let attractors = nearby
        .iter()
        .filter(|poi| poi.has_any_type(HIGH_TRAFFIC_TAGS))
        .count();
    let density_bonus = (count_to_f64(attractors) * DENSITY_BONUS_PER_PLACE).min(DENSITY_BONUS_CAP);

    let mut rng = StableRng::new(origin.lat, origin.lng, TRAFFIC_TAG);
    let score = FOOT_TRAFFIC_BOUNDS.settle(base + density_bonus, Some(&mut rng));
    log::debug!(
        "foot traffic: base={base:.1} density={density_bonus} attractors={attractors} final={score}"
    );
    score
}

/// Score perceived safety around `origin`, in `20..=95`.
///
/// Starts from a neutral 70, adds 0.3 of the safety-services proximity
/// average within 1000 m, subtracts 0.2 of the nightlife risk average within
/// 500 m, then adds ±3 of jitter from the `"safety"` stream. Risk places are
/// weighted by severity, so a night club outweighs a bar.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "linear blend of proximity averages")]
pub fn safety_score(origin: LatLng, nearby: &[PointOfInterest]) -> u8 {
    let positive = proximity_score(origin, nearby, &SAFETY_TABLE, SAFETY_RADIUS_METRES);
    let risk = proximity_score(origin, nearby, &RISK_TABLE, RISK_RADIUS_METRES).abs();
    let adjusted = SAFETY_BASELINE + positive * SAFETY_POSITIVE_SCALE - risk * SAFETY_RISK_SCALE;

    let mut rng = StableRng::new(origin.lat, origin.lng, SAFETY_TAG);
    let score = SAFETY_BOUNDS.settle(adjusted, Some(&mut rng));
    log::debug!("safety: positive={positive:.1} risk={risk:.1} final={score}");
    score
}

/// Weighted count of competitors across the overlapping 200 m, 500 m and
/// 1000 m zones. Competitors without a location are skipped.
///
/// # Examples
/// ```
/// use geoscore_core::LatLng;
/// use geoscore_core::test_support::poi_at;
/// use geoscore_scorer::competition_pressure;
///
/// let origin = LatLng { lat: 0.0, lng: 0.0 };
/// let close = poi_at(origin, 150.0, &["store"]);
/// assert!((competition_pressure(origin, &[close]) - 2.1).abs() < 1e-9);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "zone counts are weighted")]
pub fn competition_pressure(origin: LatLng, competitors: &[PointOfInterest]) -> f64 {
    let distances: Vec<f64> = competitors
        .iter()
        .filter_map(|poi| poi.distance_from(origin))
        .collect();
    COMPETITION_ZONES
        .iter()
        .map(|&(radius, weight)| {
            let inside = distances.iter().filter(|&&d| d <= radius).count();
            count_to_f64(inside) * weight
        })
        .sum()
}

/// Score competitive headroom around `origin`, in `15..=95`.
///
/// `competitors` must already be narrowed to the businesses that compete
/// with the one being evaluated. With no pressure the base is 90; otherwise
/// each unit of pressure costs 8 points down to a base of 20. ±4 of jitter
/// comes from the `"competition"` stream.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "pressure is scaled into points")]
pub fn competition_score(origin: LatLng, competitors: &[PointOfInterest]) -> u8 {
    let pressure = competition_pressure(origin, competitors);
    let base = if pressure > 0.0 {
        (COMPETITION_BASELINE - pressure * COMPETITION_PRESSURE_SCALE).max(COMPETITION_FLOOR)
    } else {
        COMPETITION_BASELINE
    };

    let mut rng = StableRng::new(origin.lat, origin.lng, COMPETITION_TAG);
    let score = COMPETITION_BOUNDS.settle(base, Some(&mut rng));
    log::debug!(
        "competition: count={} pressure={pressure:.1} final={score}",
        competitors.len()
    );
    score
}

/// Score transit access from the stations found nearby, in `15..=95`.
///
/// Logarithmic in station count (`30 + 20 * ln(n + 1)`, capped at 90) plus 5
/// for each distinct kind of transit tag present. This factor carries no
/// jitter.
///
/// # Examples
/// ```
/// use geoscore_core::PointOfInterest;
/// use geoscore_scorer::accessibility_score;
///
/// assert_eq!(accessibility_score(&[]), 30);
/// let bus = PointOfInterest::unlocated("Stop", ["bus_station"]);
/// assert_eq!(accessibility_score(&[bus]), 49);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "logarithmic count scaling")]
pub fn accessibility_score(transit_stations: &[PointOfInterest]) -> u8 {
    let count = count_to_f64(transit_stations.len());
    let base = (ACCESSIBILITY_BASELINE + (count + 1.0).ln() * ACCESSIBILITY_LOG_SCALE)
        .min(ACCESSIBILITY_BASE_CAP);
    let kinds: BTreeSet<&str> = transit_stations
        .iter()
        .flat_map(|station| station.types.iter())
        .map(String::as_str)
        .filter(|tag| TRANSIT_TAGS.contains(tag))
        .collect();
    let variety_bonus = count_to_f64(kinds.len()) * VARIETY_BONUS_PER_TAG;

    let score = ACCESSIBILITY_BOUNDS.settle(base + variety_bonus, None);
    log::debug!(
        "accessibility: count={} base={base:.1} variety={variety_bonus} final={score}",
        transit_stations.len()
    );
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscore_core::test_support::{poi_at, poi_at_bearing};
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> LatLng {
        LatLng {
            lat: 40.0,
            lng: -74.0,
        }
    }

    #[rstest]
    fn foot_traffic_floors_at_ten_without_places(origin: LatLng) {
        assert_eq!(foot_traffic_score(origin, &[]), 10);
    }

    #[rstest]
    fn foot_traffic_rewards_attractors(origin: LatLng) {
        let malls: Vec<_> = (0..8_u8)
            .map(|i| poi_at_bearing(origin, f64::from(i) * 45.0, 100.0, &["shopping_mall"]))
            .collect();
        let score = foot_traffic_score(origin, &malls);
        // 100 from proximity plus 20 bonus clamps to the ceiling.
        assert_eq!(score, 95);
    }

    #[rstest]
    fn safety_without_places_is_neutral(origin: LatLng) {
        let score = safety_score(origin, &[]);
        assert!((67..=73).contains(&score), "{score}");
    }

    #[rstest]
    fn night_club_outweighs_bar(origin: LatLng) {
        let club = poi_at(origin, 100.0, &["night_club"]);
        let bar = poi_at(origin, 100.0, &["bar"]);
        assert!(safety_score(origin, &[club]) < safety_score(origin, &[bar]));
    }

    #[rstest]
    fn mixed_risk_tags_use_the_most_severe(origin: LatLng) {
        let mixed = poi_at(origin, 100.0, &["bar", "night_club"]);
        let club = poi_at(origin, 100.0, &["night_club"]);
        assert_eq!(safety_score(origin, &[mixed]), safety_score(origin, &[club]));
    }

    #[rstest]
    fn police_raise_safety(origin: LatLng) {
        let police = poi_at(origin, 50.0, &["police"]);
        // 70 + 30 clamps to the 95 ceiling before jitter can matter much.
        assert!(safety_score(origin, &[police]) >= 92);
    }

    #[rstest]
    fn competition_without_rivals_stays_high(origin: LatLng) {
        let score = competition_score(origin, &[]);
        assert!((86..=94).contains(&score), "{score}");
    }

    #[rstest]
    fn zones_overlap(origin: LatLng) {
        let close = poi_at(origin, 150.0, &["store"]);
        let middle = poi_at(origin, 400.0, &["store"]);
        let outer = poi_at(origin, 900.0, &["store"]);
        let beyond = poi_at(origin, 1_500.0, &["store"]);
        let pressure = competition_pressure(origin, &[close, middle, outer, beyond]);
        // 1 in 200 m, 2 in 500 m, 3 in 1000 m.
        assert!((pressure - (1.0 + 1.4 + 1.2)).abs() < 1e-9);
    }

    #[rstest]
    fn unlocated_competitors_add_no_pressure(origin: LatLng) {
        let ghost = PointOfInterest::unlocated("Ghost", ["store"]);
        assert!(competition_pressure(origin, &[ghost]).abs() < f64::EPSILON);
    }

    #[rstest]
    fn crowded_market_hits_pressure_floor(origin: LatLng) {
        let rivals: Vec<_> = (0..25_u8)
            .map(|i| poi_at_bearing(origin, f64::from(i) * 14.4, 150.0, &["store"]))
            .collect();
        assert!(competition_pressure(origin, &rivals) >= 52.5 - 1e-9);
        let score = competition_score(origin, &rivals);
        assert!((16..=24).contains(&score), "{score}");
    }

    #[rstest]
    #[case(vec![], 30)]
    #[case(vec![vec!["bus_station"]], 49)]
    #[case(vec![vec!["bus_station"], vec!["bus_station"]], 57)]
    #[case(
        vec![
            vec!["bus_station", "transit_station"],
            vec!["train_station"],
            vec!["subway_station"],
        ],
        78
    )]
    fn accessibility_follows_count_and_variety(
        #[case] stations: Vec<Vec<&'static str>>,
        #[case] expected: u8,
    ) {
        let stations: Vec<_> = stations
            .iter()
            .map(|types| PointOfInterest::unlocated("Station", types.iter().copied()))
            .collect();
        assert_eq!(accessibility_score(&stations), expected);
    }

    #[rstest]
    fn accessibility_ignores_non_transit_tags() {
        let stations = vec![PointOfInterest::unlocated("Taxi rank", ["taxi_stand"])];
        // 30 + 20 * ln 2 = 43.86
        assert_eq!(accessibility_score(&stations), 44);
    }

    #[rstest]
    fn many_stations_cap_base_before_variety() {
        let stations: Vec<_> = (0..40)
            .map(|_| PointOfInterest::unlocated("Stop", ["bus_station"]))
            .collect();
        // Base caps at 90, plus 5 for one kind.
        assert_eq!(accessibility_score(&stations), 95);
    }
}
