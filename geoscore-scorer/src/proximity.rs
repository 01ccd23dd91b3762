//! Distance-decayed weighted averaging over nearby places.

use geoscore_core::{LatLng, PointOfInterest, WeightTable};

/// Fraction of the cutoff radius at which decay reaches `1 / e`.
const DECAY_SCALE: f64 = 0.3;

/// Exponential decay applied to a place `distance_metres` from the origin.
///
/// Returns `1.0` at the origin and roughly `0.036` at the cutoff radius.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "exponential distance decay")]
pub fn distance_decay(distance_metres: f64, max_distance_metres: f64) -> f64 {
    (-distance_metres / (max_distance_metres * DECAY_SCALE)).exp()
}

/// Decay-weighted average of the strongest matching weight of each place.
///
/// Each located place within `max_distance_metres` (inclusive) whose tags
/// carry a positive weight contributes `weight * decay` to the numerator and
/// `decay` to the denominator. The result is that average scaled to
/// `0.0..=100.0`. Places without a location, beyond the cutoff, or with no
/// positively weighted tag contribute nothing; if nothing contributes the
/// score is exactly `0.0`.
///
/// Because the score is an average, many strong places do not outscore a
/// single strong place. Distance changes how much each place counts relative
/// to the others.
///
/// # Examples
/// ```
/// use geoscore_core::{LatLng, PointOfInterest, WeightTable};
/// use geoscore_scorer::proximity_score;
///
/// let origin = LatLng { lat: 40.0, lng: -74.0 };
/// let weights = WeightTable::from_pairs(&[("cafe", 0.6)]);
/// let cafe = PointOfInterest::new("Cafe", LatLng { lat: 40.001, lng: -74.0 }, ["cafe"]);
///
/// let score = proximity_score(origin, &[cafe], &weights, 800.0);
/// assert!((score - 60.0).abs() < 1e-9);
/// assert_eq!(proximity_score(origin, &[], &weights, 800.0), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "weighted average accumulation")]
pub fn proximity_score(
    origin: LatLng,
    pois: &[PointOfInterest],
    weights: &WeightTable,
    max_distance_metres: f64,
) -> f64 {
    let (total_score, total_decay) = pois
        .iter()
        .filter_map(|poi| {
            let distance = poi.distance_from(origin)?;
            if distance > max_distance_metres {
                return None;
            }
            let weight = weights.strongest_weight(poi);
            (weight > 0.0).then(|| (weight, distance_decay(distance, max_distance_metres)))
        })
        .fold((0.0, 0.0), |(score, decay_sum), (weight, decay)| {
            (score + weight * decay, decay_sum + decay)
        });

    if total_decay > 0.0 {
        (total_score / total_decay * 100.0).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscore_core::test_support::{offset, poi_at};
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> LatLng {
        LatLng {
            lat: 40.0,
            lng: -74.0,
        }
    }

    #[fixture]
    fn weights() -> WeightTable {
        WeightTable::from_pairs(&[("police", 1.0), ("school", 0.5), ("bar", -0.4)])
    }

    #[rstest]
    fn empty_list_scores_zero(origin: LatLng, weights: WeightTable) {
        assert!(proximity_score(origin, &[], &weights, 1000.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn places_beyond_cutoff_are_ignored(origin: LatLng, weights: WeightTable) {
        let far = poi_at(origin, 1_200.0, &["police"]);
        assert!(proximity_score(origin, &[far], &weights, 1000.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn place_exactly_at_cutoff_counts(origin: LatLng, weights: WeightTable) {
        let position = offset(origin, 0.0, 1_000.0);
        let cutoff = origin.distance_to(position);
        let edge = PointOfInterest::new("Edge school", position, ["school"]);
        let score = proximity_score(origin, &[edge], &weights, cutoff);
        assert!((score - 50.0).abs() < 1e-9, "{score}");
    }

    #[rstest]
    fn unlocated_places_are_ignored(origin: LatLng, weights: WeightTable) {
        let ghost = PointOfInterest::unlocated("Ghost", ["police"]);
        let school = poi_at(origin, 100.0, &["school"]);
        let score = proximity_score(origin, &[ghost, school], &weights, 1000.0);
        assert!((score - 50.0).abs() < 1e-9);
    }

    #[rstest]
    fn negative_and_unknown_tags_contribute_nothing(origin: LatLng, weights: WeightTable) {
        let bar = poi_at(origin, 10.0, &["bar"]);
        let gym = poi_at(origin, 10.0, &["gym"]);
        assert!(proximity_score(origin, &[bar, gym], &weights, 1000.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn strongest_tag_wins_without_summing(origin: LatLng, weights: WeightTable) {
        let both = poi_at(origin, 50.0, &["school", "police"]);
        let score = proximity_score(origin, &[both], &weights, 1000.0);
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[rstest]
    fn nearer_places_dominate_the_average(origin: LatLng, weights: WeightTable) {
        let school = poi_at(origin, 0.0, &["school"]);
        let near_police = poi_at(origin, 100.0, &["police"]);
        let far_police = poi_at(origin, 900.0, &["police"]);
        let near = proximity_score(origin, &[school.clone(), near_police], &weights, 1000.0);
        let far = proximity_score(origin, &[school, far_police], &weights, 1000.0);
        assert!(near > far, "{near} should exceed {far}");
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(300.0, (-1.0_f64).exp())]
    fn decay_matches_exponential(#[case] distance: f64, #[case] expected: f64) {
        assert!((distance_decay(distance, 1000.0) - expected).abs() < 1e-12);
    }
}
