//! Weight tables, radii and clamp ranges used by the factor scorers.

use std::sync::LazyLock;

use geoscore_core::WeightTable;

/// Places that generate pedestrian activity.
pub const TRAFFIC_WEIGHTS: &[(&str, f64)] = &[
    ("shopping_mall", 1.0),
    ("transit_station", 0.9),
    ("bus_station", 0.8),
    ("train_station", 0.9),
    ("subway_station", 0.9),
    ("restaurant", 0.7),
    ("cafe", 0.6),
    ("store", 0.5),
    ("bank", 0.4),
    ("pharmacy", 0.4),
    ("gas_station", 0.3),
    ("convenience_store", 0.5),
];

/// Places that raise perceived safety.
pub const SAFETY_WEIGHTS: &[(&str, f64)] = &[
    ("police", 1.0),
    ("hospital", 0.9),
    ("fire_station", 0.8),
    ("school", 0.7),
    ("university", 0.7),
    ("transit_station", 0.6),
    ("bus_station", 0.5),
    ("train_station", 0.6),
    ("pharmacy", 0.4),
    ("bank", 0.4),
];

/// Nightlife tags that lower perceived safety. Negative weights mark risk.
pub const RISK_WEIGHTS: &[(&str, f64)] = &[
    ("night_club", -0.6),
    ("bar", -0.4),
    ("liquor_store", -0.3),
];

/// Tags counted towards the foot-traffic density bonus.
pub const HIGH_TRAFFIC_TAGS: &[&str] = &["shopping_mall", "transit_station", "restaurant"];

/// Tags counted towards the accessibility variety bonus.
pub const TRANSIT_TAGS: &[&str] = &[
    "bus_station",
    "train_station",
    "subway_station",
    "transit_station",
];

/// Concentric competition zones as `(radius_metres, weight)`.
///
/// Zones overlap: a competitor inside the innermost ring counts in all three.
pub const COMPETITION_ZONES: &[(f64, f64)] = &[(200.0, 1.0), (500.0, 0.7), (1000.0, 0.4)];

pub(crate) const TRAFFIC_RADIUS_METRES: f64 = 800.0;
pub(crate) const SAFETY_RADIUS_METRES: f64 = 1000.0;
pub(crate) const RISK_RADIUS_METRES: f64 = 500.0;

pub(crate) static TRAFFIC_TABLE: LazyLock<WeightTable> =
    LazyLock::new(|| WeightTable::from_pairs(TRAFFIC_WEIGHTS));
pub(crate) static SAFETY_TABLE: LazyLock<WeightTable> =
    LazyLock::new(|| WeightTable::from_pairs(SAFETY_WEIGHTS));
// Scored by magnitude so the most severe matching tag dominates.
pub(crate) static RISK_TABLE: LazyLock<WeightTable> =
    LazyLock::new(|| WeightTable::from_pairs(RISK_WEIGHTS).magnitudes());

/// Inclusive clamp range and jitter amplitude for one factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FactorBounds {
    pub floor: f64,
    pub ceiling: f64,
    pub jitter: f64,
}

pub(crate) const FOOT_TRAFFIC_BOUNDS: FactorBounds = FactorBounds {
    floor: 10.0,
    ceiling: 95.0,
    jitter: 10.0,
};
pub(crate) const SAFETY_BOUNDS: FactorBounds = FactorBounds {
    floor: 20.0,
    ceiling: 95.0,
    jitter: 6.0,
};
pub(crate) const COMPETITION_BOUNDS: FactorBounds = FactorBounds {
    floor: 15.0,
    ceiling: 95.0,
    jitter: 8.0,
};
pub(crate) const ACCESSIBILITY_BOUNDS: FactorBounds = FactorBounds {
    floor: 15.0,
    ceiling: 95.0,
    jitter: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn risk_table_is_scored_by_severity() {
        assert!((RISK_TABLE.weight("night_club") - 0.6).abs() < f64::EPSILON);
        assert!(RISK_TABLE.weight("night_club") > RISK_TABLE.weight("bar"));
    }

    #[rstest]
    fn positive_tables_have_no_negative_weights() {
        for table in [&*TRAFFIC_TABLE, &*SAFETY_TABLE] {
            assert!(table.iter().all(|(_, weight)| weight > 0.0));
        }
    }

    #[rstest]
    fn zones_grow_outward_and_weaken() {
        for pair in COMPETITION_ZONES.windows(2) {
            let [(inner_radius, inner_weight), (outer_radius, outer_weight)] = pair else {
                panic!("windows(2) yields pairs");
            };
            assert!(inner_radius < outer_radius);
            assert!(inner_weight > outer_weight);
        }
    }
}
