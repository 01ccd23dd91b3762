//! Location scoring engine for GeoScore.
//!
//! Given a location, the places already fetched around it and the transit
//! stations nearby, the engine computes four factor scores and blends them
//! into a single 0-100 GeoScore:
//! - **Foot traffic** averages traffic-generating places within 800 m,
//!   weighted by exponential distance decay, plus a density bonus.
//! - **Safety** starts from a neutral 70, rises with nearby emergency and
//!   civic services and falls with nightlife within 500 m.
//! - **Competition** falls as competitors crowd three overlapping zones.
//! - **Accessibility** grows logarithmically with transit stations and
//!   rewards variety of transit kinds.
//!
//! Three factors carry a small jitter drawn from a [`StableRng`] seeded by
//! the coordinates, so a location always scores the same while neighbouring
//! locations vary naturally. Every function is pure: no I/O, no shared
//! state, and identical inputs give identical results.
//!
//! # Examples
//!
//! ```
//! use geoscore_core::{LatLng, PointOfInterest};
//! use geoscore_scorer::score_location;
//!
//! let origin = LatLng { lat: 40.0, lng: -74.0 };
//! let nearby = vec![PointOfInterest::new(
//!     "Diner",
//!     LatLng { lat: 40.0005, lng: -74.0 },
//!     ["restaurant"],
//! )];
//! let result = score_location(origin, &nearby, &[], Some("food_service"))
//!     .expect("valid coordinates");
//! assert!(result.score <= 100);
//! assert_eq!(result.detailed_analysis.competitor_analysis.total, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod composite;
mod error;
mod factors;
mod numeric;
mod proximity;
mod rng;
mod scorer;
pub(crate) mod tables;

pub use analysis::{
    AnalysisInputs, HOURLY_TAG, WEEKLY_TAG, competitor_analysis, detailed_analysis,
    hourly_series, location_factors, safety_metrics, weekly_series,
};
pub use composite::{CompositeWeights, factor_std_dev, stability_metrics};
pub use error::CompositeWeightsError;
pub use factors::{
    COMPETITION_TAG, SAFETY_TAG, TRAFFIC_TAG, accessibility_score, competition_pressure,
    competition_score, foot_traffic_score, safety_score,
};
pub use proximity::{distance_decay, proximity_score};
pub use rng::StableRng;
pub use scorer::{GeoScorer, score_location};
pub use tables::{
    COMPETITION_ZONES, HIGH_TRAFFIC_TAGS, RISK_WEIGHTS, SAFETY_WEIGHTS, TRAFFIC_WEIGHTS,
    TRANSIT_TAGS,
};
