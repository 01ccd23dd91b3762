//! Error types raised while configuring the composite scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when composite weights cannot produce a bounded score.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CompositeWeightsError {
    /// A weight was NaN or infinite.
    #[error("composite weight for {factor} is not finite")]
    NonFinite {
        /// Factor whose weight was rejected.
        factor: &'static str,
    },
    /// A weight was below zero.
    #[error("composite weight for {factor} is negative: {weight}")]
    Negative {
        /// Factor whose weight was rejected.
        factor: &'static str,
        /// Offending value.
        weight: f64,
    },
    /// The weights did not sum to one.
    #[error("composite weights sum to {total}, expected 1.0")]
    UnnormalisedTotal {
        /// Sum of all four weights.
        total: f64,
    },
}
