//! Weighted composite score and dispersion-based stability metrics.

use geoscore_core::{FactorScores, StabilityMetrics};

use crate::CompositeWeightsError;
use crate::numeric::{count_to_f64, to_score};

/// Nearby-place count at which data quality is considered complete.
const FULL_DATA_PLACES: f64 = 50.0;
const TOTAL_TOLERANCE: f64 = 1e-9;

/// Relative weighting of the four factors in the composite score.
///
/// The defaults are foot traffic 0.30, safety 0.20, competition 0.25 and
/// accessibility 0.25.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeWeights {
    /// Multiplier for the foot-traffic factor.
    pub foot_traffic: f64,
    /// Multiplier for the safety factor.
    pub safety: f64,
    /// Multiplier for the competition factor.
    pub competition: f64,
    /// Multiplier for the accessibility factor.
    pub accessibility: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            foot_traffic: 0.30,
            safety: 0.20,
            competition: 0.25,
            accessibility: 0.25,
        }
    }
}

impl CompositeWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`CompositeWeightsError`] when any weight is not finite or is
    /// negative, or when the weights do not sum to one.
    ///
    /// # Examples
    /// ```
    /// use geoscore_scorer::CompositeWeights;
    ///
    /// assert!(CompositeWeights::default().validate().is_ok());
    /// let lopsided = CompositeWeights { safety: 0.9, ..CompositeWeights::default() };
    /// assert!(lopsided.validate().is_err());
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to check normalisation"
    )]
    pub fn validate(self) -> Result<Self, CompositeWeightsError> {
        for (factor, weight) in self.named() {
            if !weight.is_finite() {
                return Err(CompositeWeightsError::NonFinite { factor });
            }
            if weight < 0.0 {
                return Err(CompositeWeightsError::Negative { factor, weight });
            }
        }
        let total: f64 = self.named().iter().map(|(_, weight)| weight).sum();
        if (total - 1.0).abs() > TOTAL_TOLERANCE {
            return Err(CompositeWeightsError::UnnormalisedTotal { total });
        }
        Ok(self)
    }

    const fn named(self) -> [(&'static str, f64); 4] {
        [
            ("foot_traffic", self.foot_traffic),
            ("safety", self.safety),
            ("competition", self.competition),
            ("accessibility", self.accessibility),
        ]
    }

    /// Blend `factors` into a composite score in `0..=100`, rounding halves up.
    ///
    /// # Examples
    /// ```
    /// use geoscore_core::FactorScores;
    /// use geoscore_scorer::CompositeWeights;
    ///
    /// let factors = FactorScores {
    ///     foot_traffic: 10,
    ///     safety: 70,
    ///     competition: 90,
    ///     accessibility: 30,
    /// };
    /// // 3 + 14 + 22.5 + 7.5 = 47
    /// assert_eq!(CompositeWeights::default().blend(&factors), 47);
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "weighted sum of factors")]
    pub fn blend(&self, factors: &FactorScores) -> u8 {
        let weighted = f64::from(factors.foot_traffic) * self.foot_traffic
            + f64::from(factors.safety) * self.safety
            + f64::from(factors.competition) * self.competition
            + f64::from(factors.accessibility) * self.accessibility;
        to_score(weighted)
    }
}

/// Population standard deviation of the four factor values.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "mean and variance of factors")]
pub fn factor_std_dev(factors: &FactorScores) -> f64 {
    let values = factors.as_array().map(f64::from);
    let count = count_to_f64(values.len());
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;
    variance.sqrt()
}

/// Describe how much the factors agree and how much data backed them.
///
/// Consistency is `100 - 2 * sd` floored at zero; data quality scales the
/// nearby-place count so 50 places reach 100; confidence is their mean.
///
/// # Examples
/// ```
/// use geoscore_core::FactorScores;
/// use geoscore_scorer::stability_metrics;
///
/// let even = FactorScores { foot_traffic: 60, safety: 60, competition: 60, accessibility: 60 };
/// let metrics = stability_metrics(&even, 25);
/// assert_eq!(metrics.consistency_score, 100);
/// assert_eq!(metrics.data_quality, 50);
/// assert_eq!(metrics.confidence_level, 75);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "dispersion-derived metrics")]
pub fn stability_metrics(factors: &FactorScores, nearby_count: usize) -> StabilityMetrics {
    let consistency = (100.0 - factor_std_dev(factors) * 2.0).max(0.0);
    let data_quality = (count_to_f64(nearby_count) / FULL_DATA_PLACES * 100.0).min(100.0);
    let confidence = ((consistency + data_quality) / 2.0).min(100.0);
    StabilityMetrics {
        consistency_score: to_score(consistency),
        data_quality: to_score(data_quality),
        confidence_level: to_score(confidence),
    }
}
