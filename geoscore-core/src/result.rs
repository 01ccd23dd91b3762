//! Output types produced by a location scorer.
//!
//! Every value here is built fresh per scoring call and owned by the caller.
//! Maps use ordered collections so that serialised results are
//! byte-for-byte reproducible.

use std::collections::BTreeMap;

/// The four independently scored factors, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FactorScores {
    /// Pedestrian activity generated by nearby attractors.
    pub foot_traffic: u8,
    /// Proximity to safety services net of nightlife risk.
    pub safety: u8,
    /// Inverse of competitor pressure; higher means less competition.
    pub competition: u8,
    /// Transit availability and variety.
    pub accessibility: u8,
}

impl FactorScores {
    /// Factor values in declaration order.
    pub const fn as_array(&self) -> [u8; 4] {
        [
            self.foot_traffic,
            self.safety,
            self.competition,
            self.accessibility,
        ]
    }
}

/// Descriptive dispersion metrics. They never feed back into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StabilityMetrics {
    /// How closely the four factors agree, `0..=100`.
    pub consistency_score: u8,
    /// How much nearby data backed the score, `0..=100`.
    pub data_quality: u8,
    /// Mean of consistency and data quality, `0..=100`.
    pub confidence_level: u8,
}

/// Qualitative grade for a composite score.
///
/// # Examples
/// ```
/// use geoscore_core::ScoreGrade;
///
/// assert_eq!(ScoreGrade::from_score(75), ScoreGrade::Excellent);
/// assert_eq!(ScoreGrade::from_score(60).label(), "Good Location");
/// assert_eq!(ScoreGrade::from_score(59), ScoreGrade::NeedsImprovement);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreGrade {
    /// Score of 75 or more.
    Excellent,
    /// Score from 60 to 74.
    Good,
    /// Score below 60.
    NeedsImprovement,
}

impl ScoreGrade {
    /// Grade a composite score.
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Location",
            Self::Good => "Good Location",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Three-step qualitative level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

/// How crowded the local market is with competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketSaturation {
    /// Ten competitors or fewer.
    Open,
    /// Eleven to twenty competitors.
    Competitive,
    /// More than twenty competitors.
    Saturated,
}

/// Street-lighting qualifier derived from the safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lighting {
    /// Safety above 80.
    Excellent,
    /// Safety above 60.
    Good,
    /// Safety of 60 or less.
    Poor,
}

/// Summary of the relevant competitor set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompetitorAnalysis {
    /// Number of relevant competitors.
    pub total: usize,
    /// Density bucket for [`Self::total`].
    pub density: Level,
    /// Competitor count keyed by each competitor's primary type tag.
    pub types: BTreeMap<String, usize>,
    /// Saturation bucket for [`Self::total`].
    pub market_saturation: MarketSaturation,
}

/// Safety qualifiers derived from the safety factor and nearby services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SafetyMetrics {
    /// Crime-risk bucket.
    pub crime_risk: Level,
    /// Lighting bucket.
    pub lighting: Lighting,
    /// Surveillance bucket, driven by transit presence.
    pub surveillance: Level,
    /// Number of nearby hospitals, police and fire stations.
    pub emergency_services: usize,
}

/// Counts of nearby places per broad category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFactors {
    /// Restaurants.
    pub restaurants: usize,
    /// Transit stations.
    pub transit: usize,
    /// Hospitals, pharmacies and doctors.
    pub healthcare: usize,
    /// Schools and universities.
    pub education: usize,
    /// Malls and stores.
    pub shopping: usize,
    /// Cinemas, amusement parks and casinos.
    pub entertainment: usize,
}

/// One point of the synthetic 24-hour activity curve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourlyTraffic {
    /// Hour label, `"00:00"` to `"23:00"`.
    pub hour: String,
    /// Relative pedestrian volume.
    pub pedestrians: u32,
    /// Relative vehicle volume.
    pub vehicles: u32,
    /// Perceived safety for the hour.
    pub safety: u32,
}

/// One point of the synthetic weekly trend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyTrend {
    /// Three-letter day name, `"Mon"` to `"Sun"`.
    pub day: String,
    /// Relative foot traffic.
    pub traffic: u32,
    /// Relative sales potential.
    pub sales: u32,
    /// Relative competitor activity.
    pub competition: u32,
}

/// Descriptive report accompanying a score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DetailedAnalysis {
    /// Illustrative 24-point hourly series.
    pub hourly_traffic: Vec<HourlyTraffic>,
    /// Illustrative 7-point weekly series.
    pub weekly_trends: Vec<WeeklyTrend>,
    /// Competitor summary.
    pub competitor_analysis: CompetitorAnalysis,
    /// Safety qualifiers.
    pub safety_metrics: SafetyMetrics,
    /// Category counts.
    pub location_factors: LocationFactors,
    /// Factor dispersion metrics.
    pub stability_metrics: StabilityMetrics,
}

/// Complete output of a scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreResult {
    /// Composite GeoScore in `0..=100`.
    pub score: u8,
    /// Grade of [`Self::score`].
    pub grade: ScoreGrade,
    /// The four factor scores.
    pub factors: FactorScores,
    /// Descriptive report.
    pub detailed_analysis: DetailedAnalysis,
}
