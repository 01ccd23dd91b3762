//! Type-tag weight tables used by proximity scoring.
//!
//! A [`WeightTable`] maps POI type tags to a weight, nominally in
//! `-1.0..=1.0`. Tags missing from the table weigh `0.0`: an unrecognised
//! tag simply contributes nothing.

use std::collections::BTreeMap;

use crate::PointOfInterest;

/// Mapping from POI type tag to contribution weight.
///
/// # Examples
/// ```
/// use geoscore_core::WeightTable;
///
/// let table = WeightTable::from_pairs(&[("police", 1.0), ("bank", 0.4)]);
/// assert_eq!(table.weight("police"), 1.0);
/// assert_eq!(table.weight("bakery"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(tag, weight)` pairs. Later pairs overwrite
    /// earlier ones with the same tag.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        pairs
            .iter()
            .map(|&(tag, weight)| (tag.to_owned(), weight))
            .collect()
    }

    /// Insert or replace the weight for `tag`.
    pub fn set_weight(&mut self, tag: impl Into<String>, weight: f64) {
        self.weights.insert(tag.into(), weight);
    }

    /// Add a weight while returning `self` for chaining.
    pub fn with_weight(mut self, tag: impl Into<String>, weight: f64) -> Self {
        self.set_weight(tag, weight);
        self
    }

    /// Weight for `tag`, `0.0` when absent.
    pub fn weight(&self, tag: &str) -> f64 {
        self.weights.get(tag).copied().unwrap_or(0.0)
    }

    /// Highest weight among the POI's tags, floored at `0.0`.
    ///
    /// A POI tagged with several synonymous types contributes its single
    /// strongest type, never the sum. Tags with non-positive weights never
    /// lift the result above zero.
    ///
    /// # Examples
    /// ```
    /// use geoscore_core::{PointOfInterest, WeightTable};
    ///
    /// let table = WeightTable::from_pairs(&[("train_station", 0.9), ("transit_station", 0.6)]);
    /// let poi = PointOfInterest::unlocated("Central", ["transit_station", "train_station"]);
    /// assert_eq!(table.strongest_weight(&poi), 0.9);
    /// ```
    pub fn strongest_weight(&self, poi: &PointOfInterest) -> f64 {
        poi.types
            .iter()
            .map(|tag| self.weight(tag))
            .fold(0.0, f64::max)
    }

    /// Table with every weight replaced by its magnitude.
    ///
    /// Risk tables are declared with negative weights; scoring them through
    /// [`Self::strongest_weight`] requires positive magnitudes so that the
    /// most severe matching tag wins.
    ///
    /// # Examples
    /// ```
    /// use geoscore_core::WeightTable;
    ///
    /// let risk = WeightTable::from_pairs(&[("night_club", -0.6), ("bar", -0.4)]);
    /// assert_eq!(risk.magnitudes().weight("night_club"), 0.6);
    /// ```
    #[must_use]
    pub fn magnitudes(&self) -> Self {
        self.weights
            .iter()
            .map(|(tag, weight)| (tag.clone(), weight.abs()))
            .collect()
    }

    /// Iterate over `(tag, weight)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(tag, weight)| (tag.as_str(), *weight))
    }

    /// Number of tags in the table.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether the table has no tags.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
