use crate::LatLng;

/// A nearby place returned by a places or transit search.
///
/// `types` mirrors the provider's tag list: ordered as returned,
/// case-sensitive, and possibly containing duplicates. It is the only
/// classification signal the engine reads.
///
/// # Examples
/// ```
/// use geoscore_core::{LatLng, PointOfInterest};
///
/// let poi = PointOfInterest::new(
///     "Corner Cafe",
///     LatLng { lat: 40.0, lng: -74.0 },
///     ["cafe", "food"],
/// );
///
/// assert!(poi.has_type("cafe"));
/// assert!(!poi.has_type("Cafe"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Position, when the provider supplied one.
    ///
    /// POIs without a location are skipped by every distance-based
    /// computation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<LatLng>,
    /// Provider type tags such as `restaurant` or `bus_station`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<String>,
    /// Average user rating.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rating: Option<f64>,
    /// Number of user ratings behind [`Self::rating`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub user_ratings_total: Option<u32>,
    /// Short address or neighbourhood description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub vicinity: Option<String>,
}

impl PointOfInterest {
    /// Construct a located `PointOfInterest` with the provided type tags.
    pub fn new<N, I, T>(name: N, location: LatLng, types: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            location: Some(location),
            types: types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Construct a `PointOfInterest` that has type tags but no location.
    ///
    /// # Examples
    /// ```
    /// use geoscore_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::unlocated("Somewhere", ["bar"]);
    /// assert!(poi.location.is_none());
    /// ```
    pub fn unlocated<N, I, T>(name: N, types: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Report whether the POI carries `tag` exactly.
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Report whether the POI carries any of `tags`.
    pub fn has_any_type(&self, tags: &[&str]) -> bool {
        self.types.iter().any(|t| tags.contains(&t.as_str()))
    }

    /// The first type tag, which providers list as the primary category.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Distance from `origin` in metres, or `None` when unlocated.
    pub fn distance_from(&self, origin: LatLng) -> Option<f64> {
        self.location.map(|location| origin.distance_to(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_types_are_preserved_in_order() {
        let poi = PointOfInterest::new(
            "Twice",
            LatLng { lat: 0.0, lng: 0.0 },
            ["store", "store", "bank"],
        );
        assert_eq!(poi.types, vec!["store", "store", "bank"]);
        assert_eq!(poi.primary_type(), Some("store"));
    }

    #[test]
    fn has_any_type_matches_exact_tags() {
        let poi = PointOfInterest::unlocated("Club", ["night_club"]);
        assert!(poi.has_any_type(&["bar", "night_club"]));
        assert!(!poi.has_any_type(&["bar", "Night_Club"]));
    }

    #[test]
    fn unlocated_poi_has_no_distance() {
        let poi = PointOfInterest::unlocated("Nowhere", ["bar"]);
        assert!(poi.distance_from(LatLng { lat: 0.0, lng: 0.0 }).is_none());
    }
}
