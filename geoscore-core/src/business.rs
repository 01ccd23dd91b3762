//! Business categories and the POI tags that compete with them.
//!
//! The scoring engine knows nothing about business taxonomies; callers use
//! [`relevant_competitors`] to narrow nearby places to the ones that compete
//! with the business being evaluated before scoring competition.
//!
//! # Examples
//! ```
//! use geoscore_core::BusinessType;
//!
//! let kind: BusinessType = "food_service".parse().unwrap();
//! assert_eq!(kind.as_str(), "food_service");
//! assert!(kind.relevant_tags().contains(&"cafe"));
//! ```

use thiserror::Error;

use crate::PointOfInterest;

/// Competitor tags used when no recognised business type is supplied.
pub const DEFAULT_COMPETITOR_TAGS: &[&str] =
    &["store", "restaurant", "shop", "establishment", "shopping_mall"];

/// Broad business categories a location can be evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BusinessType {
    /// Restaurants, cafes, bakeries and takeaways.
    FoodService,
    /// General and specialist retail.
    Retail,
    /// Supermarkets and convenience stores.
    Grocery,
    /// Electronics, computer and phone shops.
    Electronics,
    /// Pharmacies and medical practices.
    Health,
    /// Dealers, repair shops, fuel and car washes.
    Automotive,
    /// Salons and spas.
    Beauty,
    /// Gyms and studios.
    Fitness,
    /// Schools, libraries and tutoring.
    Education,
}

/// Error returned when parsing an unknown business-type key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown business type '{0}'")]
pub struct UnknownBusinessType(pub String);

impl BusinessType {
    /// Every supported business type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::FoodService,
        Self::Retail,
        Self::Grocery,
        Self::Electronics,
        Self::Health,
        Self::Automotive,
        Self::Beauty,
        Self::Fitness,
        Self::Education,
    ];

    /// Return the snake-case key for the business type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodService => "food_service",
            Self::Retail => "retail",
            Self::Grocery => "grocery",
            Self::Electronics => "electronics",
            Self::Health => "health",
            Self::Automotive => "automotive",
            Self::Beauty => "beauty",
            Self::Fitness => "fitness",
            Self::Education => "education",
        }
    }

    /// POI type tags that compete with this business.
    pub const fn relevant_tags(self) -> &'static [&'static str] {
        match self {
            Self::FoodService => &["restaurant", "cafe", "bakery", "meal_takeaway", "food"],
            Self::Retail => &[
                "store",
                "clothing_store",
                "shoe_store",
                "book_store",
                "electronics_store",
            ],
            Self::Grocery => &["grocery_or_supermarket", "supermarket", "convenience_store"],
            Self::Electronics => &["electronics_store", "computer_store", "phone_store"],
            Self::Health => &["pharmacy", "hospital", "doctor", "dentist", "physiotherapist"],
            Self::Automotive => &["car_dealer", "car_repair", "gas_station", "car_wash"],
            Self::Beauty => &["beauty_salon", "hair_care", "spa", "nail_salon"],
            Self::Fitness => &["gym", "fitness_center", "sports_club", "yoga_studio"],
            Self::Education => &["school", "university", "library", "tutoring"],
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessType {
    type Err = UnknownBusinessType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownBusinessType(s.to_owned()))
    }
}

/// Competitor tags for an optional business-type key.
///
/// Unknown or absent keys fall back to [`DEFAULT_COMPETITOR_TAGS`].
pub fn competitor_tags(business_type: Option<&str>) -> &'static [&'static str] {
    business_type
        .and_then(|key| key.parse::<BusinessType>().ok())
        .map_or(DEFAULT_COMPETITOR_TAGS, BusinessType::relevant_tags)
}

/// Filter `pois` down to those competing with `business_type`.
///
/// Input order is preserved and the filter is idempotent.
///
/// # Examples
/// ```
/// use geoscore_core::{PointOfInterest, relevant_competitors};
///
/// let pois = vec![
///     PointOfInterest::unlocated("Diner", ["restaurant"]),
///     PointOfInterest::unlocated("Gym", ["gym"]),
/// ];
/// let rivals = relevant_competitors(&pois, Some("food_service"));
/// assert_eq!(rivals.len(), 1);
/// assert_eq!(rivals[0].name, "Diner");
/// ```
pub fn relevant_competitors(
    pois: &[PointOfInterest],
    business_type: Option<&str>,
) -> Vec<PointOfInterest> {
    let tags = competitor_tags(business_type);
    pois.iter()
        .filter(|poi| poi.has_any_type(tags))
        .cloned()
        .collect()
}
