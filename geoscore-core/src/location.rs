//! Geographic coordinates and great-circle distance.
//!
//! Coordinates are WGS84 degrees. Interop with the `geo` crate maps
//! `x = longitude` and `y = latitude`.

use geo::{Coord, Point};
use thiserror::Error;

/// Mean Earth radius used by [`haversine_distance`], in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
///
/// # Examples
/// ```
/// use geoscore_core::LatLng;
///
/// # fn main() -> Result<(), geoscore_core::LocationError> {
/// let point = LatLng::new(40.0, -74.0)?;
/// assert_eq!(point.lat, 40.0);
/// assert!(LatLng::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lng: f64,
}

/// Errors returned when a coordinate pair is not a valid location.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LocationError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinates must be finite (lat {lat}, lng {lng})")]
    NonFinite {
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lng: f64,
    },
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl LatLng {
    /// Validate and construct a [`LatLng`].
    pub fn new(lat: f64, lng: f64) -> Result<Self, LocationError> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    /// Check that the coordinates are finite and within WGS84 bounds.
    pub fn validate(&self) -> Result<(), LocationError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(LocationError::NonFinite {
                lat: self.lat,
                lng: self.lng,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(LocationError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(LocationError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }

    /// Great-circle distance to `other` in metres.
    ///
    /// # Examples
    /// ```
    /// use geoscore_core::LatLng;
    ///
    /// let a = LatLng { lat: 0.0, lng: 0.0 };
    /// assert_eq!(a.distance_to(a), 0.0);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        haversine_distance(self, other)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Self::new(value.lng, value.lat)
    }
}

impl TryFrom<Coord<f64>> for LatLng {
    type Error = LocationError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

/// Haversine distance between two points in metres.
///
/// Uses a spherical Earth of radius [`EARTH_RADIUS_METRES`]. The result is
/// always defined for finite inputs.
#[must_use]
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let half_chord = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_METRES * angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-6;

    #[rstest]
    fn distance_is_zero_for_identical_points() {
        let point = LatLng { lat: 51.5, lng: -0.12 };
        assert!(haversine_distance(point, point).abs() < TOLERANCE);
    }

    #[rstest]
    fn one_degree_of_latitude_matches_arc_length() {
        let a = LatLng { lat: 0.0, lng: 0.0 };
        let b = LatLng { lat: 1.0, lng: 0.0 };
        let expected = EARTH_RADIUS_METRES * 1.0_f64.to_radians();
        assert!((haversine_distance(a, b) - expected).abs() < 1e-3);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = LatLng { lat: 40.0, lng: -74.0 };
        let b = LatLng { lat: 40.01, lng: -73.99 };
        assert!((haversine_distance(a, b) - haversine_distance(b, a)).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_boundary_coordinates(#[case] lat: f64, #[case] lng: f64) {
        assert!(LatLng::new(lat, lng).is_ok());
    }

    #[rstest]
    #[case(90.1, 0.0, LocationError::LatitudeOutOfRange(90.1))]
    #[case(0.0, -180.5, LocationError::LongitudeOutOfRange(-180.5))]
    fn rejects_out_of_range(#[case] lat: f64, #[case] lng: f64, #[case] expected: LocationError) {
        assert_eq!(LatLng::new(lat, lng), Err(expected));
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn rejects_non_finite(#[case] lat: f64, #[case] lng: f64) {
        assert!(matches!(
            LatLng::new(lat, lng),
            Err(LocationError::NonFinite { .. })
        ));
    }

    #[rstest]
    fn converts_to_geo_coord_with_lng_as_x() {
        let coord: Coord<f64> = LatLng { lat: 2.0, lng: 1.0 }.into();
        assert_eq!(coord, Coord { x: 1.0, y: 2.0 });
        let back = LatLng::try_from(coord).expect("valid coordinate");
        assert_eq!(back, LatLng { lat: 2.0, lng: 1.0 });
    }
}
