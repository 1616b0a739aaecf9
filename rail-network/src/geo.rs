//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when a latitude or longitude is outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// Latitude must lie in [-90, 90] degrees
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),

    /// Longitude must lie in [-180, 180] degrees
    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
}

/// A point on the Earth's surface, in decimal degrees.
///
/// Any `Coordinates` value has a latitude in [-90, 90] and a longitude in
/// [-180, 180]. NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validate and construct a coordinate pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_network::geo::Coordinates;
    ///
    /// assert!(Coordinates::new(50.829659, -0.141234).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// assert!(Coordinates::new(0.0, -180.5).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in kilometres (Haversine formula).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

        // Rounding can push `a` a hair above 1 for antipodal points
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinates::new(90.1, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(90.1))
        );
        assert_eq!(
            Coordinates::new(-90.1, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(-90.1))
        );
        assert_eq!(
            Coordinates::new(0.0, 180.1),
            Err(CoordinateError::LongitudeOutOfRange(180.1))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.1),
            Err(CoordinateError::LongitudeOutOfRange(-180.1))
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let btn = coords(50.829659, -0.141234);
        assert_eq!(btn.distance_km(&btn), 0.0);
    }

    #[test]
    fn brighton_to_kings_cross() {
        let btn = coords(50.829659, -0.141234);
        let kgx = coords(51.530827, -0.122907);
        let d = btn.distance_km(&kgx);
        // About 78 km as the crow flies
        assert!((d - 77.99).abs() < 0.5, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = coords(0.0, 0.0);
        let b = coords(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((a.distance_km(&b) - expected).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points() {
        let a = coords(0.0, 0.0);
        let b = coords(0.0, 180.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((a.distance_km(&b) - expected).abs() < 1e-6);
    }

    #[test]
    fn error_display() {
        let err = CoordinateError::LatitudeOutOfRange(95.0);
        assert_eq!(err.to_string(), "latitude 95 is outside [-90, 90] degrees");

        let err = CoordinateError::LongitudeOutOfRange(-200.5);
        assert_eq!(
            err.to_string(),
            "longitude -200.5 is outside [-180, 180] degrees"
        );
    }
}
