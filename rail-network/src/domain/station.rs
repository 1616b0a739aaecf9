//! Station entity.

use std::fmt;

use crate::geo::{CoordinateError, Coordinates};

use super::crs::{Crs, InvalidCrs};

/// Error returned when a station fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    /// CRS code is not 3 uppercase letters
    #[error(transparent)]
    InvalidCrsFormat(#[from] InvalidCrs),

    /// Latitude or longitude outside its valid range
    #[error(transparent)]
    OutOfRange(#[from] CoordinateError),
}

/// A station on the rail network.
///
/// Immutable once constructed. The CRS code and coordinates are validated by
/// [`Station::new`]; name and region are free text.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    region: String,
    crs: Crs,
    position: Coordinates,
    hub: bool,
}

impl Station {
    /// Validate and construct a station.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `crs` is not exactly 3 uppercase ASCII letters
    /// - `latitude` is outside [-90, 90] or `longitude` outside [-180, 180]
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_network::domain::Station;
    ///
    /// let btn = Station::new("Brighton", "South East", "BTN", 50.829659, -0.141234, true).unwrap();
    /// assert_eq!(btn.to_string(), "Station(BTN-Brighton/South East-hub)");
    ///
    /// assert!(Station::new("Brighton", "South East", "btn", 50.8, -0.1, true).is_err());
    /// assert!(Station::new("Brighton", "South East", "BTN", 150.0, -0.1, true).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        crs: &str,
        latitude: f64,
        longitude: f64,
        hub: bool,
    ) -> Result<Self, StationError> {
        let crs = Crs::parse(crs)?;
        let position = Coordinates::new(latitude, longitude)?;

        Ok(Self {
            name: name.into(),
            region: region.into(),
            crs,
            position,
            hub,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude()
    }

    /// Whether this station is a regional interchange.
    pub fn is_hub(&self) -> bool {
        self.hub
    }

    /// Great-circle distance to another station in kilometres.
    pub fn distance_to(&self, other: &Station) -> f64 {
        self.position.distance_km(&other.position)
    }

    /// Copy of this station moved into another region.
    #[cfg(test)]
    pub(crate) fn with_region(&self, region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}-{}/{}", self.crs, self.name, self.region)?;
        if self.hub {
            f.write_str("-hub")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brighton() -> Station {
        Station::new("Brighton", "South East", "BTN", 50.829659, -0.141234, true).unwrap()
    }

    fn edinburgh_park() -> Station {
        Station::new("Edinburgh Park", "Scotland", "EDP", 55.927615, -3.307829, false).unwrap()
    }

    #[test]
    fn fields_are_kept() {
        let btn = brighton();
        assert_eq!(btn.name(), "Brighton");
        assert_eq!(btn.region(), "South East");
        assert_eq!(btn.crs().as_str(), "BTN");
        assert_eq!(btn.latitude(), 50.829659);
        assert_eq!(btn.longitude(), -0.141234);
        assert!(btn.is_hub());
    }

    #[test]
    fn rejects_bad_crs() {
        for crs in ["BT", "BTNX", "btn", "B7N", ""] {
            let err = Station::new("Brighton", "South East", crs, 50.8, -0.1, true).unwrap_err();
            assert!(
                matches!(err, StationError::InvalidCrsFormat(_)),
                "{crs:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let err = Station::new("Brighton", "South East", "BTN", 90.5, -0.1, true).unwrap_err();
        assert_eq!(
            err,
            StationError::OutOfRange(CoordinateError::LatitudeOutOfRange(90.5))
        );

        let err = Station::new("Brighton", "South East", "BTN", 50.8, -181.0, true).unwrap_err();
        assert_eq!(
            err,
            StationError::OutOfRange(CoordinateError::LongitudeOutOfRange(-181.0))
        );
    }

    #[test]
    fn crs_checked_before_coordinates() {
        let err = Station::new("Brighton", "South East", "bt", 500.0, -0.1, true).unwrap_err();
        assert!(matches!(err, StationError::InvalidCrsFormat(_)));
    }

    #[test]
    fn display_marks_hubs() {
        assert_eq!(brighton().to_string(), "Station(BTN-Brighton/South East-hub)");
        assert_eq!(
            edinburgh_park().to_string(),
            "Station(EDP-Edinburgh Park/Scotland)"
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let a = brighton();
        let b = edinburgh_park();
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn with_region_only_changes_region() {
        let moved = brighton().with_region("London");
        assert_eq!(moved.region(), "London");
        assert_eq!(moved.crs(), brighton().crs());
        assert_eq!(moved.position(), brighton().position());
    }
}
