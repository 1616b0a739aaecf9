//! Station code type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code {code:?}: {reason}")]
pub struct InvalidCrs {
    code: String,
    reason: &'static str,
}

impl InvalidCrs {
    /// The rejected input.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// CRS codes are always 3 uppercase ASCII letters. Any `Crs` value is valid
/// by construction, so the registry can key on it directly.
///
/// # Examples
///
/// ```
/// use rail_network::domain::Crs;
///
/// let btn = Crs::parse("BTN").unwrap();
/// assert_eq!(btn.as_str(), "BTN");
///
/// assert!(Crs::parse("btn").is_err());
/// assert!(Crs::parse("BT").is_err());
/// assert!(Crs::parse("BTNX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let invalid = |reason| InvalidCrs {
            code: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        let [a, b, c] = bytes else {
            return Err(invalid("must be exactly 3 characters"));
        };

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(invalid("must be uppercase ASCII letters A-Z"));
        }

        Ok(Crs([*a, *b, *c]))
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Crs {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
