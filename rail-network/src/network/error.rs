//! Registry and journey-planning error types.

use std::fmt;

use crate::domain::Crs;

/// Which argument of a query a CRS code was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Journey origin
    Start,
    /// Journey destination
    Destination,
    /// A single-station query (e.g. closest hub)
    Station,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::Destination => "destination",
            Endpoint::Station => "station",
        })
    }
}

/// Errors raised while building or querying a [`RailNetwork`](super::RailNetwork).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Two input stations share a CRS code
    #[error("CRS code {0} is used by more than one station")]
    DuplicateCrs(Crs),

    /// A CRS code that no station in the network carries
    #[error("unknown {endpoint} CRS code {code:?}")]
    UnknownCrs { endpoint: Endpoint, code: String },

    /// A region that no station in the network belongs to
    #[error("no station in region {0:?}")]
    UnknownRegion(String),

    /// The station's region has no other hub to route through
    #[error("no hub station in region {region:?} for {station}")]
    NoRegionalHub { station: Crs, region: String },
}
