//! The rail network registry, journey planner and fare calculator.
//!
//! [`RailNetwork`] owns the stations and answers region and hub queries.
//! Planning and pricing are methods on the same type, so everything a route
//! refers to borrows from one immutable registry.

mod error;
mod fare;
mod planner;
mod registry;
mod survey;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Endpoint, NetworkError};
pub use fare::{FareSummary, LegFare, fare_price};
pub use planner::{Route, RouteKind};
pub use registry::RailNetwork;
pub use survey::{FareHistogram, HistogramBin, StationFare};
