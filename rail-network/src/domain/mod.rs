//! Domain types for the rail network.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `Station` or `Crs` can trust its validity.

mod crs;
mod station;

pub use crs::{Crs, InvalidCrs};
pub use station::{Station, StationError};
