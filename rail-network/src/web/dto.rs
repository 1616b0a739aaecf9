//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Crs, Station};
use crate::network::{FareSummary, LegFare, Route, RouteKind};

/// Query for the hub listing.
#[derive(Debug, Deserialize)]
pub struct HubStationsRequest {
    /// Restrict to one region
    pub region: Option<String>,
}

/// Query naming a journey's two ends by CRS code.
#[derive(Debug, Deserialize)]
pub struct JourneyRequest {
    pub start: String,
    pub dest: String,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub crs: Crs,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub hub: bool,
}

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            crs: station.crs(),
            name: station.name().to_string(),
            region: station.region().to_string(),
            latitude: station.latitude(),
            longitude: station.longitude(),
            hub: station.is_hub(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    /// Sorted region names
    pub regions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub n_stations: usize,
    pub stations: Vec<StationResult>,
}

#[derive(Debug, Serialize)]
pub struct HubStationsResponse {
    pub region: Option<String>,
    pub hubs: Vec<StationResult>,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub kind: RouteKind,
    pub stations: Vec<StationResult>,
}

impl From<&Route<'_>> for RouteResponse {
    fn from(route: &Route<'_>) -> Self {
        Self {
            kind: route.kind(),
            stations: route.stations().iter().map(|s| StationResult::from(*s)).collect(),
        }
    }
}

/// One priced leg.
#[derive(Debug, Serialize)]
pub struct LegFareResult {
    pub from: Crs,
    pub to: Crs,
    pub distance_km: f64,
    pub different_regions: u8,
    pub hubs_in_dest_region: usize,
    pub fare: f64,
}

impl From<&LegFare<'_>> for LegFareResult {
    fn from(leg: &LegFare<'_>) -> Self {
        Self {
            from: leg.from.crs(),
            to: leg.to.crs(),
            distance_km: leg.distance_km,
            different_regions: leg.different_regions,
            hubs_in_dest_region: leg.hubs_in_dest_region,
            fare: leg.fare,
        }
    }
}

/// A priced journey.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub route: Vec<Crs>,
    pub legs: Vec<LegFareResult>,
    /// Total fare in GBP
    pub total: f64,
    /// Human-readable summary
    pub summary: String,
}

impl From<&FareSummary<'_>> for FareResponse {
    fn from(summary: &FareSummary<'_>) -> Self {
        Self {
            route: summary.route().codes(),
            legs: summary.legs().iter().map(LegFareResult::from).collect(),
            total: summary.total(),
            summary: summary.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
