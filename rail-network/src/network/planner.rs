//! Hub-routing journey planner.
//!
//! Every journey is built from at most one hop to a hub on each side:
//!
//! 1. Same region, or both ends are hubs: go direct.
//! 2. Neither end is a hub: origin, its closest hub, the destination's
//!    closest hub, destination.
//! 3. Only the origin is a hub: origin, the destination's closest hub,
//!    destination.
//! 4. Only the destination is a hub: origin, its closest hub, destination.
//!
//! This is a greedy heuristic over a conceptually complete graph, not a
//! shortest-path search. Chains of more than one hub per side are never
//! considered.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Crs, Station};

use super::error::{Endpoint, NetworkError};
use super::registry::RailNetwork;

/// Which planner case produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Same region or hub to hub
    Direct,
    /// Non-hub to non-hub in different regions
    ViaBothHubs,
    /// Hub origin, non-hub destination
    ViaDestinationHub,
    /// Non-hub origin, hub destination
    ViaOriginHub,
}

/// A planned journey: 2 to 4 stations travelled in order.
///
/// # Invariants
///
/// - First station is the origin, last is the destination
/// - Every intermediate station is a hub
#[derive(Debug, Clone)]
pub struct Route<'a> {
    kind: RouteKind,
    stations: Vec<&'a Station>,
}

impl<'a> Route<'a> {
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// The stations visited, origin first.
    pub fn stations(&self) -> &[&'a Station] {
        &self.stations
    }

    pub fn origin(&self) -> &'a Station {
        self.stations[0]
    }

    pub fn destination(&self) -> &'a Station {
        self.stations[self.stations.len() - 1]
    }

    /// Number of stations on the route (2, 3 or 4).
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Consecutive station pairs, in travel order.
    pub fn legs(&self) -> impl Iterator<Item = (&'a Station, &'a Station)> + '_ {
        self.stations.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn codes(&self) -> Vec<Crs> {
        self.stations.iter().map(|s| s.crs()).collect()
    }
}

impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", station.crs())?;
        }
        Ok(())
    }
}

impl RailNetwork {
    /// Plan a route between two stations given by CRS code.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::UnknownCrs`] naming whichever code is not in the network
    /// - [`NetworkError::NoRegionalHub`] if a required closest hub does not exist
    pub fn journey_planner(&self, start: &str, dest: &str) -> Result<Route<'_>, NetworkError> {
        let start = self.require(start, Endpoint::Start)?;
        let dest = self.require(dest, Endpoint::Destination)?;
        self.plan(start, dest)
    }

    /// Plan a route between two stations already resolved from this network.
    pub(crate) fn plan<'a>(
        &'a self,
        start: &'a Station,
        dest: &'a Station,
    ) -> Result<Route<'a>, NetworkError> {
        let (kind, stations) = match (start.is_hub(), dest.is_hub()) {
            _ if start.region() == dest.region() => (RouteKind::Direct, vec![start, dest]),
            (true, true) => (RouteKind::Direct, vec![start, dest]),
            (false, false) => (
                RouteKind::ViaBothHubs,
                vec![start, self.closest_hub(start)?, self.closest_hub(dest)?, dest],
            ),
            (true, false) => (
                RouteKind::ViaDestinationHub,
                vec![start, self.closest_hub(dest)?, dest],
            ),
            (false, true) => (
                RouteKind::ViaOriginHub,
                vec![start, self.closest_hub(start)?, dest],
            ),
        };

        let route = Route { kind, stations };
        debug!(from = %start.crs(), to = %dest.crs(), kind = ?kind, route = %route, "Planned journey");

        Ok(route)
    }
}
