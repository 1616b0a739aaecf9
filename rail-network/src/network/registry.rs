//! The station registry.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::domain::{Crs, Station};

use super::error::{Endpoint, NetworkError};

/// A national rail network: every station, keyed by CRS code.
///
/// Iteration follows input order, which makes hub listings and
/// closest-hub tie-breaks deterministic for a given input.
///
/// # Invariants
///
/// - No two stations share a CRS code
/// - The station set never changes after construction
#[derive(Debug, Clone)]
pub struct RailNetwork {
    stations: IndexMap<Crs, Station>,
}

impl RailNetwork {
    /// Build a network from stations, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateCrs`] if two stations share a CRS code.
    pub fn new(stations: impl IntoIterator<Item = Station>) -> Result<Self, NetworkError> {
        let mut by_crs = IndexMap::new();

        for station in stations {
            match by_crs.entry(station.crs()) {
                Entry::Occupied(entry) => return Err(NetworkError::DuplicateCrs(*entry.key())),
                Entry::Vacant(entry) => {
                    entry.insert(station);
                }
            }
        }

        debug!(stations = by_crs.len(), "Built rail network");

        Ok(Self { stations: by_crs })
    }

    /// Number of stations in the network.
    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations, in input order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.values()
    }

    pub fn get(&self, crs: &Crs) -> Option<&Station> {
        self.stations.get(crs)
    }

    /// Look up a station by its textual CRS code.
    ///
    /// Malformed codes simply match nothing.
    pub fn station(&self, code: &str) -> Option<&Station> {
        Crs::parse(code).ok().and_then(|crs| self.get(&crs))
    }

    /// Look up a station, reporting which argument was unknown on failure.
    pub(crate) fn require(&self, code: &str, endpoint: Endpoint) -> Result<&Station, NetworkError> {
        self.station(code).ok_or_else(|| NetworkError::UnknownCrs {
            endpoint,
            code: code.to_string(),
        })
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.stations().map(Station::region).collect()
    }

    /// Hub stations in input order, optionally restricted to one region.
    ///
    /// A known region without hubs yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownRegion`] if `region` is given but no
    /// station belongs to it.
    pub fn hub_stations(&self, region: Option<&str>) -> Result<Vec<&Station>, NetworkError> {
        let Some(region) = region else {
            return Ok(self.stations().filter(|s| s.is_hub()).collect());
        };

        if !self.stations().any(|s| s.region() == region) {
            return Err(NetworkError::UnknownRegion(region.to_string()));
        }

        Ok(self
            .stations()
            .filter(|s| s.is_hub() && s.region() == region)
            .collect())
    }

    /// The nearest hub in `station`'s region, other than `station` itself.
    ///
    /// Equidistant hubs resolve to whichever comes first in input order.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NoRegionalHub`] if the region has no other hub.
    pub fn closest_hub(&self, station: &Station) -> Result<&Station, NetworkError> {
        self.stations()
            .filter(|s| s.is_hub() && s.region() == station.region() && s.crs() != station.crs())
            .map(|hub| (hub, station.distance_to(hub)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(hub, _)| hub)
            .ok_or_else(|| NetworkError::NoRegionalHub {
                station: station.crs(),
                region: station.region().to_string(),
            })
    }
}
