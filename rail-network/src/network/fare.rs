//! Fare calculation.
//!
//! A journey's fare is the sum of its leg fares. Each leg is priced from its
//! great-circle length and, when it crosses a region boundary, from the number
//! of hubs in the region it arrives in.

use std::fmt;

use crate::domain::Station;

use super::error::{Endpoint, NetworkError};
use super::planner::Route;
use super::registry::RailNetwork;

/// Price of a single leg in GBP.
///
/// `fare = 1 + d * exp(-d / 100) * (1 + (different_regions * hubs_in_dest_region) / 10)`
///
/// `different_regions` is 1 when the leg crosses a region boundary and 0
/// otherwise.
///
/// # Examples
///
/// ```
/// use rail_network::network::fare_price;
///
/// let fare = fare_price(100.0, 1, 3);
/// assert!((fare - 48.824).abs() < 1e-3);
/// assert_eq!(fare_price(0.0, 1, 10), 1.0);
/// ```
pub fn fare_price(distance_km: f64, different_regions: u8, hubs_in_dest_region: usize) -> f64 {
    let regional_factor = (usize::from(different_regions) * hubs_in_dest_region) as f64 / 10.0;
    1.0 + distance_km * (-distance_km / 100.0).exp() * (1.0 + regional_factor)
}

/// The priced components of one leg.
#[derive(Debug, Clone)]
pub struct LegFare<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub distance_km: f64,
    /// 1 if `from` and `to` are in different regions, else 0
    pub different_regions: u8,
    /// Hub stations in `to`'s region
    pub hubs_in_dest_region: usize,
    pub fare: f64,
}

/// A priced journey.
#[derive(Debug, Clone)]
pub struct FareSummary<'a> {
    route: Route<'a>,
    legs: Vec<LegFare<'a>>,
}

impl<'a> FareSummary<'a> {
    pub fn route(&self) -> &Route<'a> {
        &self.route
    }

    pub fn legs(&self) -> &[LegFare<'a>] {
        &self.legs
    }

    /// Total fare in GBP.
    pub fn total(&self) -> f64 {
        self.legs.iter().map(|leg| leg.fare).sum()
    }
}

impl fmt::Display for FareSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.route.origin();
        let destination = self.route.destination();
        writeln!(
            f,
            "Journey from {} ({}) to {} ({})",
            origin.name(),
            origin.crs(),
            destination.name(),
            destination.crs()
        )?;
        writeln!(f, "Route: {}", self.route)?;
        write!(f, "Fare: £{:.2}", self.total())
    }
}

impl RailNetwork {
    /// Total fare in GBP for the planned route between two stations.
    ///
    /// Fails exactly when [`RailNetwork::journey_planner`] does.
    pub fn journey_fare(&self, start: &str, dest: &str) -> Result<f64, NetworkError> {
        Ok(self.fare_summary(start, dest)?.total())
    }

    /// Plan and price a journey, keeping the per-leg breakdown.
    pub fn fare_summary(&self, start: &str, dest: &str) -> Result<FareSummary<'_>, NetworkError> {
        let start = self.require(start, Endpoint::Start)?;
        let dest = self.require(dest, Endpoint::Destination)?;
        self.price(start, dest)
    }

    pub(crate) fn price<'a>(
        &'a self,
        start: &'a Station,
        dest: &'a Station,
    ) -> Result<FareSummary<'a>, NetworkError> {
        let route = self.plan(start, dest)?;

        let legs = route
            .legs()
            .map(|(from, to)| self.price_leg(from, to))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FareSummary { route, legs })
    }

    fn price_leg<'a>(
        &'a self,
        from: &'a Station,
        to: &'a Station,
    ) -> Result<LegFare<'a>, NetworkError> {
        let distance_km = from.distance_to(to);
        let different_regions = u8::from(from.region() != to.region());
        let hubs_in_dest_region = self.hub_stations(Some(to.region()))?.len();

        Ok(LegFare {
            from,
            to,
            distance_km,
            different_regions,
            hubs_in_dest_region,
            fare: fare_price(distance_km, different_regions, hubs_in_dest_region),
        })
    }
}
