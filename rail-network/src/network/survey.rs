//! Network-wide fare surveys.

use tracing::debug;

use crate::domain::Station;

use super::error::{Endpoint, NetworkError};
use super::registry::RailNetwork;

/// The fare from one station to a fixed destination.
#[derive(Debug, Clone, Copy)]
pub struct StationFare<'a> {
    pub station: &'a Station,
    pub fare: f64,
}

impl RailNetwork {
    /// Fares from every other station to `dest`, in network order.
    ///
    /// Journeys the planner cannot route (no regional hub at either end) are
    /// skipped rather than failing the whole survey.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownCrs`] if `dest` is not in the network.
    pub fn fares_to(&self, dest: &str) -> Result<Vec<StationFare<'_>>, NetworkError> {
        let dest = self.require(dest, Endpoint::Destination)?;
        let mut fares = Vec::with_capacity(self.n_stations().saturating_sub(1));

        for station in self.stations().filter(|s| s.crs() != dest.crs()) {
            match self.price(station, dest) {
                Ok(summary) => fares.push(StationFare {
                    station,
                    fare: summary.total(),
                }),
                Err(NetworkError::NoRegionalHub { station: stuck, region }) => {
                    debug!(
                        from = %station.crs(),
                        to = %dest.crs(),
                        hubless = %stuck,
                        region = %region,
                        "Skipping unroutable journey"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(fares)
    }
}

/// One equal-width bucket of a [`FareHistogram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of fares spanning their minimum to maximum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FareHistogram {
    bins: Vec<HistogramBin>,
}

impl FareHistogram {
    /// Bucket `fares` into `bins` equal-width bins.
    ///
    /// The maximum fare lands in the last bin. No fares (or zero bins) gives
    /// an empty histogram; identical fares give a single bin.
    pub fn new(fares: &[f64], bins: usize) -> Self {
        if fares.is_empty() || bins == 0 {
            return Self::default();
        }

        let min = fares.iter().copied().fold(f64::INFINITY, f64::min);
        let max = fares.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: fares.len(),
                }],
            };
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for fare in fares {
            let idx = ((fare - min) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + width * i as f64,
                upper: if i + 1 == bins {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count,
            })
            .collect();

        Self { bins }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of fares counted.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Height of the tallest bin.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
