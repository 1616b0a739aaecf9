//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default station data file, relative to the working directory.
const DEFAULT_STATIONS_PATH: &str = "data/stations.csv";

/// Error from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bind address did not parse
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    /// Numeric setting did not parse or is zero
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// CSV file of stations to load at startup.
    pub stations_path: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,

    /// Number of bins in fare histograms.
    pub histogram_bins: usize,

    /// Station marker diameter on network plots (pixels).
    pub marker_size: u32,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `RAIL_STATIONS_CSV` | `data/stations.csv` |
    /// | `RAIL_BIND_ADDR` | `127.0.0.1:3000` |
    /// | `RAIL_HISTOGRAM_BINS` | `10` |
    /// | `RAIL_MARKER_SIZE` | `5` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("RAIL_STATIONS_CSV") {
            config.stations_path = PathBuf::from(path);
        }

        if let Some(value) = lookup("RAIL_BIND_ADDR") {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: "RAIL_BIND_ADDR",
                value,
            })?;
        }

        if let Some(value) = lookup("RAIL_HISTOGRAM_BINS") {
            config.histogram_bins = parse_positive("RAIL_HISTOGRAM_BINS", value)?;
        }

        if let Some(value) = lookup("RAIL_MARKER_SIZE") {
            config.marker_size = parse_positive("RAIL_MARKER_SIZE", value)?;
        }

        Ok(config)
    }
}

fn parse_positive<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from(DEFAULT_STATIONS_PATH),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            histogram_bins: 10,
            marker_size: 5,
        }
    }
}
