//! CSV station data loader.
//!
//! Reads rows with the header `name,region,crs,latitude,longitude,hub`
//! (columns may appear in any order) and builds a [`RailNetwork`]. The hub
//! column holds `1` or `0`. Any invalid row fails the whole load.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{Station, StationError};
use crate::network::{NetworkError, RailNetwork};

/// Errors that can occur while loading station data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV, a missing column, or a non-numeric coordinate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Hub column is neither "1" nor "0"
    #[error("row {row}: hub flag must be \"1\" or \"0\", got {value:?}")]
    InvalidHubFlag { row: usize, value: String },

    /// A row failed station validation
    #[error("row {row}: {source}")]
    Station {
        row: usize,
        #[source]
        source: StationError,
    },

    /// The rows could not form a network (duplicate CRS)
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// One data row as it appears in the file.
#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    region: String,
    crs: String,
    latitude: f64,
    longitude: f64,
    hub: String,
}

impl StationRecord {
    /// Validate into a station. `row` is 1-based, header excluded.
    fn into_station(self, row: usize) -> Result<Station, LoadError> {
        let hub = match self.hub.as_str() {
            "1" => true,
            "0" => false,
            _ => {
                return Err(LoadError::InvalidHubFlag {
                    row,
                    value: self.hub,
                });
            }
        };

        Station::new(
            self.name,
            self.region,
            &self.crs,
            self.latitude,
            self.longitude,
            hub,
        )
        .map_err(|source| LoadError::Station { row, source })
    }
}

/// Load a rail network from a CSV file.
pub fn read_rail_network(path: impl AsRef<Path>) -> Result<RailNetwork, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let network = parse_rail_network(file)?;
    info!(
        path = %path.display(),
        stations = network.n_stations(),
        "Loaded rail network"
    );

    Ok(network)
}

/// Parse a rail network from any CSV source.
pub fn parse_rail_network<R: io::Read>(reader: R) -> Result<RailNetwork, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut stations = Vec::new();
    for (idx, record) in reader.deserialize::<StationRecord>().enumerate() {
        let station = record?.into_station(idx + 1)?;
        stations.push(station);
    }

    debug!(rows = stations.len(), "Parsed station rows");

    Ok(RailNetwork::new(stations)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::CoordinateError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "name,region,crs,latitude,longitude,hub\n";

    fn parse(body: &str) -> Result<RailNetwork, LoadError> {
        parse_rail_network(format!("{HEADER}{body}").as_bytes())
    }

    fn shipped_data() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/stations.csv")
    }

    #[test]
    fn parses_rows() {
        let net = parse(
            "Brighton,South East,BTN,50.829659,-0.141234,1\n\
             Edinburgh Park,Scotland,EDP,55.927615,-3.307829,0\n",
        )
        .unwrap();

        assert_eq!(net.n_stations(), 2);
        let btn = net.station("BTN").unwrap();
        assert_eq!(btn.name(), "Brighton");
        assert_eq!(btn.region(), "South East");
        assert!(btn.is_hub());
        assert!(!net.station("EDP").unwrap().is_hub());
    }

    #[test]
    fn columns_may_be_reordered() {
        let csv = "crs,hub,name,longitude,latitude,region\n\
                   KGX,1,London Kings Cross,-0.122907,51.530827,London\n";
        let net = parse_rail_network(csv.as_bytes()).unwrap();
        let kgx = net.station("KGX").unwrap();
        assert_eq!(kgx.latitude(), 51.530827);
        assert_eq!(kgx.region(), "London");
    }

    #[test]
    fn header_only_gives_empty_network() {
        let net = parse("").unwrap();
        assert!(net.is_empty());
    }

    #[test]
    fn rejects_bad_hub_flag() {
        let err = parse(
            "Brighton,South East,BTN,50.8,-0.1,1\n\
             Lewes,South East,LWS,50.8,0.01,yes\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidHubFlag { row: 2, ref value } if value == "yes"
        ));
    }

    #[test]
    fn rejects_bad_crs() {
        let err = parse("Brighton,South East,Btn,50.8,-0.1,1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Station {
                row: 1,
                source: StationError::InvalidCrsFormat(_)
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = parse("Brighton,South East,BTN,95.0,-0.1,1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Station {
                row: 1,
                source: StationError::OutOfRange(CoordinateError::LatitudeOutOfRange(_))
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let err = parse("Brighton,South East,BTN,north,-0.1,1\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "name,region,crs,latitude,longitude\nBrighton,South East,BTN,50.8,-0.1\n";
        let err = parse_rail_network(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn rejects_duplicate_crs() {
        let err = parse(
            "Brighton,South East,BTN,50.8,-0.1,1\n\
             Brighton Again,South East,BTN,50.9,-0.2,0\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Network(NetworkError::DuplicateCrs(_))
        ));
    }

    #[test]
    fn reads_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{HEADER}Brighton,South East,BTN,50.829659,-0.141234,1\n\
             London Kings Cross,London,KGX,51.530827,-0.122907,1\n\
             Edinburgh Park,Scotland,EDP,55.927615,-3.307829,0\n"
        )
        .unwrap();

        let net = read_rail_network(file.path()).unwrap();
        assert_eq!(net.n_stations(), 3);
    }

    #[test]
    fn shipped_dataset_loads() {
        let path = shipped_data();
        let rows = std::fs::read_to_string(&path).unwrap().lines().count() - 1;

        let net = read_rail_network(&path).unwrap();
        assert_eq!(net.n_stations(), rows);
        assert_eq!(net.regions().len(), 5);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_rail_network("/nonexistent/stations.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/stations.csv"));
    }
}
