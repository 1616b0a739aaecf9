//! Shared fixtures for network tests.

use crate::domain::Station;

use super::RailNetwork;

pub(crate) fn station(
    name: &str,
    region: &str,
    crs: &str,
    latitude: f64,
    longitude: f64,
    hub: bool,
) -> Station {
    Station::new(name, region, crs, latitude, longitude, hub).unwrap()
}

pub(crate) fn network(stations: Vec<Station>) -> RailNetwork {
    RailNetwork::new(stations).unwrap()
}

/// The three-station network used in the planner walkthrough.
pub(crate) fn three_station_network() -> RailNetwork {
    network(vec![
        station("Brighton", "South East", "BTN", 50.829659, -0.141234, true),
        station("London Kings Cross", "London", "KGX", 51.530827, -0.122907, true),
        station("Edinburgh Park", "Scotland", "EDP", 55.927615, -3.307829, false),
    ])
}

/// Same rows as `data/stations.csv`.
///
/// Wales has no hub and North East has exactly one.
pub(crate) fn uk_network() -> RailNetwork {
    network(vec![
        station("Brighton", "South East", "BTN", 50.829659, -0.141234, true),
        station("Lewes", "South East", "LWS", 50.870500, 0.011500, false),
        station("Gatwick Airport", "South East", "GTW", 51.156500, -0.161000, true),
        station("London Kings Cross", "London", "KGX", 51.530827, -0.122907, true),
        station("London Paddington", "London", "PAD", 51.516500, -0.176900, true),
        station("Clapham Junction", "London", "CLJ", 51.464200, -0.170300, false),
        station("Edinburgh Park", "Scotland", "EDP", 55.927615, -3.307829, false),
        station("Edinburgh", "Scotland", "EDB", 55.952100, -3.189200, true),
        station("Glasgow Central", "Scotland", "GLC", 55.859000, -4.258000, true),
        station("Haymarket", "Scotland", "HYM", 55.945800, -3.218600, false),
        station("Newcastle", "North East", "NCL", 54.968300, -1.617400, true),
        station("Durham", "North East", "DHM", 54.779400, -1.581700, false),
        station("Aberystwyth", "Wales", "AYW", 52.414000, -4.081500, false),
    ])
}
