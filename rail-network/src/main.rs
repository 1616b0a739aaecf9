use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rail_network::config::ServerConfig;
use rail_network::loader::read_rail_network;
use rail_network::web::{AppState, create_router, shutdown_on};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rail_network=info,tower_http=debug")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast on bad station data
    let network = match read_rail_network(&config.stations_path) {
        Ok(network) => network,
        Err(e) => {
            error!("Failed to load stations: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stations = network.n_stations(),
        regions = network.regions().len(),
        hubs = network.hub_stations(None).map(|h| h.len()).unwrap_or(0),
        "Rail network ready"
    );

    let addr = config.addr;
    let app = create_router(AppState::new(network, config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Rail network planner listening on http://{addr}");
    info!("  GET /regions                      - Region names");
    info!("  GET /stations                     - All stations");
    info!("  GET /stations/hubs?region=        - Hub stations");
    info!("  GET /stations/:crs/closest-hub    - Nearest regional hub");
    info!("  GET /journey/plan?start=&dest=    - Plan a journey");
    info!("  GET /journey/fare?start=&dest=    - Price a journey");
    info!("  GET /plot/network                 - Network map (SVG)");
    info!("  GET /plot/journey?start=&dest=    - Journey map (SVG)");
    info!("  GET /plot/fares/:crs              - Fare histogram (SVG)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
    {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
