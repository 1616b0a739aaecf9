//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::network::{Endpoint, NetworkError};
use crate::plot::{self, PlotError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/regions", get(regions))
        .route("/stations", get(stations))
        .route("/stations/hubs", get(hub_stations))
        .route("/stations/:crs/closest-hub", get(closest_hub))
        .route("/journey/plan", get(plan_journey))
        .route("/journey/fare", get(journey_fare))
        .route("/plot/network", get(plot_network))
        .route("/plot/journey", get(plot_journey))
        .route("/plot/fares/:crs", get(plot_fares_to))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    let regions = state
        .network
        .regions()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(RegionsResponse { regions })
}

async fn stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse {
        n_stations: state.network.n_stations(),
        stations: state.network.stations().map(StationResult::from).collect(),
    })
}

async fn hub_stations(
    State(state): State<AppState>,
    Query(req): Query<HubStationsRequest>,
) -> Result<Json<HubStationsResponse>, AppError> {
    let hubs = state
        .network
        .hub_stations(req.region.as_deref())?
        .into_iter()
        .map(StationResult::from)
        .collect();

    Ok(Json(HubStationsResponse {
        region: req.region,
        hubs,
    }))
}

async fn closest_hub(
    State(state): State<AppState>,
    Path(crs): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    let station = state
        .network
        .station(&crs)
        .ok_or(NetworkError::UnknownCrs {
            endpoint: Endpoint::Station,
            code: crs.clone(),
        })?;

    let hub = state.network.closest_hub(station)?;
    Ok(Json(StationResult::from(hub)))
}

async fn plan_journey(
    State(state): State<AppState>,
    Query(req): Query<JourneyRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state.network.journey_planner(&req.start, &req.dest)?;
    Ok(Json(RouteResponse::from(&route)))
}

async fn journey_fare(
    State(state): State<AppState>,
    Query(req): Query<JourneyRequest>,
) -> Result<Json<FareResponse>, AppError> {
    let summary = state.network.fare_summary(&req.start, &req.dest)?;
    Ok(Json(FareResponse::from(&summary)))
}

async fn plot_network(State(state): State<AppState>) -> Result<Response, AppError> {
    let svg = plot::render_network(&state.network, state.config.marker_size)?;
    Ok(svg_response(svg))
}

async fn plot_journey(
    State(state): State<AppState>,
    Query(req): Query<JourneyRequest>,
) -> Result<Response, AppError> {
    let svg = plot::render_journey(&state.network, &req.start, &req.dest)?;
    Ok(svg_response(svg))
}

async fn plot_fares_to(
    State(state): State<AppState>,
    Path(crs): Path<String>,
) -> Result<Response, AppError> {
    let svg = plot::render_fares_to(&state.network, &crs, state.config.histogram_bins)?;
    Ok(svg_response(svg))
}

fn svg_response(svg: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::UnknownCrs { .. } | NetworkError::UnknownRegion(_) => {
                AppError::NotFound { message }
            }
            NetworkError::NoRegionalHub { .. } | NetworkError::DuplicateCrs(_) => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl From<PlotError> for AppError {
    fn from(e: PlotError) -> Self {
        match e {
            PlotError::Network(e) => e.into(),
            PlotError::Template(e) => AppError::Internal {
                message: format!("Template error: {}", e),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
