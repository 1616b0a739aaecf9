//! Web layer for the rail network.
//!
//! Exposes the registry, planner and fare queries as JSON endpoints, and
//! the plots as SVG.

mod dto;
mod routes;
mod state;

use std::future::Future;
use std::io;

use tracing::{info, warn};

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

/// Resolves once `signal` fires.
///
/// If the signal handler cannot be installed this never resolves, so the
/// server keeps running instead of stopping straight after startup.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal, graceful shutdown disabled: {e}");
            std::future::pending::<()>().await;
        }
    }
}
