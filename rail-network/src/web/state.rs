//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::network::RailNetwork;

/// Shared application state.
///
/// The network is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rail network
    pub network: Arc<RailNetwork>,

    /// Server configuration (plot settings)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: RailNetwork, config: ServerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
