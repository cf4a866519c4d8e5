//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::Network;
use crate::index::StopIndex;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The network and its index are built once at startup and only read
/// afterwards, so handlers share them without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded tram network
    pub network: Arc<Network>,

    /// Stop lookup derived from `network`
    pub index: Arc<StopIndex>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state, building the stop index from `network`.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        let index = StopIndex::build(&network);
        Self {
            network: Arc::new(network),
            index: Arc::new(index),
            config: Arc::new(config),
        }
    }
}
