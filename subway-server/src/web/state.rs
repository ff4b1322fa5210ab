//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::Network;

/// Shared application state.
///
/// Every request goes through the one lock, so section mutations on a line
/// never interleave.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<RwLock<Network>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
