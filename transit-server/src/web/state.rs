//! Application state for the web layer.

use std::sync::Arc;

use crate::network::TransitNetwork;

/// Shared application state: the frozen network.
///
/// Handlers only read, so the `Arc` is the whole synchronization story.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<TransitNetwork>,
}

impl AppState {
    pub fn new(network: TransitNetwork) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
