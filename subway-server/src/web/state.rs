//! Application state for the web layer.

use crate::network::SubwayNetwork;

/// Shared application state.
///
/// Cloning is cheap: the network registry is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Stations, lines and the combined graph cache
    pub network: SubwayNetwork,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: SubwayNetwork) -> Self {
        Self { network }
    }
}
