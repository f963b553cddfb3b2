//! Application state.

use senti_core::RelayService;

/// Application state shared across handlers.
///
/// Holds the relay over its injected client; there is no per-request or
/// cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub relay: RelayService,
}

impl AppState {
    pub fn new(relay: RelayService) -> Self {
        Self { relay }
    }
}
