//! Application state

use starter_core::VersionStrategy;

/// Shared application state
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    /// Header the requested API version is read from
    pub strategy: VersionStrategy,
}

impl AppState {
    /// Create state for the given versioning strategy
    pub fn new(strategy: VersionStrategy) -> Self {
        Self { strategy }
    }
}
