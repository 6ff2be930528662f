//! Error types for Starter Core

use thiserror::Error;

/// Result type alias using StarterError
pub type Result<T> = std::result::Result<T, StarterError>;

/// Errors raised while configuring versioning.
///
/// Version resolution itself never fails; these only come up when a
/// deployment selects its strategy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StarterError {
    #[error("Unknown versioning strategy: {0} (expected \"accept\" or \"header\")")]
    UnknownStrategy(String),
}
