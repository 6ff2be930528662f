//! Starter Core Library
//!
//! This crate holds the API versioning rules for the starter service: turning a
//! raw request header into an [`ApiVersion`] and shaping the root response for
//! that version. Nothing here performs I/O; the server and CLI crates supply the
//! header text and serialize the result.

pub mod error;
pub mod response;
pub mod version;

pub use error::{Result, StarterError};
pub use response::{handle_root, RootResponse, GREETING};
pub use version::{
    resolve_dedicated, resolve_version, ApiVersion, VersionStrategy, LATEST_API_VERSION,
};
