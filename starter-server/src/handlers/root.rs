//! Root endpoint handler

use crate::extract::RequestedVersion;
use axum::Json;
use starter_core::{handle_root, RootResponse};

/// Greeting endpoint; the body shape depends on the requested API version
pub async fn read_root(RequestedVersion(version): RequestedVersion) -> Json<RootResponse> {
    Json(handle_root(version))
}
