//! Request extractors

use crate::state::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use starter_core::ApiVersion;
use std::convert::Infallible;

/// API version requested by the client.
///
/// Read from whichever header the configured strategy names. Never rejects:
/// missing or malformed input resolves to a valid version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedVersion(pub ApiVersion);

#[async_trait]
impl FromRequestParts<AppState> for RequestedVersion {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let strategy = state.strategy;
        // Non-UTF-8 header values count as absent
        let header = parts
            .headers
            .get(strategy.header_name())
            .and_then(|value| value.to_str().ok());

        let version = strategy.resolve(header);
        tracing::debug!(%strategy, header = ?header, %version, "Resolved API version");

        Ok(Self(version))
    }
}
