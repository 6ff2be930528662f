//! Root endpoint response shapes

use crate::version::ApiVersion;
use serde::Serialize;

/// Greeting returned by the root endpoint in every version
pub const GREETING: &str = "Hello, FastAPI starter!";

/// Body of `GET /`, shaped by the requested version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RootResponse {
    /// Version 1: the greeting alone
    V1 { message: &'static str },

    /// Version 2 and later: greeting, echoed version and status
    Current {
        message: &'static str,
        version: ApiVersion,
        status: &'static str,
    },
}

impl RootResponse {
    /// Version echoed in the body, if this shape carries one
    pub fn version(&self) -> Option<ApiVersion> {
        match self {
            Self::V1 { .. } => None,
            Self::Current { version, .. } => Some(*version),
        }
    }
}

/// Build the root response for a resolved version.
///
/// Versions above the latest are echoed as-is rather than capped.
pub fn handle_root(version: ApiVersion) -> RootResponse {
    if version.get() == 1 {
        RootResponse::V1 { message: GREETING }
    } else {
        RootResponse::Current {
            message: GREETING,
            version,
            status: "ok",
        }
    }
}
