//! Resolve command implementation

use anyhow::Result;
use serde::Serialize;
use starter_core::{ApiVersion, VersionStrategy};

/// Resolution output
#[derive(Serialize)]
struct Resolution {
    version: ApiVersion,
    strategy: String,
    header: &'static str,
}

/// Print the API version selected by a header value
pub fn resolve(strategy: VersionStrategy, value: Option<&str>, json: bool) -> Result<()> {
    let version = strategy.resolve(value);
    tracing::debug!(%strategy, value = ?value, %version, "Resolved API version");

    if json {
        let resolution = Resolution {
            version,
            strategy: strategy.to_string(),
            header: strategy.header_name(),
        };
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", version);
    }

    Ok(())
}
