//! Respond command implementation

use anyhow::{Context, Result};
use starter_core::{handle_root, VersionStrategy};

/// Print the root response body for a header value
pub fn respond(strategy: VersionStrategy, value: Option<&str>) -> Result<()> {
    let version = strategy.resolve(value);
    let body = serde_json::to_string_pretty(&handle_root(version))
        .context("Failed to serialize response body")?;

    println!("{}", body);
    Ok(())
}
