//! JSON rendering

use anyhow::{Context, Result};
use serde::Serialize;

/// Render `value` as pretty or single-line JSON
pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output")
}
