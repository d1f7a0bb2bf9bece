//! JSON and YAML output

use crate::error::{Result, TikHubError};
use crate::tikhub::ItemResult;

/// Pretty JSON array of `{json, itemIndex}` envelopes
pub fn render_json(results: &[ItemResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// YAML sequence of `{json, itemIndex}` envelopes
pub fn render_yaml(results: &[ItemResult]) -> Result<String> {
    serde_yml::to_string(results)
        .map_err(|e| TikHubError::Json(format!("YAML serialization failed: {}", e)))
}
