//! JSON reporter
//!
//! Outputs the full ComparisonReport as pretty-printed JSON. Missing
//! statistics ("insufficient data") are emitted as `null`.

use crate::models::ComparisonReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
