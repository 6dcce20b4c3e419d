use crate::chart::ChartBindings;
use anyhow::{Context, Result};
use std::fs;

/// Parse a JSON array of chart bindings.
pub fn parse_chart_bindings(contents: &str) -> Result<Vec<ChartBindings>> {
    serde_json::from_str(contents).context("Chart bindings must be a JSON array of chart objects")
}

/// Read and parse the chart bindings file at `path`.
pub fn load_chart_bindings(path: &str) -> Result<Vec<ChartBindings>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart bindings from {path}"))?;
    parse_chart_bindings(&contents).with_context(|| format!("Invalid chart bindings in {path}"))
}
