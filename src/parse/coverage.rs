//! coverage.py JSON export.
//!
//! Percentages round to 2 decimals. No cap here; the below-threshold view
//! is derived (and clipped) at gate evaluation so sorting happens before
//! truncation.

use crate::error::Result;
use crate::models::CoverageFile;
use crate::parse::read_json;
use serde_json::Value as Json;
use std::path::Path;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn percent_of(value: Option<&Json>) -> f64 {
    round2(value.and_then(Json::as_f64).unwrap_or(0.0))
}

/// Parse a coverage export into `(global_percent, files)`. Missing or
/// non-object input degrades to `(0.0, [])`.
pub fn parse_coverage(path: &Path) -> Result<(f64, Vec<CoverageFile>)> {
    let data = read_json(path)?;
    let Some(obj) = data.as_object() else {
        return Ok((0.0, Vec::new()));
    };

    let total = percent_of(obj.get("totals").and_then(|t| t.get("percent_covered")));
    let mut files = Vec::new();
    if let Some(map) = obj.get("files").and_then(Json::as_object) {
        for (fp, info) in map {
            let percent = percent_of(info.get("summary").and_then(|s| s.get("percent_covered")));
            let missing_lines = info
                .get("missing_lines")
                .and_then(Json::as_array)
                .map(|a| a.iter().filter_map(Json::as_u64).collect())
                .unwrap_or_default();
            files.push(CoverageFile {
                path: fp.clone(),
                percent,
                missing_lines,
            });
        }
    }
    Ok((total, files))
}
