//! Bandit security findings and the security gate.
//!
//! Known limitation, kept to match the upstream contract: the blocking
//! check runs over the clipped first `max_items` results only, so findings
//! past the cap can never trip the gate.

use crate::config::FailOnSeverity;
use crate::error::Result;
use crate::models::SecurityIssue;
use crate::parse::read_json;
use serde_json::Value as Json;
use std::path::Path;

/// Case-insensitive bandit severity ordering; unknown strings rank lowest.
fn severity_rank(severity: &str) -> u8 {
    match severity.to_ascii_lowercase().as_str() {
        "low" => 1,
        "medium" => 2,
        "high" => 3,
        _ => 0,
    }
}

/// String-coerce a severity/confidence value; absent keys default to "LOW".
fn coerce_str(value: Option<&Json>) -> String {
    match value {
        None => "LOW".to_string(),
        Some(Json::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn str_field(value: &Json, key: &str) -> String {
    value
        .get(key)
        .and_then(Json::as_str)
        .unwrap_or("")
        .to_string()
}

/// Parse bandit's JSON output into `(issues, blocking)`. Missing or
/// non-object input degrades to `([], false)`. `blocking` is always false
/// at the `none` threshold, else true iff any clipped issue ranks at or
/// above it.
pub fn parse_bandit(
    path: &Path,
    fail_on: FailOnSeverity,
    max_items: usize,
) -> Result<(Vec<SecurityIssue>, bool)> {
    let data = read_json(path)?;
    let Some(obj) = data.as_object() else {
        return Ok((Vec::new(), false));
    };

    let mut issues = Vec::new();
    if let Some(results) = obj.get("results").and_then(Json::as_array) {
        for item in results.iter().take(max_items) {
            issues.push(SecurityIssue {
                filename: str_field(item, "filename"),
                line_number: item
                    .get("line_number")
                    .and_then(Json::as_u64)
                    .unwrap_or(0),
                severity: coerce_str(item.get("issue_severity")),
                confidence: coerce_str(item.get("issue_confidence")),
                test_id: str_field(item, "test_id"),
                test_name: str_field(item, "test_name"),
                issue_text: item
                    .get("issue_text")
                    .and_then(Json::as_str)
                    .unwrap_or("")
                    .trim()
                    .to_string(),
            });
        }
    }

    let threshold = fail_on.rank();
    let blocking = threshold > 0
        && issues
            .iter()
            .any(|i| severity_rank(&i.severity) >= threshold);
    Ok((issues, blocking))
}
