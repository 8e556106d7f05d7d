//! Pyright type-check results.
//!
//! Error/warning counts come from the unclipped `summary` block; only the
//! first `max_items` diagnostics are normalized into `TypeDiagnostic`s.
//! Pyright lines are 0-based and shift to 1-based here.

use crate::error::Result;
use crate::models::TypeDiagnostic;
use crate::parse::read_json;
use serde_json::Value as Json;
use std::path::Path;

fn str_field(value: &Json, key: &str) -> String {
    value
        .get(key)
        .and_then(Json::as_str)
        .unwrap_or("")
        .to_string()
}

/// Parse pyright's JSON output into `(errors, warnings, diagnostics)`.
/// Missing/non-object input and non-numeric counts degrade to zeros.
pub fn parse_pyright(path: &Path, max_items: usize) -> Result<(u64, u64, Vec<TypeDiagnostic>)> {
    let data = read_json(path)?;
    let Some(obj) = data.as_object() else {
        return Ok((0, 0, Vec::new()));
    };

    let summary = obj.get("summary");
    let errors = summary
        .and_then(|s| s.get("errorCount"))
        .and_then(Json::as_u64)
        .unwrap_or(0);
    let warnings = summary
        .and_then(|s| s.get("warningCount"))
        .and_then(Json::as_u64)
        .unwrap_or(0);

    let mut normalized = Vec::new();
    if let Some(diags) = obj.get("generalDiagnostics").and_then(Json::as_array) {
        for d in diags.iter().take(max_items) {
            let line0 = d
                .get("range")
                .and_then(|r| r.get("start"))
                .and_then(|s| s.get("line"))
                .and_then(Json::as_u64)
                .unwrap_or(0);
            normalized.push(TypeDiagnostic {
                file: str_field(d, "file"),
                line: line0 + 1,
                severity: str_field(d, "severity"),
                rule: str_field(d, "rule"),
                message: str_field(d, "message"),
            });
        }
    }
    Ok((errors, warnings, normalized))
}
