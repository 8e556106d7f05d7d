//! Machine-readable outputs and the console summary.
//!
//! Composes the summary JSON payload (pure, for testing), writes it and
//! the append-mode `key=value` outputs file, and prints a colorized
//! one-glance summary.

use crate::aggregate::{Aggregate, Artifacts, GatePolicy};
use crate::error::{Error, Result};
use crate::models::Summary;
use crate::parse::Limits;
use owo_colors::OwoColorize;
use serde_json::{json, Value as Json};
use std::fs;
use std::io::Write;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Compact-JSON preview of `value`, truncated to `max_chars` characters.
fn short_preview(value: &Json, max_chars: usize) -> String {
    let text = value.to_string();
    match text.char_indices().nth(max_chars) {
        None => text,
        Some((idx, _)) => format!("{}... [truncated]", &text[..idx]),
    }
}

/// Compose the summary JSON payload (pure) for testing/snapshot purposes.
pub fn compose_summary_json(
    artifacts: &Artifacts,
    agg: &Aggregate,
    policy: &GatePolicy,
    limits: Limits,
) -> Json {
    json!({
        "summary": &agg.summary,
        "gates": {
            "quality_blocking": agg.quality_blocking,
            "security_blocking": agg.security_blocking,
            "blocking": agg.blocking,
        },
        "checks": {
            "ruff": {
                "issues": artifacts.ruff_findings.len(),
                "sample": artifacts
                    .ruff_findings
                    .iter()
                    .take(limits.max_items)
                    .collect::<Vec<_>>(),
            },
            "pyright": {
                "errors": artifacts.pyright_errors,
                "warnings": artifacts.pyright_warnings,
                "diagnostics": &artifacts.pyright_diagnostics,
            },
            "tests": {
                "total": artifacts.tests_total,
                "passed": agg.summary.tests_passed,
                "failed": artifacts.tests_failed,
                "skipped": artifacts.tests_skipped,
                "failures": &artifacts.failed_tests,
            },
            "coverage": {
                "global": artifacts.coverage,
                "threshold": policy.coverage_threshold,
                "below_threshold": &agg.below_threshold,
            },
            "bandit": {
                "issues": artifacts.bandit_issues.len(),
                "blocking": artifacts.bandit_blocking,
                "findings": &artifacts.bandit_issues,
            },
        },
        "commands": &artifacts.commands,
        "command_failures": &agg.command_failures,
        "raw_preview": {
            "ruff": short_preview(
                &json!(artifacts.ruff_findings.iter().take(10).collect::<Vec<_>>()),
                limits.max_preview_chars,
            ),
            "pyright": short_preview(
                &json!(artifacts.pyright_diagnostics.iter().take(10).collect::<Vec<_>>()),
                limits.max_preview_chars,
            ),
            "failed_tests": short_preview(
                &json!(artifacts.failed_tests.iter().take(10).collect::<Vec<_>>()),
                limits.max_preview_chars,
            ),
            "bandit": short_preview(
                &json!(artifacts.bandit_issues.iter().take(10).collect::<Vec<_>>()),
                limits.max_preview_chars,
            ),
        },
    })
}

/// Write the summary payload as pretty JSON.
pub fn write_summary(path: &Path, payload: &Json) -> Result<()> {
    let text = serde_json::to_string_pretty(payload).map_err(|e| Error::Json {
        source: e,
        path: path.to_path_buf(),
    })?;
    fs::write(path, text).map_err(|e| Error::io(e, path))
}

/// Append the CI `key=value` outputs contract.
pub fn write_outputs(
    path: &Path,
    summary: &Summary,
    blocking: bool,
    report_file: &Path,
    summary_file: &Path,
) -> Result<()> {
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(e, path))?;
    let body = format!(
        "ruff_issues={}\npyright_errors={}\npyright_warnings={}\ntests_failed={}\ncoverage={}\nbandit_issues={}\nblocking={}\nreport_file={}\nsummary_file={}\n",
        summary.ruff_issues,
        summary.pyright_errors,
        summary.pyright_warnings,
        summary.tests_failed,
        summary.coverage,
        summary.bandit_issues,
        if blocking { "true" } else { "false" },
        report_file.display(),
        summary_file.display(),
    );
    f.write_all(body.as_bytes()).map_err(|e| Error::io(e, path))
}

/// Print a one-glance colorized summary with the gate verdict.
pub fn print_summary(agg: &Aggregate) {
    let color = use_colors();
    let s = &agg.summary;
    let line = format!(
        "— Summary — ruff={} pyright={}E/{}W tests={}/{} passed ({} failed, {} skipped) coverage={:.2}% bandit={}",
        s.ruff_issues,
        s.pyright_errors,
        s.pyright_warnings,
        s.tests_passed,
        s.tests_total,
        s.tests_failed,
        s.tests_skipped,
        s.coverage,
        s.bandit_issues,
    );
    if color {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
    let verdict = if agg.blocking {
        let v = format!(
            "gate: BLOCKING (quality={}, security={})",
            agg.quality_blocking, agg.security_blocking
        );
        if color {
            v.red().bold().to_string()
        } else {
            v
        }
    } else if color {
        "gate: pass".green().bold().to_string()
    } else {
        "gate: pass".to_string()
    };
    println!("{}", verdict);
}
