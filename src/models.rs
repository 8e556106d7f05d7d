//! Value records produced by the parsers and the aggregate summary.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single normalized pyright diagnostic. `line` is 1-based (pyright
/// reports 0-based lines).
pub struct TypeDiagnostic {
    pub file: String,
    pub line: u64,
    pub severity: String,
    pub rule: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A test case that reported a failure or error outcome.
pub struct FailedTest {
    pub nodeid: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Per-file coverage with percent rounded to 2 decimals.
pub struct CoverageFile {
    pub path: String,
    pub percent: f64,
    pub missing_lines: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single bandit finding. Severity/confidence carry the raw upstream
/// strings (e.g. "MEDIUM"); ranking happens at gate evaluation.
pub struct SecurityIssue {
    pub filename: String,
    pub line_number: u64,
    pub severity: String,
    pub confidence: String,
    pub test_id: String,
    pub test_name: String,
    pub issue_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One record of the tab-separated command status log.
pub struct CommandResult {
    pub name: String,
    pub command: String,
    pub exit_code: i32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Aggregate counters used by printers, the JSON summary, and the gates.
pub struct Summary {
    pub ruff_issues: u64,
    pub pyright_errors: u64,
    pub pyright_warnings: u64,
    pub tests_total: u64,
    pub tests_passed: u64,
    pub tests_failed: u64,
    pub tests_skipped: u64,
    pub coverage: f64,
    pub bandit_issues: u64,
    pub bandit_blocking: bool,
}
