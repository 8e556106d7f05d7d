//! Aggregation of the six parsed artifacts and gate evaluation.

use crate::config::{Effective, FailOnQuality};
use crate::error::Result;
use crate::models::{
    CommandResult, CoverageFile, FailedTest, SecurityIssue, Summary, TypeDiagnostic,
};
use crate::parse::{self, Limits};
use serde_json::Value as Json;

/// Fixed names of the core tools whose command failures gate quality.
pub const CORE_TOOLS: [&str; 3] = ["ruff", "pyright", "pytest"];

/// Everything the six parsers produced, before gate evaluation.
#[derive(Debug)]
pub struct Artifacts {
    pub ruff_findings: Vec<Json>,
    pub pyright_errors: u64,
    pub pyright_warnings: u64,
    pub pyright_diagnostics: Vec<TypeDiagnostic>,
    pub tests_total: u64,
    pub tests_failed: u64,
    pub tests_skipped: u64,
    pub failed_tests: Vec<FailedTest>,
    pub coverage: f64,
    pub coverage_files: Vec<CoverageFile>,
    pub bandit_issues: Vec<SecurityIssue>,
    pub bandit_blocking: bool,
    pub commands: Vec<CommandResult>,
}

impl Artifacts {
    /// Parse all six artifacts for the effective configuration. Each parse
    /// is independent; any fatal parse error aborts the whole run.
    pub fn collect(eff: &Effective, limits: Limits) -> Result<Self> {
        let ruff_findings = parse::ruff::parse_ruff(&eff.ruff)?;
        let (pyright_errors, pyright_warnings, pyright_diagnostics) =
            parse::pyright::parse_pyright(&eff.pyright, limits.max_items)?;
        let (tests_total, tests_failed, tests_skipped, failed_tests) =
            parse::junit::parse_junit(&eff.junit, limits.max_items)?;
        let (coverage, coverage_files) = parse::coverage::parse_coverage(&eff.coverage)?;
        let (bandit_issues, bandit_blocking) =
            parse::bandit::parse_bandit(&eff.bandit, eff.fail_on_security, limits.max_items)?;
        let commands = parse::commands::parse_commands(&eff.commands)?;

        Ok(Artifacts {
            ruff_findings,
            pyright_errors,
            pyright_warnings,
            pyright_diagnostics,
            tests_total,
            tests_failed,
            tests_skipped,
            failed_tests,
            coverage,
            coverage_files,
            bandit_issues,
            bandit_blocking,
            commands,
        })
    }
}

/// Gate policy knobs, resolved from CLI/config.
#[derive(Debug, Clone, Copy)]
pub struct GatePolicy {
    pub coverage_threshold: f64,
    pub fail_on_quality: FailOnQuality,
}

/// Aggregation result: the summary, the derived views, and the decision.
#[derive(Debug)]
pub struct Aggregate {
    pub summary: Summary,
    pub below_threshold: Vec<CoverageFile>,
    pub command_failures: Vec<CommandResult>,
    pub quality_blocking: bool,
    pub security_blocking: bool,
    pub blocking: bool,
}

/// Evaluate the gates. Pure: same artifacts and policy, same decision.
///
/// Pyright warnings never block, and bandit findings feed only the
/// security gate.
pub fn evaluate(artifacts: &Artifacts, policy: &GatePolicy, limits: Limits) -> Aggregate {
    let summary = Summary {
        ruff_issues: artifacts.ruff_findings.len() as u64,
        pyright_errors: artifacts.pyright_errors,
        pyright_warnings: artifacts.pyright_warnings,
        tests_total: artifacts.tests_total,
        tests_passed: artifacts
            .tests_total
            .saturating_sub(artifacts.tests_failed.saturating_add(artifacts.tests_skipped)),
        tests_failed: artifacts.tests_failed,
        tests_skipped: artifacts.tests_skipped,
        coverage: artifacts.coverage,
        bandit_issues: artifacts.bandit_issues.len() as u64,
        bandit_blocking: artifacts.bandit_blocking,
    };

    // Sort before clipping so the worst-covered files survive truncation
    let mut below_threshold: Vec<CoverageFile> = artifacts
        .coverage_files
        .iter()
        .filter(|f| f.percent < policy.coverage_threshold)
        .cloned()
        .collect();
    below_threshold.sort_by(|a, b| a.percent.total_cmp(&b.percent));
    below_threshold.truncate(limits.max_items);

    let command_failures: Vec<CommandResult> = artifacts
        .commands
        .iter()
        .filter(|c| CORE_TOOLS.contains(&c.name.as_str()) && c.status == "fail")
        .cloned()
        .collect();

    let quality_blocking = policy.fail_on_quality == FailOnQuality::Any
        && (summary.ruff_issues > 0
            || summary.pyright_errors > 0
            || summary.tests_failed > 0
            || summary.coverage < policy.coverage_threshold
            || !command_failures.is_empty());
    let security_blocking = artifacts.bandit_blocking;
    let blocking = quality_blocking || security_blocking;

    Aggregate {
        summary,
        below_threshold,
        command_failures,
        quality_blocking,
        security_blocking,
        blocking,
    }
}
