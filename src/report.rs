//! Markdown report rendering.
//!
//! The template is Jinja-syntax (rendered with `minijinja`) and receives
//! the summary, the gate booleans, and the clipped finding lists. Template
//! contents are the invoker's business; this module only supplies the
//! context and writes the result.

use crate::aggregate::{Aggregate, Artifacts, GatePolicy};
use crate::error::{Error, Result};
use crate::parse::Limits;
use minijinja::{context, Environment};
use std::fs;
use std::path::Path;

/// Render `template_path` with the report context and write the result to
/// `output_path`.
pub fn render_report(
    template_path: &Path,
    output_path: &Path,
    artifacts: &Artifacts,
    agg: &Aggregate,
    policy: &GatePolicy,
    limits: Limits,
) -> Result<()> {
    let source = fs::read_to_string(template_path).map_err(|e| Error::io(e, template_path))?;
    let mut env = Environment::new();
    env.add_template("report", &source)?;
    let rendered = env.get_template("report")?.render(context! {
        summary => &agg.summary,
        coverage_threshold => policy.coverage_threshold,
        quality_blocking => agg.quality_blocking,
        security_blocking => agg.security_blocking,
        blocking => agg.blocking,
        ruff_findings => artifacts
            .ruff_findings
            .iter()
            .take(limits.max_items)
            .collect::<Vec<_>>(),
        pyright_findings => &artifacts.pyright_diagnostics,
        failed_tests => &artifacts.failed_tests,
        below_threshold => &agg.below_threshold,
        bandit_issues => &artifacts.bandit_issues,
        command_results => &artifacts.commands,
    })?;
    fs::write(output_path, rendered).map_err(|e| Error::io(e, output_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{evaluate, Artifacts, GatePolicy};
    use crate::config::FailOnQuality;
    use crate::models::{FailedTest, SecurityIssue, TypeDiagnostic};

    fn sample_artifacts() -> Artifacts {
        Artifacts {
            ruff_findings: vec![serde_json::json!({"code": "F401"})],
            pyright_errors: 1,
            pyright_warnings: 1,
            pyright_diagnostics: vec![TypeDiagnostic {
                file: "m.py".into(),
                line: 10,
                severity: "error".into(),
                rule: "reportArgumentType".into(),
                message: "bad arg".into(),
            }],
            tests_total: 3,
            tests_failed: 1,
            tests_skipped: 1,
            failed_tests: vec![FailedTest {
                nodeid: "tests/t.py::test_fail".into(),
                message: "assert 1 == 2".into(),
            }],
            coverage: 66.67,
            coverage_files: Vec::new(),
            bandit_issues: vec![SecurityIssue {
                filename: "m.py".into(),
                line_number: 22,
                severity: "MEDIUM".into(),
                confidence: "HIGH".into(),
                test_id: "B608".into(),
                test_name: "hardcoded_sql_expressions".into(),
                issue_text: "Possible SQL injection vector".into(),
            }],
            bandit_blocking: true,
            commands: Vec::new(),
        }
    }

    #[test]
    fn test_render_default_template_sections() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.md");
        let artifacts = sample_artifacts();
        let policy = GatePolicy {
            coverage_threshold: 80.0,
            fail_on_quality: FailOnQuality::Any,
        };
        let agg = evaluate(&artifacts, &policy, Limits::default());
        render_report(
            Path::new("templates/report.md.j2"),
            &out,
            &artifacts,
            &agg,
            &policy,
            Limits::default(),
        )
        .unwrap();
        let report = fs::read_to_string(&out).unwrap();
        assert!(report.contains("Failed tests"));
        assert!(report.contains("Pyright diagnostics"));
        assert!(report.contains("Bandit findings"));
        assert!(report.contains("tests/t.py::test_fail"));
        assert!(report.contains("66.67"));
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = sample_artifacts();
        let policy = GatePolicy {
            coverage_threshold: 80.0,
            fail_on_quality: FailOnQuality::Any,
        };
        let agg = evaluate(&artifacts, &policy, Limits::default());
        let err = render_report(
            &dir.path().join("nope.j2"),
            &dir.path().join("out.md"),
            &artifacts,
            &agg,
            &policy,
            Limits::default(),
        );
        assert!(matches!(err, Err(Error::Io { .. })));
    }
}
