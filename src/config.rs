//! Configuration discovery and effective settings resolution.
//!
//! Qualigate reads `qualigate.toml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - inputs: `ruff.json`, `pyright.json`, `junit.xml`, `coverage.json`,
//!   `bandit.json`, `command_status.tsv`
//! - report: `templates/report.md.j2` -> `quality_report.md`, summary
//!   `quality_summary.json`, outputs `outputs.txt`
//! - gates: `coverage_threshold = 80.0`, `fail_on_quality = any`,
//!   `fail_on_security = none`
//!
//! Overrides precedence: CLI > config file > defaults.

use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Quality gate mode: `none` disables the gate entirely.
pub enum FailOnQuality {
    None,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Security gate threshold on the fixed bandit severity scale.
pub enum FailOnSeverity {
    None,
    Low,
    Medium,
    High,
}

impl FailOnSeverity {
    /// Ordinal on the none < low < medium < high scale.
    pub fn rank(self) -> u8 {
        match self {
            FailOnSeverity::None => 0,
            FailOnSeverity::Low => 1,
            FailOnSeverity::Medium => 2,
            FailOnSeverity::High => 3,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Artifact paths under `[inputs]`.
pub struct InputsCfg {
    pub ruff: Option<String>,
    pub pyright: Option<String>,
    pub junit: Option<String>,
    pub coverage: Option<String>,
    pub bandit: Option<String>,
    pub commands: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Report destinations under `[report]`.
pub struct ReportCfg {
    pub template: Option<String>,
    pub output: Option<String>,
    pub summary: Option<String>,
    pub outputs: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Gate policy under `[gates]`.
pub struct GatesCfg {
    pub coverage_threshold: Option<f64>,
    pub fail_on_quality: Option<FailOnQuality>,
    pub fail_on_security: Option<FailOnSeverity>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `qualigate.toml`.
pub struct QualigateConfig {
    pub inputs: Option<InputsCfg>,
    pub report: Option<ReportCfg>,
    pub gates: Option<GatesCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by `build` after applying precedence.
/// Relative paths are anchored at `repo_root`; absolute paths pass through.
pub struct Effective {
    pub repo_root: PathBuf,
    pub ruff: PathBuf,
    pub pyright: PathBuf,
    pub junit: PathBuf,
    pub coverage: PathBuf,
    pub bandit: PathBuf,
    pub commands: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub summary: PathBuf,
    pub outputs: PathBuf,
    pub coverage_threshold: f64,
    pub fail_on_quality: FailOnQuality,
    pub fail_on_security: FailOnSeverity,
}

#[derive(Debug, Default)]
/// CLI-side overrides for the `build` subcommand.
pub struct BuildOverrides {
    pub ruff: Option<String>,
    pub pyright: Option<String>,
    pub junit: Option<String>,
    pub coverage: Option<String>,
    pub bandit: Option<String>,
    pub commands: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
    pub summary: Option<String>,
    pub outputs: Option<String>,
    pub coverage_threshold: Option<f64>,
    pub fail_on_quality: Option<FailOnQuality>,
    pub fail_on_security: Option<FailOnSeverity>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `qualigate.toml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("qualigate.toml").exists() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `QualigateConfig` from `qualigate.toml` if present.
pub fn load_config(root: &Path) -> Option<QualigateConfig> {
    let toml_path = root.join("qualigate.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: QualigateConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli_repo_root: Option<&str>, cli: BuildOverrides) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();
    let inputs = cfg.inputs.unwrap_or_default();
    let report = cfg.report.unwrap_or_default();
    let gates = cfg.gates.unwrap_or_default();

    let pick = |cli_val: Option<String>, cfg_val: Option<String>, default: &str| -> PathBuf {
        let raw = cli_val.or(cfg_val).unwrap_or_else(|| default.to_string());
        repo_root.join(raw)
    };

    Effective {
        ruff: pick(cli.ruff, inputs.ruff, "ruff.json"),
        pyright: pick(cli.pyright, inputs.pyright, "pyright.json"),
        junit: pick(cli.junit, inputs.junit, "junit.xml"),
        coverage: pick(cli.coverage, inputs.coverage, "coverage.json"),
        bandit: pick(cli.bandit, inputs.bandit, "bandit.json"),
        commands: pick(cli.commands, inputs.commands, "command_status.tsv"),
        template: pick(cli.template, report.template, "templates/report.md.j2"),
        output: pick(cli.output, report.output, "quality_report.md"),
        summary: pick(cli.summary, report.summary, "quality_summary.json"),
        outputs: pick(cli.outputs, report.outputs, "outputs.txt"),
        coverage_threshold: cli
            .coverage_threshold
            .or(gates.coverage_threshold)
            .unwrap_or(80.0),
        fail_on_quality: cli
            .fail_on_quality
            .or(gates.fail_on_quality)
            .unwrap_or(FailOnQuality::Any),
        fail_on_security: cli
            .fail_on_security
            .or(gates.fail_on_security)
            .unwrap_or(FailOnSeverity::None),
        repo_root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let eff = resolve_effective(
            Some(dir.path().to_str().unwrap()),
            BuildOverrides::default(),
        );
        assert_eq!(eff.coverage_threshold, 80.0);
        assert_eq!(eff.fail_on_quality, FailOnQuality::Any);
        assert_eq!(eff.fail_on_security, FailOnSeverity::None);
        assert!(eff.ruff.ends_with("ruff.json"));
        assert!(eff.bandit.ends_with("bandit.json"));
    }

    #[test]
    fn test_cli_overrides_beat_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("qualigate.toml"),
            "[gates]\ncoverage_threshold = 70.0\nfail_on_security = \"medium\"\n\n[inputs]\nruff = \"artifacts/ruff.json\"\n",
        )
        .unwrap();
        let eff = resolve_effective(
            Some(dir.path().to_str().unwrap()),
            BuildOverrides {
                coverage_threshold: Some(95.0),
                ..Default::default()
            },
        );
        // CLI wins where given, config fills the rest
        assert_eq!(eff.coverage_threshold, 95.0);
        assert_eq!(eff.fail_on_security, FailOnSeverity::Medium);
        assert!(eff.ruff.ends_with("artifacts/ruff.json"));
    }

    #[test]
    fn test_absolute_input_path_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let eff = resolve_effective(
            Some(dir.path().to_str().unwrap()),
            BuildOverrides {
                junit: Some("/tmp/elsewhere/junit.xml".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(eff.junit, PathBuf::from("/tmp/elsewhere/junit.xml"));
    }

    #[test]
    fn test_severity_rank_order() {
        assert!(FailOnSeverity::None.rank() < FailOnSeverity::Low.rank());
        assert!(FailOnSeverity::Low.rank() < FailOnSeverity::Medium.rank());
        assert!(FailOnSeverity::Medium.rank() < FailOnSeverity::High.rank());
    }
}
