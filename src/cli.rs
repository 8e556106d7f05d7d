//! CLI argument parsing via `clap`.

use crate::config::{FailOnQuality, FailOnSeverity};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qualigate",
    version,
    about = "Aggregate Python quality-tool artifacts into one gated report",
    long_about = "Qualigate — a tiny, fast CLI that merges ruff, pyright, pytest (JUnit XML), coverage.py, and bandit artifacts into a rendered report, a JSON summary, and CI key=value outputs, then decides whether the run blocks.\n\nConfiguration precedence: CLI > qualigate.toml > defaults.",
    after_help = "Examples:\n  qualigate build --ruff ruff.json --pyright pyright.json --junit junit.xml --coverage coverage.json --commands command_status.tsv\n  qualigate build --coverage-threshold 90 --fail-on-security medium\n  qualigate build --fail-on-quality none --fail-on-security none",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current qualigate version."
    )]
    Version,
    /// Build the aggregated report and evaluate gates
    #[command(
        about = "Build the aggregated quality report",
        long_about = "Parse the tool artifacts (all optional; missing files count as zero findings), evaluate the quality and security gates, render the report template, and write the JSON summary and outputs file. Exits 1 when blocking, 2 on a fatal parse error.",
        after_help = "Examples:\n  qualigate build --junit junit.xml --coverage coverage.json\n  qualigate build --fail-on-security high --output report.md"
    )]
    Build {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Path to ruff JSON output (array)")]
        ruff: Option<String>,
        #[arg(long, help = "Path to pyright JSON output")]
        pyright: Option<String>,
        #[arg(long, help = "Path to pytest JUnit XML")]
        junit: Option<String>,
        #[arg(long, help = "Path to coverage.py JSON export")]
        coverage: Option<String>,
        #[arg(long, help = "Path to bandit JSON output (default: bandit.json)")]
        bandit: Option<String>,
        #[arg(long, help = "Path to tab-separated command status log")]
        commands: Option<String>,
        #[arg(long, help = "Report template path (Jinja syntax)")]
        template: Option<String>,
        #[arg(long, help = "Rendered report destination")]
        output: Option<String>,
        #[arg(long, help = "JSON summary destination")]
        summary: Option<String>,
        #[arg(long, help = "key=value outputs file, opened in append mode")]
        outputs: Option<String>,
        #[arg(long, help = "Coverage gate threshold in percent (default: 80)")]
        coverage_threshold: Option<f64>,
        #[arg(long, value_enum, help = "Quality gate mode: none|any (default: any)")]
        fail_on_quality: Option<FailOnQuality>,
        #[arg(
            long,
            value_enum,
            help = "Security gate threshold: none|low|medium|high (default: none)"
        )]
        fail_on_security: Option<FailOnSeverity>,
    },
}
