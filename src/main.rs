//! Qualigate CLI binary entry point.
//! Delegates to modules for parsing/aggregation/rendering and maps the
//! blocking decision to the exit code.

mod aggregate;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod parse;
mod report;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use config::{BuildOverrides, Effective};
use parse::Limits;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Build {
            repo_root,
            ruff,
            pyright,
            junit,
            coverage,
            bandit,
            commands,
            template,
            output,
            summary,
            outputs,
            coverage_threshold,
            fail_on_quality,
            fail_on_security,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                BuildOverrides {
                    ruff,
                    pyright,
                    junit,
                    coverage,
                    bandit,
                    commands,
                    template,
                    output,
                    summary,
                    outputs,
                    coverage_threshold,
                    fail_on_quality,
                    fail_on_security,
                },
            );
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No qualigate.toml found; using defaults."
                );
            }
            match run_build(&eff) {
                Ok(blocking) => {
                    if blocking {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    // Fatal: no report/summary/outputs are left behind as a
                    // partial run; terminate with a distinct code.
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
    }
}

/// One full pass: parse, gate, render, write. Returns the blocking flag.
fn run_build(eff: &Effective) -> error::Result<bool> {
    let limits = Limits::default();
    let artifacts = aggregate::Artifacts::collect(eff, limits)?;
    let policy = aggregate::GatePolicy {
        coverage_threshold: eff.coverage_threshold,
        fail_on_quality: eff.fail_on_quality,
    };
    let agg = aggregate::evaluate(&artifacts, &policy, limits);

    report::render_report(&eff.template, &eff.output, &artifacts, &agg, &policy, limits)?;
    let payload = output::compose_summary_json(&artifacts, &agg, &policy, limits);
    output::write_summary(&eff.summary, &payload)?;
    output::write_outputs(&eff.outputs, &agg.summary, agg.blocking, &eff.output, &eff.summary)?;
    output::print_summary(&agg);
    Ok(agg.blocking)
}
