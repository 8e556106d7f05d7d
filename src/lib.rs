//! Qualigate core library.
//!
//! This crate exposes programmatic APIs for aggregating Python quality-tool
//! artifacts (ruff, pyright, pytest JUnit XML, coverage.py, bandit, and a
//! tab-separated command status log) into a rendered report, a JSON
//! summary, and a blocking decision.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `parse`: The six per-tool artifact parsers and the list/preview caps.
//! - `aggregate`: Summary construction and quality/security gate logic.
//! - `report`: Jinja-style template rendering.
//! - `output`: Summary JSON composition, `key=value` outputs, console summary.
//! - `models`: Value records shared across parsers and writers.
//! - `error`: Fatal error taxonomy.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod report;
pub mod utils;
