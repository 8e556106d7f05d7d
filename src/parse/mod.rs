//! Per-tool artifact parsers.
//!
//! Shared rules: a missing or blank artifact is zero findings; JSON that
//! parses but has the wrong root shape degrades to zero findings; JSON or
//! XML that fails to parse is fatal. Machine-generated inputs (the command
//! log) are expected well-formed and fail the run when they are not.

pub mod bandit;
pub mod commands;
pub mod coverage;
pub mod junit;
pub mod pyright;
pub mod ruff;

use crate::error::{Error, Result};
use serde_json::Value as Json;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
/// Caps applied to report-facing lists and raw previews. Passed explicitly
/// so tests can probe the boundaries.
pub struct Limits {
    pub max_items: usize,
    pub max_preview_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_items: 50,
            max_preview_chars: 2000,
        }
    }
}

/// Read a JSON artifact. Missing or blank files yield `Null` so downstream
/// shape checks degrade to empty results; malformed JSON is fatal.
pub(crate) fn read_json(path: &Path) -> Result<Json> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Json::Null),
        Err(e) => return Err(Error::io(e, path)),
    };
    if text.trim().is_empty() {
        return Ok(Json::Null);
    }
    serde_json::from_str(&text).map_err(|e| Error::Json {
        source: e,
        path: path.to_path_buf(),
    })
}

/// Read a text artifact; `None` when the file is missing.
pub(crate) fn read_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(t) => Ok(Some(t)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(e, path)),
    }
}
