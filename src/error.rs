//! Error type for fatal conditions.
//!
//! Absent inputs and shape mismatches are not errors; parsers degrade those
//! to zero values. Anything here terminates the run before outputs are
//! written: unreadable files, malformed JSON/XML, bad integers in the
//! machine-generated command log, template failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("invalid XML in {}: {source}", path.display())]
    Xml {
        source: roxmltree::Error,
        path: PathBuf,
    },

    #[error("bad exit code '{value}' on line {line} of {}", path.display())]
    CommandLog {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(source: std::io::Error, path: &std::path::Path) -> Self {
        Error::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
