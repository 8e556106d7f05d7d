//! Tab-separated command status log.
//!
//! One record per line: `name<TAB>command<TAB>exit_code<TAB>status`, extra
//! fields ignored. Short lines are skipped; a non-integer exit code is
//! fatal since the log is machine-generated.

use crate::error::{Error, Result};
use crate::models::CommandResult;
use crate::parse::read_text;
use std::path::Path;

/// Parse the command status log. Missing or blank file degrades to empty.
pub fn parse_commands(path: &Path) -> Result<Vec<CommandResult>> {
    let Some(text) = read_text(path)? else {
        return Ok(Vec::new());
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let parts: Vec<&str> = raw.splitn(5, '\t').collect();
        if parts.len() < 4 {
            continue;
        }
        let exit_code: i32 = parts[2].parse().map_err(|_| Error::CommandLog {
            path: path.to_path_buf(),
            line: idx + 1,
            value: parts[2].to_string(),
        })?;
        out.push(CommandResult {
            name: parts[0].to_string(),
            command: parts[1].to_string(),
            exit_code,
            status: parts[3].to_string(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let p = dir.path().join("command_status.tsv");
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn test_missing_and_blank_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_commands(&dir.path().join("command_status.tsv"))
            .unwrap()
            .is_empty());
        let p = write(&dir, "\n  \n");
        assert!(parse_commands(&p).unwrap().is_empty());
    }

    #[test]
    fn test_parses_records_and_ignores_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(
            &dir,
            "ruff\truff check src\t1\tfail\truff.json\npytest\tpytest tests\t0\tpass\ta,b\tc\n",
        );
        let results = parse_commands(&p).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "ruff");
        assert_eq!(results[0].exit_code, 1);
        assert_eq!(results[0].status, "fail");
        assert_eq!(results[1].command, "pytest tests");
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(&dir, "just\tthree\tfields\nruff\tcmd\t0\tpass\n");
        let results = parse_commands(&p).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "ruff");
    }

    #[test]
    fn test_bad_exit_code_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(&dir, "ruff\tcmd\tnot-a-number\tfail\n");
        assert!(matches!(
            parse_commands(&p),
            Err(Error::CommandLog { line: 1, .. })
        ));
    }
}
