//! Ruff lint findings: a JSON array carried through verbatim.
//!
//! The upstream schema is not contractually fixed, so findings stay opaque
//! `serde_json::Value`s (key order preserved); only the count feeds the
//! summary and gates.

use crate::error::Result;
use crate::parse::read_json;
use serde_json::Value as Json;
use std::path::Path;

/// Parse ruff's JSON output. Anything but a top-level array degrades to an
/// empty list; elements get no per-item validation.
pub fn parse_ruff(path: &Path) -> Result<Vec<Json>> {
    match read_json(path)? {
        Json::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_ruff(&dir.path().join("ruff.json")).unwrap().is_empty());
    }

    #[test]
    fn test_non_array_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("ruff.json");
        fs::write(&p, r#"{"code": "F401"}"#).unwrap();
        assert!(parse_ruff(&p).unwrap().is_empty());
    }

    #[test]
    fn test_array_elements_pass_through_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("ruff.json");
        fs::write(
            &p,
            r#"[{"code": "F401", "filename": "a.py"}, {"code": "E501"}, 7]"#,
        )
        .unwrap();
        let findings = parse_ruff(&p).unwrap();
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0]["code"], "F401");
        assert_eq!(findings[2], Json::from(7));
    }
}
