//! Pytest JUnit XML results.
//!
//! Accepts a single `<testsuite>` root or a container of `<testsuite>`
//! children. Suite totals sum across suites; every failure/error child of a
//! test case yields one `FailedTest` (a case with both yields two). Only a
//! missing file degrades to zeros; malformed XML is fatal.

use crate::error::{Error, Result};
use crate::models::FailedTest;
use crate::parse::read_text;
use roxmltree::{Document, Node};
use std::path::Path;

fn attr_count(node: Node, name: &str) -> u64 {
    node.attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Parse a JUnit report into `(total, failed, skipped, failed_tests)` where
/// `failed = failures + errors`. The failed-test list keeps document order
/// and clips to the first `max_items`.
pub fn parse_junit(path: &Path, max_items: usize) -> Result<(u64, u64, u64, Vec<FailedTest>)> {
    let Some(text) = read_text(path)? else {
        return Ok((0, 0, 0, Vec::new()));
    };
    let doc = Document::parse(&text).map_err(|e| Error::Xml {
        source: e,
        path: path.to_path_buf(),
    })?;

    let root = doc.root_element();
    let suites: Vec<Node> = if root.has_tag_name("testsuite") {
        vec![root]
    } else {
        root.children()
            .filter(|n| n.has_tag_name("testsuite"))
            .collect()
    };

    let mut tests = 0u64;
    let mut failed = 0u64;
    let mut skipped = 0u64;
    let mut failed_tests: Vec<FailedTest> = Vec::new();

    for suite in suites {
        tests += attr_count(suite, "tests");
        failed += attr_count(suite, "failures") + attr_count(suite, "errors");
        skipped += attr_count(suite, "skipped");

        for case in suite
            .descendants()
            .filter(|n| n.has_tag_name("testcase"))
        {
            for node in case
                .children()
                .filter(|n| n.has_tag_name("failure") || n.has_tag_name("error"))
            {
                let file = case.attribute("file").unwrap_or("");
                let classname = case.attribute("classname").unwrap_or("");
                let name = case.attribute("name").unwrap_or("");
                let nodeid = if file.is_empty() {
                    format!("{classname}::{name}")
                } else {
                    format!("{file}::{name}")
                };
                let message = node
                    .attribute("message")
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| node.text().unwrap_or(""));
                failed_tests.push(FailedTest {
                    nodeid,
                    message: message.trim().to_string(),
                });
            }
        }
    }
    failed_tests.truncate(max_items);
    Ok((tests, failed, skipped, failed_tests))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let p = dir.path().join("junit.xml");
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn test_missing_file_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let (t, f, s, failed) = parse_junit(&dir.path().join("junit.xml"), 50).unwrap();
        assert_eq!((t, f, s), (0, 0, 0));
        assert!(failed.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(&dir, "<testsuite tests=\"1\"");
        assert!(matches!(parse_junit(&p, 50), Err(Error::Xml { .. })));
    }

    #[test]
    fn test_sums_across_suites_with_errors_counted_as_failed() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(
            &dir,
            r#"<testsuites>
              <testsuite tests="3" failures="1" errors="1" skipped="1"/>
              <testsuite tests="2" failures="0" errors="0" skipped="x"/>
            </testsuites>"#,
        );
        let (t, f, s, _) = parse_junit(&p, 50).unwrap();
        assert_eq!(t, 5);
        assert_eq!(f, 2);
        // non-numeric skipped attribute counts as 0
        assert_eq!(s, 1);
    }

    #[test]
    fn test_nodeid_prefers_file_then_classname() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(
            &dir,
            r#"<testsuite tests="2" failures="2">
              <testcase classname="tests.t" name="test_a" file="tests/t.py">
                <failure message="assert 1 == 2">AssertionError</failure>
              </testcase>
              <testcase classname="tests.t" name="test_b">
                <failure>  boom  </failure>
              </testcase>
            </testsuite>"#,
        );
        let (_, _, _, failed) = parse_junit(&p, 50).unwrap();
        assert_eq!(failed[0].nodeid, "tests/t.py::test_a");
        assert_eq!(failed[0].message, "assert 1 == 2");
        assert_eq!(failed[1].nodeid, "tests.t::test_b");
        // falls back to trimmed text when the message attribute is absent
        assert_eq!(failed[1].message, "boom");
    }

    #[test]
    fn test_case_with_failure_and_error_yields_two_records() {
        let dir = tempfile::tempdir().unwrap();
        let p = write(
            &dir,
            r#"<testsuite tests="1" failures="1" errors="1">
              <testcase classname="tests.t" name="test_both">
                <failure message="failed"/>
                <error message="errored"/>
              </testcase>
            </testsuite>"#,
        );
        let (_, f, _, failed) = parse_junit(&p, 50).unwrap();
        assert_eq!(f, 2);
        assert_eq!(failed.len(), 2);
        assert_eq!(failed[0].message, "failed");
        assert_eq!(failed[1].message, "errored");
    }

    #[test]
    fn test_failed_list_clips_in_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let cases: String = (0..60)
            .map(|i| {
                format!(
                    r#"<testcase classname="t" name="test_{i}"><failure message="m{i}"/></testcase>"#
                )
            })
            .collect();
        let p = write(
            &dir,
            &format!(r#"<testsuite tests="60" failures="60">{cases}</testsuite>"#),
        );
        let (_, f, _, failed) = parse_junit(&p, 50).unwrap();
        assert_eq!(f, 60);
        assert_eq!(failed.len(), 50);
        assert_eq!(failed[0].nodeid, "t::test_0");
        assert_eq!(failed[49].nodeid, "t::test_49");
    }
}
