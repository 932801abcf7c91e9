//! Integration tests for the `intelli` binary.
//!
//! These tests run the real executable against files in a temporary project
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DOCS: &str = "\
# Vectors

- `len = vec.length`documentation for length
- `vec3 = vec.minus(vec2)`subtract two vectors
- `vec.print()`prints the vector
- `rec = store[recId]`indexed access
";

const TEMPLATE: &str = "// static tail\n";

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.md"), DOCS).unwrap();
    fs::write(temp.path().join("intelli_tail.js"), TEMPLATE).unwrap();
    temp
}

fn intelli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("intelli").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_build_writes_stub() {
    let temp = project();

    intelli(temp.path())
        .args([
            "build",
            "--input",
            "doc.md",
            "--template",
            "intelli_tail.js",
            "--output",
            "out/stub.js",
        ])
        .assert()
        .success();

    let stub = fs::read_to_string(temp.path().join("out/stub.js")).unwrap();
    assert!(stub.starts_with(TEMPLATE));
    assert!(stub.contains("var _vec = {\n"));
    assert!(stub.contains("\tlength: _len,\n"));
    assert!(stub.contains("\tminus: function () {\n"));

    let problems = fs::read_to_string(temp.path().join("problems.js")).unwrap();
    assert_eq!(problems, "rec = store[recId]\n");

    let intermediate = fs::read_to_string(temp.path().join("intellisense.js")).unwrap();
    assert_eq!(intermediate.lines().count(), 4);
}

#[test]
fn test_extract_then_generate() {
    let temp = project();

    intelli(temp.path())
        .args(["extract", "-i", "doc.md", "--intermediate", "records.txt"])
        .assert()
        .success();
    assert!(temp.path().join("records.txt").exists());
    assert!(!temp.path().join("stub.js").exists());

    intelli(temp.path())
        .args([
            "generate",
            "--intermediate",
            "records.txt",
            "-t",
            "intelli_tail.js",
            "-o",
            "stub.js",
        ])
        .assert()
        .success();
    assert!(temp.path().join("stub.js").exists());
}

#[test]
fn test_config_file_is_used() {
    let temp = project();
    fs::write(
        temp.path().join("intelli.config.json"),
        r#"{ "input": "doc.md", "output": "from_config.js" }"#,
    )
    .unwrap();

    intelli(temp.path()).arg("build").assert().success();
    assert!(temp.path().join("from_config.js").exists());
}

#[test]
fn test_global_return_target_fails_without_output() {
    let temp = project();
    fs::write(temp.path().join("doc.md"), "- `qm = la.owner()`bad\n").unwrap();

    intelli(temp.path())
        .args(["build", "-i", "doc.md", "-o", "stub.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("qm = la.owner()"));

    assert!(!temp.path().join("stub.js").exists());
    assert!(!temp.path().join("problems.js").exists());
}

#[test]
fn test_missing_template_fails() {
    let temp = project();

    intelli(temp.path())
        .args(["build", "-i", "doc.md", "-t", "nope.js", "-o", "stub.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.js"));
}

#[test]
fn test_invalid_global_is_rejected() {
    let temp = project();

    intelli(temp.path())
        .args(["build", "-g", "not a name"])
        .assert()
        .failure();
}

#[test]
fn test_check_prints_effective_config() {
    let temp = project();

    intelli(temp.path())
        .args(["check", "-i", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input\": \"doc.md\""))
        .stdout(predicate::str::contains("$SEPARATOR$"));
}

#[test]
fn test_check_schema() {
    let temp = TempDir::new().unwrap();

    intelli(temp.path())
        .args(["check", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dumpGroups"));
}
