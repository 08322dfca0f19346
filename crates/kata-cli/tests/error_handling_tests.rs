//! Tests for error reporting: messages, suggestions and exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn init_kata(root: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("init-kata");
    cmd.arg("--root").arg(root).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_invalid_name_lists_suggestions() {
    let temp = TempDir::new().unwrap();

    init_kata(temp.path())
        .write_stdin("Fizz_Buzz\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid kata name 'Fizz_Buzz'"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("Examples: fizzbuzz, roman-numerals"));
}

#[test]
fn test_invalid_default_function_name_is_reported() {
    let temp = TempDir::new().unwrap();

    init_kata(temp.path())
        .write_stdin("kata-2\n\n\nn\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid function name 'kata-2'"))
        .stderr(predicate::str::contains("JavaScript identifier"));
}

#[test]
fn test_missing_root_is_io_error() {
    let temp = TempDir::new().unwrap();

    init_kata(&temp.path().join("does-not-exist"))
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot access project root"));
}

#[test]
fn test_file_as_root_is_user_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("package.json");
    fs::write(&file, "{}").unwrap();

    init_kata(&file)
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_missing_config_file_exits_four() {
    let temp = TempDir::new().unwrap();

    init_kata(temp.path())
        .args(["--config"])
        .arg(temp.path().join("missing.toml"))
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_error_is_reported_once() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".kata.toml"), "[layout\n").unwrap();

    let assert = init_kata(temp.path())
        .env_remove("RUST_LOG")
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .code(4);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("Configuration error").count(), 1, "{stderr}");
}

#[test]
fn test_explicit_config_without_toml_extension() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("kata.conf");
    fs::write(&config, "[layout]\nsource_dir = \"katas\"\n").unwrap();

    init_kata(temp.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .success();

    assert!(temp.path().join("katas/fizzbuzz.ts").exists());
}

#[test]
fn test_absolute_layout_path_exits_four() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".kata.toml"),
        "[layout]\nsource_dir = \"/tmp\"\n",
    )
    .unwrap();

    init_kata(temp.path())
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("layout.source_dir"));

    assert!(!temp.path().join("KATA.md").exists());
}

#[test]
fn test_layout_cannot_leave_project_root() {
    let parent = TempDir::new().unwrap();
    let root = parent.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(
        root.join(".kata.toml"),
        "[layout]\nsource_dir = \"../outside\"\n",
    )
    .unwrap();

    init_kata(&root)
        .write_stdin("fizzbuzz\n\n\nn\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("inside the project root"));

    assert!(!parent.path().join("outside").exists());
    assert!(!root.join("KATA.md").exists());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    cargo::cargo_bin_cmd!("init-kata")
        .args(["--quiet", "--verbose"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_verbose_error_shows_cause() {
    let temp = TempDir::new().unwrap();

    init_kata(&temp.path().join("nowhere"))
        .arg("-v")
        .write_stdin("")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("--verbose for more details").not());
}
