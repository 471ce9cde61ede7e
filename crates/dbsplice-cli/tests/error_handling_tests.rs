//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dbsplice() -> Command {
    let mut cmd = Command::cargo_bin("dbsplice").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn missing_file_exits_not_found_with_suggestions() {
    dbsplice()
        .args(["split", "/definitely/not/here/install.sql"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("Suggestions"));
}

#[test]
fn file_outside_db_layout_asks_for_explicit_root() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("install.sql");
    fs::write(&source, "PRE\n-- File: a.sql\nbody\n").unwrap();

    dbsplice()
        .args(["split", source.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("schema"))
        .stderr(predicate::str::contains("--root"));
}

#[test]
fn unknown_config_key_is_a_configuration_error() {
    dbsplice()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn broken_config_file_fails_startup() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("broken.toml");
    fs::write(&config, "marker = [not toml").unwrap();

    dbsplice()
        .args(["--config", config.to_str().unwrap(), "config", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn empty_marker_in_config_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("dbsplice.toml");
    fs::write(&config, "marker = \"\"\n").unwrap();
    let root = tmp.path().join("db/hr");
    fs::create_dir_all(&root).unwrap();
    let source = root.join("install.sql");
    fs::write(&source, "PRE\n").unwrap();

    dbsplice()
        .args([
            "--config",
            config.to_str().unwrap(),
            "split",
            source.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Separator token"));
}

#[test]
fn marker_with_absolute_path_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("db/hr");
    fs::create_dir_all(&root).unwrap();
    let source = root.join("install.sql");
    fs::write(&source, "PRE\n-- File: /etc/passwd\nbody\n").unwrap();

    dbsplice()
        .args(["split", source.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must be relative"));
}
