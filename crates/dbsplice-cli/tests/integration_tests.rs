//! Integration tests for dbsplice-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn dbsplice() -> Command {
    let mut cmd = Command::cargo_bin("dbsplice").unwrap();
    cmd.arg("--no-color");
    cmd
}

/// `<tmp>/db/hr` with a composite install file inside it.
fn setup_schema(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("db").join("hr");
    fs::create_dir_all(&root).unwrap();
    let source = root.join("install.sql");
    fs::write(&source, content).unwrap();
    (tmp, root, source)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn help_lists_the_operations() {
    dbsplice()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("join"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("counterpart"));
}

#[test]
fn version_flag_prints_package_version() {
    dbsplice()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn split_writes_targets_and_rewrites_the_source() {
    let (_tmp, root, source) =
        setup_schema("PRE\n-- File: a.sql\nbody-a\n-- File: b.sql\nbody-b\n");

    dbsplice()
        .args(["split", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Split 2 file(s)"));

    assert_eq!(read(&root.join("a.sql")), "body-a");
    assert_eq!(read(&root.join("b.sql")), "body-b");
    assert_eq!(read(&source), "PRE\n-- File: a.sql\n-- File: b.sql\n");
}

#[test]
fn join_inlines_edited_target_content() {
    let (_tmp, root, source) =
        setup_schema("PRE\n-- File: a.sql\nbody-a\n-- File: b.sql\nbody-b\n");

    dbsplice()
        .args(["split", source.to_str().unwrap()])
        .assert()
        .success();

    fs::write(root.join("a.sql"), "body-a-edited\n").unwrap();
    fs::write(root.join("b.sql"), "body-b\n").unwrap();

    dbsplice()
        .args(["join", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joined 2 file(s)"));

    assert_eq!(
        read(&source),
        "PRE\n-- File: a.sql\nbody-a-edited\n\n-- File: b.sql\nbody-b\n\n"
    );
}

#[test]
fn document_without_markers_is_a_reported_noop() {
    let original = "no markers here\nselect 1 from dual;\n";
    let (_tmp, _root, source) = setup_schema(original);

    dbsplice()
        .args(["split", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing found to split"));
    assert_eq!(read(&source), original);

    dbsplice()
        .args(["join", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing found to join"));
    assert_eq!(read(&source), original);
}

#[test]
fn scan_appends_markers_for_referencing_files() {
    let (_tmp, root, _) = setup_schema("");
    let tables = root.join("tables");
    fs::create_dir_all(&tables).unwrap();
    let source = tables.join("orders.sql");
    fs::write(&source, "create table orders ();\n").unwrap();

    let foreigns = root.join("constraints/foreigns");
    fs::create_dir_all(&foreigns).unwrap();
    fs::write(
        foreigns.join("fk_orders_customer.sql"),
        "alter table orders add constraint fk_orders_customer foreign key (customer_id) references customers (id);\n",
    )
    .unwrap();

    dbsplice()
        .args(["scan", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended 1 reference(s)"));

    assert!(read(&source).contains("-- File: constraints/foreigns/fk_orders_customer.sql"));
}

#[test]
fn scan_without_matches_reports_nothing_found() {
    let (_tmp, root, _) = setup_schema("");
    let tables = root.join("tables");
    fs::create_dir_all(&tables).unwrap();
    let source = tables.join("orders.sql");
    fs::write(&source, "create table orders ();\n").unwrap();

    dbsplice()
        .args(["scan", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing found"));
    assert_eq!(read(&source), "create table orders ();\n");
}

#[test]
fn explicit_root_overrides_path_derivation() {
    // file lives outside any db/<schema> layout
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("install.sql");
    fs::write(&source, "PRE\n-- File: a.sql\nbody-a\n").unwrap();
    let root = tmp.path().join("out");
    fs::create_dir_all(&root).unwrap();

    dbsplice()
        .args([
            "split",
            source.to_str().unwrap(),
            "--root",
            root.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(read(&root.join("a.sql")), "body-a");
}

#[test]
fn counterpart_switches_package_spec_to_body() {
    let (_tmp, root, _) = setup_schema("");
    let packages = root.join("packages");
    fs::create_dir_all(&packages).unwrap();
    fs::write(packages.join("orders_api.pks"), "spec").unwrap();
    fs::write(packages.join("orders_api.pkb"), "body").unwrap();

    dbsplice()
        .args(["counterpart", packages.join("orders_api.pks").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("orders_api.pkb"));
}

#[test]
fn counterpart_finds_highest_ddl_revision() {
    let (_tmp, root, _) = setup_schema("");
    let tables = root.join("tables");
    let ddl = tables.join("tables_ddl");
    fs::create_dir_all(&ddl).unwrap();
    fs::write(tables.join("orders.sql"), "create table orders ();\n").unwrap();
    fs::write(ddl.join("orders.1.sql"), "rev 1").unwrap();
    fs::write(ddl.join("orders.10.sql"), "rev 10").unwrap();
    fs::write(ddl.join("orders.2.sql"), "rev 2").unwrap();

    dbsplice()
        .args(["counterpart", tables.join("orders.sql").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("orders.10.sql"));
}

#[test]
fn counterpart_without_partner_warns() {
    let (_tmp, root, _) = setup_schema("");
    let packages = root.join("packages");
    fs::create_dir_all(&packages).unwrap();
    fs::write(packages.join("orders_api.pks"), "spec").unwrap();

    dbsplice()
        .args(["counterpart", packages.join("orders_api.pks").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No counterpart"));
}

#[test]
fn json_output_format_is_machine_readable() {
    let (_tmp, _root, source) = setup_schema("PRE\n-- File: a.sql\nbody-a\n");

    dbsplice()
        .args([
            "--output-format",
            "json",
            "split",
            source.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\""))
        .stdout(predicate::str::contains("\"count\""));
}

#[test]
fn custom_marker_token_comes_from_the_config_file() {
    let (tmp, root, source) = setup_schema("PRE\n-- Source: a.sql\nbody-a\n");
    let config = tmp.path().join("dbsplice.toml");
    fs::write(&config, "marker = \"-- Source: \"\n").unwrap();

    dbsplice()
        .args([
            "--config",
            config.to_str().unwrap(),
            "split",
            source.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Split 1 file(s)"));

    assert_eq!(read(&root.join("a.sql")), "body-a");
    assert_eq!(read(&source), "PRE\n-- Source: a.sql\n");
}

#[test]
fn quiet_mode_suppresses_success_output() {
    let (_tmp, _root, source) = setup_schema("PRE\n-- File: a.sql\nbody-a\n");

    dbsplice()
        .args(["-q", "split", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completions_generate_for_bash() {
    dbsplice()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dbsplice"));
}

#[test]
fn config_list_shows_the_marker() {
    dbsplice()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker"));
}
