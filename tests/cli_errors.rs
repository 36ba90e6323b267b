mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn packager() -> Command {
    let mut cmd = Command::cargo_bin("dotnet-packager").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_project_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no project file found"));

    assert!(!dir.path().join("packaging.json").exists());
}

#[test]
fn two_projects_lists_both_candidates() {
    let dir = common::project();
    common::write_project(dir.path(), "tools/Helper/Helper.csproj");

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Notepad.csproj"))
        .stderr(predicate::str::contains("Helper.csproj"))
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn malformed_config_names_the_file() {
    let dir = common::project();
    common::write_config(dir.path(), "{ \"Product\": \"Notepad\", ");

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("packaging.json"))
        .stderr(predicate::str::contains("failed to parse"));

    assert_eq!(
        fs::read_to_string(dir.path().join("packaging.json")).unwrap(),
        "{ \"Product\": \"Notepad\", "
    );
}

#[test]
fn non_object_config_is_rejected() {
    let dir = common::project();
    common::write_config(dir.path(), "42");

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn configured_project_must_exist() {
    let dir = common::project();
    common::write_config(
        dir.path(),
        r#"{ "Product": "Notepad", "Project": "src/Gone/Gone.csproj" }"#,
    );

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project file not found"));
}

#[test]
fn missing_root_is_an_argument_error() {
    packager()
        .args(["--root", "/definitely/not/here"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Root directory does not exist"));
}

#[test]
fn unknown_platform_is_rejected_by_the_parser() {
    packager()
        .args(["--platform", "linux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected win or mac"));
}
