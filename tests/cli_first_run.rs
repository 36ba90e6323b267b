mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn packager() -> Command {
    let mut cmd = Command::cargo_bin("dotnet-packager").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_run_writes_config_and_builds_nothing() {
    let dir = common::project();

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Created default configuration"));

    let text = fs::read_to_string(dir.path().join("packaging.json")).unwrap();
    assert!(text.ends_with('\n'));

    let config: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(config["Product"], "Notepad");
    assert_eq!(config["Company"], "Contoso Ltd.");
    assert_eq!(config["Executable"], "Notepad");
    assert_eq!(config["Project"], "src/Notepad/Notepad.csproj");
    assert_eq!(config["Win"]["RuntimeIdentifier"], "win-x64");
    assert_eq!(config["Mac"]["BundleIdentifier"], "com.contosoltd.notepad");
    assert_eq!(config["Mac"]["VolumeName"], "Notepad");

    let guid = config["Win"]["GUID"].as_str().unwrap();
    assert!(guid.starts_with('{') && guid.ends_with('}'));
    assert_eq!(guid, guid.to_uppercase());

    assert!(!dir.path().join("dist").exists());
    assert!(!dir.path().join(".packaging").exists());
}

#[test]
fn first_run_records_discovered_icons() {
    let dir = common::project();
    let assets = dir.path().join("src/Notepad/Assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("app.ico"), b"ico").unwrap();

    packager().arg("--root").arg(dir.path()).assert().success();

    let config: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("packaging.json")).unwrap())
            .unwrap();
    assert_eq!(config["Win"]["Icon"], "src/Notepad/Assets/app.ico");
    assert!(config["Mac"].get("Icon").is_none());
}

#[test]
fn project_flag_resolves_multiple_projects_on_first_run() {
    let dir = common::project();
    common::write_project(dir.path(), "tests/Notepad.Tests/Notepad.Tests.csproj");

    packager()
        .arg("--root")
        .arg(dir.path())
        .args(["--project", "src/Notepad/Notepad.csproj"])
        .assert()
        .success();

    let config: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("packaging.json")).unwrap())
            .unwrap();
    assert_eq!(config["Project"], "src/Notepad/Notepad.csproj");
}

#[test]
fn existing_config_is_never_rewritten() {
    let dir = common::project();
    let original = "{ \"Product\": \"Notepad\", \"Company\": \"Contoso\", \"Win\": { \"Enabled\": false }, \"Mac\": { \"Enabled\": false } }";
    common::write_config(dir.path(), original);

    packager()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No packaging targets were executed"));

    assert_eq!(
        fs::read_to_string(dir.path().join("packaging.json")).unwrap(),
        original
    );
}

#[test]
fn custom_config_file_name() {
    let dir = common::project();

    packager()
        .arg("--root")
        .arg(dir.path())
        .args(["--config", "build/pack.json"])
        .assert()
        .success();

    assert!(dir.path().join("build/pack.json").is_file());
    assert!(!dir.path().join("packaging.json").exists());
}
