//! Integration tests for the dem CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dem(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("dem"));
    cmd.arg("--home").arg(home.path());
    cmd.env_remove("DEM_HOME");
    cmd
}

fn write_descriptor(dir: &TempDir, file: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();
    path
}

// Descriptor without tools: exercises store and status paths without a
// container engine present.
const EMPTY_ENV: &str = r#"{ "name": "empty-env", "tools": [] }"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::new(cargo_bin("dem"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Development Environment Manager"));
}

#[test]
fn cli_shows_version() {
    let mut cmd = Command::new(cargo_bin("dem"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_with_empty_store() {
    let home = TempDir::new().unwrap();
    dem(&home).arg("list").assert().success().stdout(
        predicate::str::contains("No Development Environments in the local store."),
    );
}

#[test]
fn import_then_list_shows_environment() {
    let home = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let descriptor = write_descriptor(&files, "empty-env.json", EMPTY_ENV);

    dem(&home)
        .arg("import")
        .arg(&descriptor)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 'empty-env'"));

    dem(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty-env"))
        .stdout(predicate::str::contains("Not installed"));
}

#[test]
fn import_existing_name_is_cancelled_without_confirmation() {
    let home = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let descriptor = write_descriptor(&files, "empty-env.json", EMPTY_ENV);

    dem(&home).arg("import").arg(&descriptor).assert().success();

    // Non-interactive confirm answers with the default (no).
    dem(&home)
        .arg("--non-interactive")
        .arg("import")
        .arg(&descriptor)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Import cancelled."));
}

#[test]
fn import_missing_file_fails() {
    let home = TempDir::new().unwrap();
    dem(&home)
        .arg("import")
        .arg("/nonexistent/env.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Descriptor not found"));
}

#[test]
fn export_writes_descriptor_without_install_flag() {
    let home = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let descriptor = write_descriptor(&files, "empty-env.json", EMPTY_ENV);

    dem(&home).arg("import").arg(&descriptor).assert().success();

    let exported = files.path().join("exported.json");
    dem(&home)
        .arg("export")
        .arg("empty-env")
        .arg(&exported)
        .assert()
        .success();

    let content = fs::read_to_string(&exported).unwrap();
    assert!(content.contains("empty-env"));
    assert!(!content.contains("installed"));
}

#[test]
fn info_shows_status_of_local_environment() {
    let home = TempDir::new().unwrap();
    let files = TempDir::new().unwrap();
    let descriptor = write_descriptor(&files, "empty-env.json", EMPTY_ENV);

    dem(&home).arg("import").arg(&descriptor).assert().success();

    dem(&home)
        .args(["info", "empty-env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empty-env"))
        .stdout(predicate::str::contains("Not installed"));
}

#[test]
fn info_unknown_environment_fails() {
    let home = TempDir::new().unwrap();
    dem(&home)
        .args(["info", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown Development Environment: ghost",
        ));
}

#[test]
fn install_unknown_environment_fails() {
    let home = TempDir::new().unwrap();
    dem(&home)
        .args(["install", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown Development Environment: ghost",
        ));
}

#[test]
fn list_cat_without_catalogs() {
    let home = TempDir::new().unwrap();
    dem(&home)
        .args(["list", "--cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No catalogs configured."));
}

#[test]
fn info_cat_with_unconfigured_catalog_fails() {
    let home = TempDir::new().unwrap();
    dem(&home)
        .args(["info", "anything", "--cat", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown catalog: nope"));
}

#[test]
fn malformed_config_fails() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.json"), "{ not json").unwrap();
    dem(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn completions_generate_for_bash() {
    let mut cmd = Command::new(cargo_bin("dem"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dem"));
}
