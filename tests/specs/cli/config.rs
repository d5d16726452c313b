// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `jflat config`, `jflat schema` and `jflat completion`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

/// A `jflat` command isolated from the caller's config and environment.
fn jflat(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("jflat");
    for var in [
        "JFLAT_CONFIG",
        "JIRA_URL",
        "CUSTOM_FIELD_EPIC_LINK",
        "CUSTOM_FIELD_STORY_POINTS",
        "CUSTOM_FIELD_SPRINT",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn write_default_config(home: &TempDir, body: &str) {
    let dir = home.path().join(".config").join("jflat");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), body).unwrap();
}

#[test]
fn show_defaults() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = \"https://localhost/\""))
        .stdout(predicate::str::contains("sprint = \"customfield_10020\""));
}

#[test]
fn show_layers_file_env_and_flags() {
    let home = TempDir::new().unwrap();
    write_default_config(
        &home,
        "base_url = \"https://file.example.com\"\n\n[fields]\nepic_link = \"customfield_1\"\nsprint = \"customfield_3\"\n",
    );

    jflat(&home)
        .env("CUSTOM_FIELD_EPIC_LINK", "customfield_2")
        .args(["config", "show", "--sprint-field", "customfield_4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = \"https://file.example.com\""))
        .stdout(predicate::str::contains("epic_link = \"customfield_2\""))
        .stdout(predicate::str::contains("story_points = \"customfield_10016\""))
        .stdout(predicate::str::contains("sprint = \"customfield_4\""));
}

#[test]
fn unknown_config_key_fails() {
    let home = TempDir::new().unwrap();
    write_default_config(&home, "base_ur = \"https://typo.example.com\"\n");
    jflat(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error in"));
}

#[test]
fn env_config_path_must_exist() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .env("JFLAT_CONFIG", home.path().join("missing.toml"))
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn path_reports_missing_default() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jflat/config.toml (not found)"));
}

#[test]
fn path_reports_env_override() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    jflat(&home)
        .env("JFLAT_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn schema_describes_output() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home).arg("schema").output().unwrap();
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["title"], "Normalized");
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("\"NormalizedIssue\""));
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_script(shell: &str) {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("jflat"));
}

#[test]
fn help_shows_sections() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalization:"))
        .stdout(predicate::str::contains("normalize"));
}
