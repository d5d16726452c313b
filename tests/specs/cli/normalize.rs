// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `jflat normalize`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use yare::parameterized;

const ENV_VARS: [&str; 6] = [
    "JFLAT_CONFIG",
    "JIRA_URL",
    "CUSTOM_FIELD_EPIC_LINK",
    "CUSTOM_FIELD_STORY_POINTS",
    "CUSTOM_FIELD_SPRINT",
    "RUST_LOG",
];

/// A `jflat` command isolated from the caller's config and environment.
fn jflat(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("jflat");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn full_issue() -> Value {
    json!({
        "key": "DATA-42",
        "fields": {
            "summary": "Backfill events table",
            "issuetype": {"name": "Story"},
            "status": {"name": "In Progress"},
            "priority": {"name": "High"},
            "assignee": {"displayName": "Ada Lovelace"},
            "reporter": {"displayName": "Grace Hopper"},
            "description": {
                "type": "doc",
                "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "Load "}, {"type": "text", "text": "history."}]},
                    {"type": "codeBlock", "content": [{"type": "text", "text": "make backfill"}]}
                ]
            },
            "labels": ["backend"],
            "components": [{"name": "warehouse"}],
            "created": "2024-01-01T09:00:00.000+0000",
            "updated": "2024-01-03T11:30:00.000+0000",
            "statuscategorychangedate": "2024-01-02T09:00:00.000+0000",
            "timespent": 5400,
            "timeoriginalestimate": 7200,
            "issuelinks": [
                {"type": {"name": "is blocked by"}, "inwardIssue": {"key": "OPS-7", "fields": {"summary": "Disk", "status": {"name": "Done"}}}},
                {"type": {"name": "Relates"}, "outwardIssue": {"key": "DATA-50"}}
            ],
            "customfield_10014": "DATA-1",
            "customfield_10016": 5,
            "customfield_10020": [{"name": "Sprint 1"}, {"name": "Sprint 2"}],
            "duedate": "2024-02-01"
        }
    })
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn normalizes_full_issue_from_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("issue.json");
    std::fs::write(&path, full_issue().to_string()).unwrap();

    let output = jflat(&home)
        .args(["normalize", "--base-url", "https://acme.atlassian.net/"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["key"], "DATA-42");
    assert_eq!(value["url"], "https://acme.atlassian.net/browse/DATA-42");
    assert_eq!(value["type"], "Story");
    assert_eq!(value["description"], "Load history.\n```\nmake backfill\n```");
    assert_eq!(value["components"], json!(["warehouse"]));
    assert_eq!(value["created"], "2024-01-01");
    assert_eq!(value["resolved"], "Not resolved");
    assert_eq!(
        value["duration"],
        json!({"days": 2, "formatted": "2 days, 2 hours, 30 minutes"})
    );
    assert_eq!(
        value["time_in_current_status"],
        json!({"days": 1, "formatted": "1 days, 2 hours, 30 minutes"})
    );
    assert_eq!(value["time_logged"], json!({"seconds": 5400, "formatted": "1h 30m"}));
    assert_eq!(value["estimate"], json!({"seconds": 7200, "formatted": "2h 0m"}));
    assert_eq!(value["is_blocked"], true);
    assert_eq!(value["blocked_by"][0]["key"], "OPS-7");
    assert_eq!(value["relates_to"], json!(["DATA-50"]));
    assert_eq!(value["epic_link"], "DATA-1");
    assert_eq!(value["story_points"], 5);
    assert_eq!(value["sprint"], "Sprint 2");
    assert_eq!(value["due_date"], "2024-02-01");
}

#[test]
fn reads_stdin_when_file_is_omitted() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .arg("normalize")
        .write_stdin(r#"{"key": "A-1"}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["url"], "https://localhost/browse/A-1");
}

#[test]
fn dash_reads_stdin() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["normalize", "-"])
        .write_stdin(r#"{"key": "A-1"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"A-1\""));
}

#[test]
fn list_preserves_order() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .arg("normalize")
        .write_stdin(r#"[{"key": "B-2"}, {"key": "A-1"}, {"key": "C-3"}]"#)
        .output()
        .unwrap();
    let keys: Vec<Value> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["key"].clone())
        .collect();
    assert_eq!(keys, [json!("B-2"), json!("A-1"), json!("C-3")]);
}

#[test]
fn empty_list_yields_empty_list() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .arg("normalize")
        .write_stdin("[]")
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output), json!([]));
}

#[test]
fn search_response_is_unwrapped() {
    let home = TempDir::new().unwrap();
    let response = json!({"startAt": 0, "total": 1, "issues": [{"key": "A-1"}]});
    let output = jflat(&home)
        .arg("normalize")
        .write_stdin(response.to_string())
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["key"], "A-1");
}

#[parameterized(
    truncated = { "{\"key\": " },
    prose = { "not json at all" },
)]
fn malformed_input_prints_error_record(input: &str) {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .arg("normalize")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"error": "Invalid JSON format"}));
}

#[test]
fn empty_stdin_fails() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .arg("normalize")
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin is empty"));
}

#[test]
fn blank_file_fails_like_blank_stdin() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("blank.json");
    std::fs::write(&path, "\n").unwrap();
    jflat(&home)
        .arg("normalize")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("blank.json is empty"));
}

#[test]
fn missing_file_fails() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["normalize", "does-not-exist.json"])
        .current_dir(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.json"));
}

#[test]
fn environment_sets_base_url_and_fields() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .env("JIRA_URL", "https://env.example.com")
        .env("CUSTOM_FIELD_SPRINT", "customfield_999")
        .arg("normalize")
        .write_stdin(r#"{"key": "A-1", "fields": {"customfield_999": {"name": "Env Sprint"}}}"#)
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["url"], "https://env.example.com/browse/A-1");
    assert_eq!(value["sprint"], "Env Sprint");
}

#[test]
fn flags_override_environment() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .env("JIRA_URL", "https://env.example.com")
        .args(["normalize", "--base-url", "https://flag.example.com"])
        .write_stdin(r#"{"key": "A-1"}"#)
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&output)["url"],
        "https://flag.example.com/browse/A-1"
    );
}

#[test]
fn config_file_sets_fields() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("jflat.toml");
    std::fs::write(&config, "[fields]\nstory_points = \"customfield_7\"\n").unwrap();

    let output = jflat(&home)
        .arg("normalize")
        .arg("--config")
        .arg(&config)
        .write_stdin(r#"{"key": "A-1", "fields": {"customfield_7": 3.5}}"#)
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["story_points"], 3.5);
}

#[test]
fn invalid_base_url_fails() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["normalize", "--base-url", "acme.atlassian.net"])
        .write_stdin(r#"{"key": "A-1"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn text_output() {
    let home = TempDir::new().unwrap();
    jflat(&home)
        .args(["normalize", "--output", "text"])
        .write_stdin(full_issue().to_string())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[Story] DATA-42: Backfill events table\n",
        ))
        .stdout(predicate::str::contains("Blocked by:\n  OPS-7: Disk [Done]"))
        .stdout(predicate::str::contains("Sprint: Sprint 2"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    let output = jflat(&home)
        .args(["--verbose", "normalize"])
        .write_stdin(r#"[{"key": "A-1"}, {"key": "A-2"}]"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("normalized 2 issue(s)"));
}
