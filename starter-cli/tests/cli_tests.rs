//! Integration tests for the Starter CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn starter() -> Command {
    Command::cargo_bin("starter").unwrap()
}

#[test]
fn test_help() {
    starter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("respond"));
}

#[test]
fn test_version() {
    starter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("starter"));
}

#[test]
fn test_resolve_help() {
    starter()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve the API version"))
        .stdout(predicate::str::contains("--strategy"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_resolve_without_header() {
    starter()
        .arg("resolve")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_resolve_accept_parameter() {
    starter()
        .args(["resolve", "application/json; api-version=1"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_resolve_clamps_zero() {
    starter()
        .args(["resolve", "application/json; api-version=0"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_resolve_non_numeric_falls_back() {
    starter()
        .args(["resolve", "application/json; api-version=abc"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_resolve_dedicated_header() {
    starter()
        .args(["resolve", "--strategy", "header", "--", "-4"])
        .assert()
        .success()
        .stdout("1\n");

    starter()
        .args(["resolve", "--strategy", "header", "9"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_resolve_json() {
    let output = starter()
        .args(["resolve", "--json", "application/json; api-version=3"])
        .output()
        .expect("Failed to run starter");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(body["version"], 3);
    assert_eq!(body["strategy"], "accept");
    assert_eq!(body["header"], "accept");
}

#[test]
fn test_unknown_strategy_rejected() {
    starter()
        .args(["resolve", "--strategy", "query", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown versioning strategy"));
}

#[test]
fn test_respond_version_1() {
    let output = starter()
        .args(["respond", "application/json; api-version=1"])
        .output()
        .expect("Failed to run starter");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(body, serde_json::json!({ "message": "Hello, FastAPI starter!" }));
}

#[test]
fn test_respond_default() {
    let output = starter().arg("respond").output().expect("Failed to run starter");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(
        body,
        serde_json::json!({ "message": "Hello, FastAPI starter!", "version": 2, "status": "ok" })
    );
}
