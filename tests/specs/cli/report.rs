// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `civic report` and `civic vote` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn civic() -> Command {
    cargo_bin_cmd!("civic")
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    civic()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

fn report_issue(temp: &TempDir, title: &str, opts: &[&str]) -> String {
    let mut cmd = civic();
    cmd.arg("report").arg(title);
    for opt in opts {
        cmd.arg(opt);
    }
    cmd.arg("-o").arg("ids");

    let output = cmd.current_dir(temp.path()).output().unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn show_json(temp: &TempDir, id: &str) -> serde_json::Value {
    let output = civic()
        .arg("show")
        .arg(id)
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn report_assigns_the_next_sequential_id() {
    let temp = init_temp();
    // Three seed issues, so the first submission is 004.
    assert_eq!(report_issue(&temp, "Blocked drain", &[]), "CVC2025004");
    assert_eq!(report_issue(&temp, "Fallen tree", &[]), "CVC2025005");
}

#[test]
fn report_seeds_the_submission_state() {
    let temp = init_temp();
    let id = report_issue(
        &temp,
        "No street light",
        &["-c", "Street Lights", "-l", "Sector 9", "-p", "high", "-r", "Asha"],
    );

    let issue = show_json(&temp, &id);
    assert_eq!(issue["status"], "Reported");
    assert_eq!(issue["votes"], 0);
    assert_eq!(issue["comments"], 0);
    assert_eq!(issue["assignedTo"], "");
    assert_eq!(issue["priority"], "High");
    assert_eq!(issue["reportedBy"], "Asha");
    assert_eq!(issue["timeline"].as_array().unwrap().len(), 1);
    assert_eq!(
        issue["timeline"][0]["note"],
        "Issue submitted by citizen"
    );
}

#[test]
fn report_persists_across_invocations() {
    let temp = init_temp();
    let id = report_issue(&temp, "Overflowing bin", &[]);

    civic()
        .arg("list")
        .arg("-q")
        .arg("overflowing")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));
}

#[test]
fn report_rejects_an_unknown_priority() {
    let temp = init_temp();
    civic()
        .arg("report")
        .arg("Broken bench")
        .arg("-p")
        .arg("urgent")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid priority"));
}

#[test]
fn report_locate_offers_the_manual_fallback() {
    let temp = init_temp();
    civic()
        .arg("report")
        .arg("Pothole")
        .arg("--locate")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("geolocation is not available"))
        .stderr(predicate::str::contains("--location"));
}

#[test]
fn report_without_init_fails() {
    let temp = TempDir::new().unwrap();
    civic()
        .arg("report")
        .arg("Anything")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'civic init' first"));
}

#[test]
fn vote_up_twice_reaches_two() {
    let temp = init_temp();
    let id = report_issue(&temp, "Votable", &[]);

    for _ in 0..2 {
        civic()
            .arg("vote")
            .arg(&id)
            .arg("up")
            .current_dir(temp.path())
            .assert()
            .success();
    }

    assert_eq!(show_json(&temp, &id)["votes"], 2);
}

#[test]
fn vote_down_floors_at_zero() {
    let temp = init_temp();
    let id = report_issue(&temp, "Votable", &[]);

    for _ in 0..3 {
        civic()
            .arg("vote")
            .arg(&id)
            .arg("down")
            .current_dir(temp.path())
            .assert()
            .success();
    }

    assert_eq!(show_json(&temp, &id)["votes"], 0);
}

#[test]
fn vote_on_an_unknown_issue_fails() {
    let temp = init_temp();
    civic()
        .arg("vote")
        .arg("CVC2025999")
        .arg("up")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: CVC2025999"));
}

#[test]
fn vote_rejects_an_unknown_direction() {
    let temp = init_temp();
    civic()
        .arg("vote")
        .arg("CVC2025001")
        .arg("sideways")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid vote direction"));
}
