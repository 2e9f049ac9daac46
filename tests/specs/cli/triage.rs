// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the admin triage surface: `civic set-status`.

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

fn report_issue(temp: &TempDir, title: &str) -> String {
    let output = civic()
        .arg("report")
        .arg(title)
        .arg("-o")
        .arg("ids")
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn set_status(temp: &TempDir, id: &str, status: &str) -> assert_cmd::assert::Assert {
    civic()
        .arg("set-status")
        .arg(id)
        .arg(status)
        .arg("--department-id")
        .arg("mumbai_admin")
        .arg("--password")
        .arg("admin123")
        .current_dir(temp.path())
        .assert()
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
fn demo_credentials_unlock_the_status_update() {
    let temp = init_temp();
    let id = report_issue(&temp, "Triage me");

    set_status(&temp, &id, "under-review")
        .success()
        .stdout(predicate::str::contains(format!(
            "Issue {} updated to: Under Review",
            id
        )));

    let issue = show_json(&temp, &id);
    assert_eq!(issue["status"], "Under Review");
}

#[test]
fn a_status_change_appends_a_timeline_entry() {
    let temp = init_temp();
    let id = report_issue(&temp, "Triage me");

    set_status(&temp, &id, "in-progress").success();

    let issue = show_json(&temp, &id);
    let timeline = issue["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[1]["status"], "In Progress");
    assert_eq!(timeline[1]["note"], "Status updated by admin");
}

#[test]
fn setting_the_current_status_is_a_noop() {
    let temp = init_temp();
    let id = report_issue(&temp, "Unchanged");

    set_status(&temp, &id, "reported").success();

    let issue = show_json(&temp, &id);
    assert_eq!(issue["timeline"].as_array().unwrap().len(), 1);
}

#[test]
fn moving_to_assigned_auto_assigns_the_default_department() {
    let temp = init_temp();
    let id = report_issue(&temp, "Unrouted");

    set_status(&temp, &id, "assigned").success();

    let issue = show_json(&temp, &id);
    assert_eq!(
        issue["assignedTo"],
        "Mumbai Municipal Corporation - General Department"
    );
}

#[test]
fn an_existing_assignee_is_kept() {
    let temp = init_temp();
    // CVC2025003 is already routed to BWSSB in the seed data.
    set_status(&temp, "CVC2025003", "reported").success();
    set_status(&temp, "CVC2025003", "assigned").success();

    let issue = show_json(&temp, "CVC2025003");
    assert_eq!(issue["assignedTo"], "BWSSB - Water Distribution");
}

#[test]
fn any_status_may_follow_any_other() {
    let temp = init_temp();
    // Straight from Resolved back to Reported: admin discretion.
    set_status(&temp, "CVC2025002", "reported").success();
    assert_eq!(show_json(&temp, "CVC2025002")["status"], "Reported");
}

#[test]
fn wrong_credentials_are_rejected_with_a_hint() {
    let temp = init_temp();
    civic()
        .arg("set-status")
        .arg("CVC2025001")
        .arg("resolved")
        .arg("--department-id")
        .arg("mumbai_admin")
        .arg("--password")
        .arg("nope")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid credentials"))
        .stderr(predicate::str::contains("mumbai_admin / admin123"));

    // The issue was left untouched.
    assert_eq!(show_json(&temp, "CVC2025001")["status"], "In Progress");
}

#[test]
fn unknown_issues_report_not_found() {
    let temp = init_temp();
    set_status(&temp, "CVC2025999", "assigned")
        .failure()
        .stderr(predicate::str::contains("issue not found: CVC2025999"));
}

#[test]
fn resolving_today_shows_up_in_the_triage_stats() {
    let temp = init_temp();
    let id = report_issue(&temp, "Fix me today");
    set_status(&temp, &id, "resolved").success();

    let output = civic()
        .arg("stats")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["triage"]["resolvedToday"], 1);
}
