// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the browse surface: `civic list`, `civic show`,
//! `civic stats`, the reference lists, and `civic export`.

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

#[test]
fn list_shows_the_seed_dataset() {
    let temp = init_temp();
    civic()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Large Pothole on MG Road"))
        .stdout(predicate::str::contains("Street Light Not Working"))
        .stdout(predicate::str::contains("Water Supply Disruption"));
}

#[test]
fn list_is_newest_first() {
    let temp = init_temp();
    let id = report_issue(&temp, "Fresh report");

    let output = civic()
        .arg("list")
        .arg("-o")
        .arg("ids")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids, [id.as_str(), "CVC2025001", "CVC2025002", "CVC2025003"]);
}

#[test]
fn search_matches_a_title_substring() {
    let temp = init_temp();
    let output = civic()
        .arg("list")
        .arg("-q")
        .arg("pothole")
        .arg("-o")
        .arg("ids")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "CVC2025001");
}

#[test]
fn category_filter_is_exact() {
    let temp = init_temp();
    civic()
        .arg("list")
        .arg("-c")
        .arg("Roads")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CVC2025001"))
        .stdout(predicate::str::contains("CVC2025003").not());

    // Case matters for category equality.
    civic()
        .arg("list")
        .arg("-c")
        .arg("roads")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn status_filter_accepts_cli_spellings() {
    let temp = init_temp();
    civic()
        .arg("list")
        .arg("-s")
        .arg("in-progress")
        .arg("-o")
        .arg("ids")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("CVC2025001\n"));
}

#[test]
fn filters_combine_with_and() {
    let temp = init_temp();
    civic()
        .arg("list")
        .arg("-q")
        .arg("water")
        .arg("-s")
        .arg("resolved")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn empty_results_suggest_adjusting_filters() {
    let temp = init_temp();
    civic()
        .arg("list")
        .arg("-q")
        .arg("zzz")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Try adjusting your search or filters"));
}

#[test]
fn show_includes_the_timeline() {
    let temp = init_temp();
    civic()
        .arg("show")
        .arg("CVC2025002")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Timeline"))
        .stdout(predicate::str::contains("New LED light installed"));
}

#[test]
fn stats_cover_the_dashboard_and_triage_queue() {
    let temp = init_temp();
    let output = civic()
        .arg("stats")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(stats["dashboard"]["totalIssues"], 3);
    assert_eq!(stats["dashboard"]["resolvedIssues"], 1);
    assert_eq!(stats["dashboard"]["pendingIssues"], 2);
    assert_eq!(stats["triage"]["assigned"], 1);
    assert_eq!(stats["triage"]["inProgress"], 1);
    assert_eq!(stats["triage"]["resolvedToday"], 0);
}

#[test]
fn reference_lists_render() {
    let temp = init_temp();
    civic()
        .arg("categories")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Roads (145 issues)"));

    civic()
        .arg("departments")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BBMP Bengaluru"));
}

#[test]
fn export_writes_the_document() {
    let temp = init_temp();
    report_issue(&temp, "Export me");

    civic()
        .arg("export")
        .arg("dump.json")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 issues to dump.json"));

    let content = std::fs::read_to_string(temp.path().join("dump.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["totalIssues"], 4);
    assert_eq!(doc["categories"].as_array().unwrap().len(), 8);
    assert!(doc["exportDate"].is_string());
    // The static display block rode along, with the bumped total.
    assert_eq!(doc["stats"]["totalIssues"], 1248);
}

#[test]
fn a_corrupt_slot_falls_back_to_the_seed_data() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".civic/civic_connect_data.json"),
        "{broken json",
    )
    .unwrap();

    civic()
        .arg("list")
        .arg("-o")
        .arg("ids")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CVC2025001"));
}
