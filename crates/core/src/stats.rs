// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derived statistics and the static display-stats block.
//!
//! Dashboard and admin counts are recomputed from the live collection on
//! every call. Collections are small, so correctness wins over incremental
//! maintenance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Status};

/// Static city-wide display figures carried alongside the issue collection.
///
/// Seeded once, persisted with the issues, and shallow-merged field-by-field
/// on load. `total_issues` is bumped on every submission; the other figures
/// stay display-seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBlock {
    pub total_issues: u64,
    pub resolved_issues: u64,
    pub active_users: u64,
    pub avg_resolution_time: String,
    pub satisfaction_rate: String,
}

impl StatsBlock {
    /// The seed figures shown before any persisted state is loaded.
    pub fn seed() -> Self {
        StatsBlock {
            total_issues: 1247,
            resolved_issues: 967,
            active_users: 34567,
            avg_resolution_time: "2.4 days".to_string(),
            satisfaction_rate: "78%".to_string(),
        }
    }

    /// Shallow-merges persisted fields over this block. Fields absent from
    /// the patch keep their current value.
    pub fn merge(&mut self, patch: StatsPatch) {
        if let Some(v) = patch.total_issues {
            self.total_issues = v;
        }
        if let Some(v) = patch.resolved_issues {
            self.resolved_issues = v;
        }
        if let Some(v) = patch.active_users {
            self.active_users = v;
        }
        if let Some(v) = patch.avg_resolution_time {
            self.avg_resolution_time = v;
        }
        if let Some(v) = patch.satisfaction_rate {
            self.satisfaction_rate = v;
        }
    }
}

/// Field-by-field overlay read back from the persistence slot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPatch {
    #[serde(default)]
    pub total_issues: Option<u64>,
    #[serde(default)]
    pub resolved_issues: Option<u64>,
    #[serde(default)]
    pub active_users: Option<u64>,
    #[serde(default)]
    pub avg_resolution_time: Option<String>,
    #[serde(default)]
    pub satisfaction_rate: Option<String>,
}

/// Dashboard headline counts derived from the live collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_issues: usize,
    pub pending_issues: usize,
    pub resolved_issues: usize,
    /// Display figure taken from the static block, not derived.
    pub avg_resolution_time: String,
}

/// Computes the dashboard counts on demand.
pub fn dashboard_stats(issues: &[Issue], block: &StatsBlock) -> DashboardStats {
    let total_issues = issues.len();
    let resolved_issues = issues.iter().filter(|i| i.status.is_resolved()).count();
    DashboardStats {
        total_issues,
        pending_issues: total_issues - resolved_issues,
        resolved_issues,
        avg_resolution_time: block.avg_resolution_time.clone(),
    }
}

/// Admin triage-queue counts derived from the live collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub reported: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub resolved_today: usize,
}

/// Computes the admin breakdown on demand.
///
/// `resolved_today` counts issues that are currently `Resolved` and whose
/// timeline records a `Resolved` entry dated `today` (calendar-date compare,
/// never timestamps).
pub fn admin_stats(issues: &[Issue], today: NaiveDate) -> AdminStats {
    let count = |status: Status| issues.iter().filter(|i| i.status == status).count();
    let resolved_today = issues
        .iter()
        .filter(|i| i.status.is_resolved())
        .filter(|i| {
            i.timeline
                .iter()
                .any(|t| t.status.is_resolved() && t.date == today)
        })
        .count();
    AdminStats {
        reported: count(Status::Reported),
        assigned: count(Status::Assigned),
        in_progress: count(Status::InProgress),
        resolved_today,
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
