// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export document assembly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::clock::ClockSource;
use crate::issue::Issue;
use crate::refdata::Category;
use crate::stats::StatsBlock;
use crate::store::IssueStore;

/// The on-demand export payload offered to the user as a download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub total_issues: usize,
    pub issues: Vec<Issue>,
    pub categories: Vec<Category>,
    pub stats: StatsBlock,
}

/// Builds the export document from the store's current state.
pub fn build_export<C: ClockSource>(store: &IssueStore<C>) -> ExportDocument {
    ExportDocument {
        export_date: store.now(),
        total_issues: store.issues().len(),
        issues: store.issues().to_vec(),
        categories: store.categories().to_vec(),
        stats: store.stats_block().clone(),
    }
}

/// Default export file name, dated by calendar day.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("civic_issues_export_{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
