// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::{admin_stats, dashboard_stats, IssueStore};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

use super::open_store;

#[derive(Serialize)]
struct StatsReport {
    dashboard: cvc_core::DashboardStats,
    triage: cvc_core::AdminStats,
}

pub fn run(output: OutputFormat) -> Result<()> {
    let (store, _mirror) = open_store()?;
    run_impl(&store, output)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore, output: OutputFormat) -> Result<()> {
    let dashboard = dashboard_stats(store.issues(), store.stats_block());
    let triage = admin_stats(store.issues(), store.today());

    match output {
        OutputFormat::Text | OutputFormat::Ids => {
            println!("Dashboard");
            println!("  Total issues:       {}", dashboard.total_issues);
            println!("  Pending issues:     {}", dashboard.pending_issues);
            println!("  Resolved issues:    {}", dashboard.resolved_issues);
            println!("  Avg resolution:     {}", dashboard.avg_resolution_time);
            println!();
            println!("Triage queue");
            println!("  Reported:           {}", triage.reported);
            println!("  Assigned:           {}", triage.assigned);
            println!("  In progress:        {}", triage.in_progress);
            println!("  Resolved today:     {}", triage.resolved_today);
        }
        OutputFormat::Json => {
            let report = StatsReport { dashboard, triage };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
