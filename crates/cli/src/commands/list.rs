// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::{filter, IssueQuery, IssueStore, Status};

use crate::cli::OutputFormat;
use crate::display::format_issue_line;
use crate::error::Result;

use super::open_store;

pub fn run(
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let (store, _mirror) = open_store()?;
    run_impl(&store, search, category, status, output)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &IssueStore,
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    // Parse the status flag so `in-progress` and friends normalize to the
    // exact display string the filter compares against.
    let status = match status {
        Some(s) => s.parse::<Status>()?.as_str().to_string(),
        None => String::new(),
    };
    let query = IssueQuery {
        text: search.unwrap_or_default(),
        category: category.unwrap_or_default(),
        status,
    };

    let issues = filter(store.issues(), &query);

    match output {
        OutputFormat::Text => {
            if issues.is_empty() {
                println!("No issues found");
                println!("Try adjusting your search or filters");
                return Ok(());
            }
            for issue in &issues {
                println!("{}", format_issue_line(issue));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&issues)?);
        }
        OutputFormat::Ids => {
            for issue in &issues {
                println!("{}", issue.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
