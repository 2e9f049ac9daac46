// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::IssueStore;

use crate::cli::OutputFormat;
use crate::display::format_issue_details;
use crate::error::Result;

use super::open_store;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (store, _mirror) = open_store()?;
    run_impl(&store, id, output)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore, id: &str, output: OutputFormat) -> Result<()> {
    let issue = store.find_by_id(id)?;

    match output {
        OutputFormat::Text => println!("{}", format_issue_details(issue)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(issue)?),
        OutputFormat::Ids => println!("{}", issue.id),
    }

    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
