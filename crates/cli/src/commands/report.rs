// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::{identity, IssueStore, Mirror, NewIssue, Priority};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::{open_store, persist};

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: String,
    description: String,
    category: String,
    location: String,
    locate: bool,
    priority: &str,
    reporter: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    if locate {
        // No terminal environment exposes device geolocation; surface the
        // manual fallback instead of guessing.
        return Err(Error::GeolocationUnsupported);
    }

    let priority = priority.parse::<Priority>()?;
    let reported_by = reporter.unwrap_or_else(identity::reporter_name);
    let input = NewIssue {
        title,
        description,
        category,
        location,
        coordinates: None,
        priority,
        reported_by,
    };

    let (mut store, mirror) = open_store()?;
    run_impl(&mut store, &mirror, input, output)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &mut IssueStore,
    mirror: &Mirror,
    input: NewIssue,
    output: OutputFormat,
) -> Result<()> {
    let issue = store.create(input);

    match output {
        OutputFormat::Text => {
            println!("Issue reported. Your issue id is: {}", issue.id);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(issue)?);
        }
        OutputFormat::Ids => {
            println!("{}", issue.id);
        }
    }

    persist(store, mirror);
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
