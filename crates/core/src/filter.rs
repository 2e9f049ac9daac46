// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pure filtering over a read-only view of the collection.
//!
//! Input order is preserved; there is no re-sort. An empty result is a valid
//! outcome, not an error.

use crate::issue::Issue;

/// Search and filter dimensions. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueQuery {
    /// Case-insensitive substring matched against title, description, or
    /// location; a hit in any one field is enough.
    pub text: String,
    /// Exact category name (case-sensitive).
    pub category: String,
    /// Exact status display string (case-sensitive).
    pub status: String,
}

/// Returns true if the issue satisfies all three filter dimensions.
pub fn matches(issue: &Issue, query: &IssueQuery) -> bool {
    let text = query.text.to_lowercase();
    let matches_text = text.is_empty()
        || issue.title.to_lowercase().contains(&text)
        || issue.description.to_lowercase().contains(&text)
        || issue.location.to_lowercase().contains(&text);
    let matches_category = query.category.is_empty() || issue.category == query.category;
    let matches_status = query.status.is_empty() || issue.status.as_str() == query.status;
    matches_text && matches_category && matches_status
}

/// Filters the collection, preserving input order.
pub fn filter<'a>(issues: &'a [Issue], query: &IssueQuery) -> Vec<&'a Issue> {
    issues.iter().filter(|i| matches(i, query)).collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
