// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::Issue;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Wrap single-line text at word boundaries.
///
/// Content that already contains newlines is preserved exactly.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for word in content.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join("\n")
}

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "- [{}] ({}) {}: {} [{} votes]",
        issue.priority, issue.status, issue.id, issue.title, issue.votes
    )
}

/// Format issue details for show command
pub fn format_issue_details(issue: &Issue) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}: {}", issue.priority, issue.id, issue.title));
    output.push(format!("  Status:      {}", issue.status));
    if !issue.category.is_empty() {
        output.push(format!("  Category:    {}", issue.category));
    }
    if !issue.location.is_empty() {
        output.push(format!("  Location:    {}", issue.location));
    }
    if let Some(coords) = &issue.coordinates {
        output.push(format!("  Coordinates: {}", coords));
    }
    output.push(format!(
        "  Reported by: {} on {}",
        issue.reported_by, issue.report_date
    ));
    if !issue.assigned_to.is_empty() {
        output.push(format!("  Assigned to: {}", issue.assigned_to));
    }
    output.push(format!(
        "  Engagement:  {} votes, {} comments",
        issue.votes, issue.comments
    ));

    if !issue.description.is_empty() {
        output.push(String::new());
        output.push("  Description".to_string());
        for line in wrap_text(&issue.description, WRAP_WIDTH).lines() {
            output.push(format!("    {}", line));
        }
    }

    output.push(String::new());
    output.push("  Timeline".to_string());
    for entry in &issue.timeline {
        let mut line = format!("    {}  {}", entry.date, entry.status);
        if let Some(note) = &entry.note {
            line.push_str(&format!("  ({})", note));
        }
        output.push(line);
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
