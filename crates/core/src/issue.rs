// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the CivicConnect tracker.
//!
//! This module contains the fundamental data types: Issue, Status, Priority,
//! TimelineEntry, and VoteDirection.
//!
//! Serialized field and variant names match the persisted wire format, which
//! uses camelCase keys and human-readable status strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Timeline note seeded on every new submission.
pub const SUBMIT_NOTE: &str = "Issue submitted by citizen";

/// Handling stage of an issue.
///
/// The listed order is the expected path, not an enforced one: an admin may
/// set any status from any other status. The timeline records every distinct
/// status ever set, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Submitted by a citizen. Initial state for new issues.
    Reported,
    /// Routed to a department.
    Assigned,
    /// Work underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work finished, awaiting verification.
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Verified fixed.
    Resolved,
}

impl Status {
    /// Returns the display string used in storage and filtering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Reported => "Reported",
            Status::Assigned => "Assigned",
            Status::InProgress => "In Progress",
            Status::UnderReview => "Under Review",
            Status::Resolved => "Resolved",
        }
    }

    /// Returns true once the issue has been verified fixed.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Status::Resolved)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "reported" => Ok(Status::Reported),
            "assigned" => Ok(Status::Assigned),
            "in progress" => Ok(Status::InProgress),
            "under review" => Ok(Status::UnderReview),
            "resolved" => Ok(Status::Resolved),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Severity classification used for display emphasis and sorting, not for
/// enforced ordering of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Emergency,
}

impl Priority {
    /// Returns the display string used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "emergency" => Ok(Priority::Emergency),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Direction of a community vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl FromStr for VoteDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            _ => Err(Error::InvalidVoteDirection(s.to_string())),
        }
    }
}

/// An immutable record of one status change, in chronological append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Status the issue entered.
    pub status: Status,
    /// Calendar date of the change.
    pub date: NaiveDate,
    /// Optional annotation for the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TimelineEntry {
    /// Creates an entry with no note.
    pub fn new(status: Status, date: NaiveDate) -> Self {
        TimelineEntry {
            status,
            date,
            note: None,
        }
    }

    /// Sets the note for this entry (builder pattern).
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Intake record for a citizen submission.
///
/// Intake is permissive: every field is stored as given, empty strings
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// Optional "lat,long" pair captured at submission.
    pub coordinates: Option<String>,
    pub priority: Priority,
    pub reported_by: String,
}

/// The primary entity: one reported civic problem and its full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier (format: `CVC<year><sequence>`), immutable.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Category name. Any string is accepted; the reference list is advisory.
    pub category: String,
    pub location: String,
    /// Optional "lat,long" pair, display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub reported_by: String,
    /// Date of creation, immutable.
    pub report_date: NaiveDate,
    /// Department name; empty until assignment.
    pub assigned_to: String,
    /// Community vote counter, floored at zero.
    pub votes: u32,
    /// Display-only counter; no operation in the core increments it.
    pub comments: u32,
    /// Append-only status history; the first entry is always the submission.
    pub timeline: Vec<TimelineEntry>,
}

impl Issue {
    /// Creates a freshly reported issue with a seeded timeline entry.
    pub fn new(id: String, input: NewIssue, report_date: NaiveDate) -> Self {
        Issue {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            location: input.location,
            coordinates: input.coordinates,
            priority: input.priority,
            status: Status::Reported,
            reported_by: input.reported_by,
            report_date,
            assigned_to: String::new(),
            votes: 0,
            comments: 0,
            timeline: vec![TimelineEntry::new(Status::Reported, report_date).with_note(SUBMIT_NOTE)],
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
