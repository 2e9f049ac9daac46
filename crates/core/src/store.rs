// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The issue store: owns the collection and drives the issue lifecycle.
//!
//! The store is an explicitly owned, injectable instance. Consumers receive
//! it by reference; filtering and stats operate on the read-only view from
//! [`IssueStore::issues`]. Nothing else holds a mutable handle to the
//! collection.

use chrono::{DateTime, NaiveDate, Utc};

use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};
use crate::issue::{Issue, NewIssue, Status, TimelineEntry, VoteDirection};
use crate::persist::{PersistedState, StateSnapshot};
use crate::refdata::{self, Category, Department};
use crate::stats::StatsBlock;

/// Prefix for generated issue ids.
///
/// Known limitation: the sequence collides once the count passes 999 or the
/// calendar year rolls over. Kept as-is rather than silently changing the
/// published id scheme.
const ID_PREFIX: &str = "CVC2025";

/// Department set when an issue moves to `Assigned` without a routing
/// decision.
const DEFAULT_DEPARTMENT: &str = "Mumbai Municipal Corporation - General Department";

/// Timeline note recorded for admin status changes.
const STATUS_UPDATE_NOTE: &str = "Status updated by admin";

/// Owns the issue collection and the reference lists.
pub struct IssueStore<C: ClockSource = SystemClock> {
    clock: C,
    issues: Vec<Issue>,
    categories: Vec<Category>,
    departments: Vec<Department>,
    stats: StatsBlock,
}

impl IssueStore<SystemClock> {
    /// Creates a store holding the seed dataset, on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IssueStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> IssueStore<C> {
    /// Creates a seeded store with a custom clock source.
    pub fn with_clock(clock: C) -> Self {
        IssueStore {
            clock,
            issues: refdata::seed_issues(),
            categories: refdata::seed_categories(),
            departments: refdata::seed_departments(),
            stats: StatsBlock::seed(),
        }
    }

    /// Submits a new issue and returns it.
    ///
    /// Intake is permissive: fields are stored as given, empty strings
    /// included. The issue is prepended so the collection stays
    /// newest-first.
    pub fn create(&mut self, input: NewIssue) -> &Issue {
        let id = self.next_id();
        let issue = Issue::new(id, input, self.clock.today());
        self.issues.insert(0, issue);
        self.stats.total_issues += 1;
        &self.issues[0]
    }

    /// Records a community vote. Downvotes floor at zero.
    pub fn vote(&mut self, id: &str, direction: VoteDirection) -> Result<&Issue> {
        let issue = self.issue_mut(id)?;
        match direction {
            VoteDirection::Up => issue.votes += 1,
            VoteDirection::Down => issue.votes = issue.votes.saturating_sub(1),
        }
        Ok(issue)
    }

    /// Sets an issue's status at admin discretion: any status may follow any
    /// other. Setting the current status again is a no-op with no timeline
    /// append.
    ///
    /// Moving to `Assigned` with no department on record auto-assigns the
    /// default department.
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<&Issue> {
        let today = self.clock.today();
        let issue = self.issue_mut(id)?;
        if issue.status == status {
            return Ok(issue);
        }
        issue.status = status;
        issue
            .timeline
            .push(TimelineEntry::new(status, today).with_note(STATUS_UPDATE_NOTE));
        if status == Status::Assigned && issue.assigned_to.is_empty() {
            issue.assigned_to = DEFAULT_DEPARTMENT.to_string();
        }
        Ok(issue)
    }

    /// Read-only lookup by id.
    pub fn find_by_id(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    fn issue_mut(&mut self, id: &str) -> Result<&mut Issue> {
        self.issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    /// Read-only view of the collection, newest-first.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn stats_block(&self) -> &StatsBlock {
        &self.stats
    }

    /// Current calendar date from the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current instant from the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Serializable view of the collection and stats block for the mirror.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            issues: &self.issues,
            stats: &self.stats,
        }
    }

    /// Applies state read back from the mirror: a loaded collection replaces
    /// the default wholesale; stats merge field-by-field over the seed.
    pub fn hydrate(&mut self, state: PersistedState) {
        if let Some(issues) = state.issues {
            self.issues = issues;
        }
        if let Some(patch) = state.stats {
            self.stats.merge(patch);
        }
    }

    fn next_id(&self) -> String {
        format!("{}{:03}", ID_PREFIX, self.issues.len() + 1)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
