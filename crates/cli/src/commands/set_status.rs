// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::{AdminSession, IssueStore, Mirror, Status};

use crate::error::{Error, Result};

use super::{open_store, persist};

pub fn run(id: &str, status: &str, department_id: &str, password: &str) -> Result<()> {
    let status = status.parse::<Status>()?;

    // The CLI is process-per-command, so the process-lifetime session is
    // established fresh on every triage call.
    let mut session = AdminSession::new();
    session.login(department_id, password)?;

    let (mut store, mirror) = open_store()?;
    run_impl(&mut store, &mirror, &session, id, status)
}

/// Internal implementation that accepts the store and session for testing.
pub(crate) fn run_impl(
    store: &mut IssueStore,
    mirror: &Mirror,
    session: &AdminSession,
    id: &str,
    status: Status,
) -> Result<()> {
    // Status mutation is gated on an authenticated admin session.
    if !session.is_authenticated() {
        return Err(Error::InvalidCredentials);
    }

    let issue = store.update_status(id, status)?;
    println!("Issue {} updated to: {}", issue.id, issue.status);

    persist(store, mirror);
    Ok(())
}

#[cfg(test)]
#[path = "set_status_tests.rs"]
mod tests;
