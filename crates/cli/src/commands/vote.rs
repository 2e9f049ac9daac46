// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::{IssueStore, Mirror, VoteDirection};

use crate::error::Result;

use super::{open_store, persist};

pub fn run(id: &str, direction: &str) -> Result<()> {
    let direction = direction.parse::<VoteDirection>()?;
    let (mut store, mirror) = open_store()?;
    run_impl(&mut store, &mirror, id, direction)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(
    store: &mut IssueStore,
    mirror: &Mirror,
    id: &str,
    direction: VoteDirection,
) -> Result<()> {
    let issue = store.vote(id, direction)?;
    println!("Vote recorded: {} now has {} votes", issue.id, issue.votes);

    persist(store, mirror);
    Ok(())
}

#[cfg(test)]
#[path = "vote_tests.rs"]
mod tests;
