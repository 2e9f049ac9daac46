// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cvc_core::IssueStore;

use crate::error::Result;

use super::open_store;

pub fn run() -> Result<()> {
    let (store, _mirror) = open_store()?;
    run_impl(&store)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore) -> Result<()> {
    for dept in store.departments() {
        println!(
            "{}: responds in {}, resolves {}",
            dept.name, dept.response_time, dept.resolution_rate
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "departments_tests.rs"]
mod tests;
