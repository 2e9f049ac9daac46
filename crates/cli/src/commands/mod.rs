// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod categories;
pub mod departments;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod set_status;
pub mod show;
pub mod stats;
pub mod vote;

use cvc_core::{IssueStore, Mirror};

use crate::config::{find_work_dir, state_path, Config};
use crate::error::Result;

/// Helper to open the store for the current workspace.
///
/// Seeds the defaults, then hydrates from the persistence mirror. Absent or
/// corrupt persisted state silently keeps the defaults.
pub fn open_store() -> Result<(IssueStore, Mirror)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let mirror = Mirror::new(state_path(&work_dir, &config));
    let mut store = IssueStore::new();
    if let Some(state) = mirror.load() {
        store.hydrate(state);
    }
    Ok((store, mirror))
}

/// Mirror write after a mutation. Best-effort: a failed write never fails
/// the operation that triggered it.
pub fn persist(store: &IssueStore, mirror: &Mirror) {
    mirror.save(&store.snapshot());
}
