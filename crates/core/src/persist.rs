// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort persistence mirror.
//!
//! Serializes the issue collection and stats block to a single JSON slot.
//! The mirror is non-authoritative: writes overwrite unconditionally and
//! failures are swallowed, reads fall back to nothing on absent or corrupt
//! data so callers proceed with defaults. Missing keys inside the record are
//! tolerated and unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::issue::Issue;
use crate::stats::{StatsBlock, StatsPatch};

/// A serializable view of the store for writing the slot.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot<'a> {
    pub issues: &'a [Issue],
    pub stats: &'a StatsBlock,
}

/// State read back from the slot. Both keys are optional; the caller merges
/// with defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,
    #[serde(default)]
    pub stats: Option<StatsPatch>,
}

/// Best-effort JSON slot keyed by a fixed file path.
#[derive(Debug, Clone)]
pub struct Mirror {
    path: PathBuf,
}

impl Mirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Mirror { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the slot unconditionally. Best-effort: errors are
    /// discarded so mutation paths never fail on a bad mirror.
    pub fn save(&self, snapshot: &StateSnapshot<'_>) {
        let _ = self.try_save(snapshot);
    }

    /// Fallible write, for callers and tests that want the error.
    pub fn try_save(&self, snapshot: &StateSnapshot<'_>) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Reads the slot. Absent or corrupt data yields `None` and the caller
    /// proceeds with defaults; no error is surfaced to the user.
    pub fn load(&self) -> Option<PersistedState> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

#[cfg(test)]
#[path = "persist_tests.rs"]
mod tests;
