// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;

use cvc_core::{build_export, export_file_name, IssueStore};

use crate::error::{Error, Result};

use super::open_store;

pub fn run(filepath: Option<String>) -> Result<()> {
    let (store, _mirror) = open_store()?;
    run_impl(&store, filepath)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl(store: &IssueStore, filepath: Option<String>) -> Result<()> {
    if let Some(path) = &filepath {
        if path.trim().is_empty() {
            return Err(Error::ExportPathEmpty);
        }
    }

    let doc = build_export(store);
    let path = filepath.unwrap_or_else(|| export_file_name(store.today()));
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(&path, json)?;

    println!("Exported {} issues to {}", doc.total_issues, path);
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
