// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::config::init_work_dir;
use crate::error::Result;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let base = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let work_dir = init_work_dir(&base)?;
    println!("Initialized civic workspace at {}", work_dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
