// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporter identity detection.
//!
//! Pre-fills the reporter name when a submission does not name one.

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use std::process::Command;

/// Returns a display name for the submitting user.
///
/// Resolution order:
/// 1. Git config user.name (display name only, never email)
/// 2. Unix username from USER or LOGNAME env var (if not a system account)
/// 3. Fallback to "citizen"
pub fn reporter_name() -> String {
    if let Some(name) = git_user_name() {
        return name;
    }

    if let Some(name) = unix_username() {
        if !is_system_account(&name) {
            return name;
        }
    }

    "citizen".to_string()
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if output.status.success() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

fn unix_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn is_system_account(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "root" | "system" | "administrator" | "admin" | "daemon" | "nobody"
    )
}
