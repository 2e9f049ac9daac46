// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cvc-core operations.

use thiserror::Error;

/// All possible errors that can occur in cvc-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("invalid credentials\n  hint: demo credentials are mumbai_admin / admin123")]
    InvalidCredentials,

    #[error("invalid status: '{0}'\n  hint: valid statuses are: reported, assigned, in-progress, under-review, resolved")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, emergency")]
    InvalidPriority(String),

    #[error("invalid vote direction: '{0}'\n  hint: valid directions are: up, down")]
    InvalidVoteDirection(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cvc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
