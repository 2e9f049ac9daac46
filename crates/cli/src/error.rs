// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the civicrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'civic init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

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

    #[error("geolocation is not available in this environment\n  hint: pass the location manually with --location")]
    GeolocationUnsupported,

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for civicrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<cvc_core::Error> for Error {
    fn from(e: cvc_core::Error) -> Self {
        match e {
            cvc_core::Error::IssueNotFound(id) => Error::IssueNotFound(id),
            cvc_core::Error::InvalidCredentials => Error::InvalidCredentials,
            cvc_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            cvc_core::Error::InvalidPriority(s) => Error::InvalidPriority(s),
            cvc_core::Error::InvalidVoteDirection(s) => Error::InvalidVoteDirection(s),
            cvc_core::Error::Io(e) => Error::Io(e),
            cvc_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
