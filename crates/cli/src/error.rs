// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the hdrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'helpdesk init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error("invalid status transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: high, medium, low")]
    InvalidPriority(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, resolved")]
    InvalidStatus(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("nothing to edit\n  hint: pass at least one of --title, --description, --requester, --priority")]
    NothingToEdit,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// A specialized Result type for hdrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<hd_core::Error> for Error {
    fn from(e: hd_core::Error) -> Self {
        match e {
            hd_core::Error::InvalidPriority(s) => Error::InvalidPriority(s),
            hd_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            hd_core::Error::InvalidKey(key) => {
                Error::Config(format!("invalid storage key '{}'", key))
            }
            hd_core::Error::Io(e) => Error::Io(e),
            hd_core::Error::Json(e) => Error::Json(e),
            hd_core::Error::Storage(s) => Error::Storage(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
