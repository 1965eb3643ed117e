// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hd-core operations.

use thiserror::Error;

/// All possible errors that can occur in hd-core operations.
///
/// Operations on unknown ticket ids are not errors: the store absorbs them
/// as no-ops.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid priority: '{0}'\n  hint: valid priorities are: high, medium, low")]
    InvalidPriority(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, resolved")]
    InvalidStatus(String),

    #[error("invalid storage key: '{0}'\n  hint: keys use letters, digits, '-', '_' and '.'")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

/// A specialized Result type for hd-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
