// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_REQUESTER_LENGTH: usize = 254;

/// Trim a field and check it is non-empty and within `max` characters.
fn validate_field(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(trimmed.to_string())
}

/// Validate and trim a ticket title.
pub fn validate_title(title: &str) -> Result<String> {
    validate_field("Title", title, MAX_TITLE_LENGTH)
}

/// Validate and trim a ticket description.
pub fn validate_description(description: &str) -> Result<String> {
    validate_field("Description", description, MAX_DESCRIPTION_LENGTH)
}

/// Validate and trim a requester name or email.
pub fn validate_requester(requester: &str) -> Result<String> {
    validate_field("Requester", requester, MAX_REQUESTER_LENGTH)
}

/// Require a flag that has no default on `new`.
pub fn require(field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or(Error::FieldRequired { field })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
