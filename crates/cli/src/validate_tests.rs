// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_validate_title_trims() {
    assert_eq!(validate_title("  Email not working \n").unwrap(), "Email not working");
}

#[parameterized(
    empty = { "" },
    spaces = { "   " },
    newlines = { "\n\t\n" },
)]
fn test_blank_fields_rejected(value: &str) {
    assert!(matches!(
        validate_title(value),
        Err(Error::FieldEmpty { field: "Title" })
    ));
    assert!(matches!(
        validate_description(value),
        Err(Error::FieldEmpty { field: "Description" })
    ));
    assert!(matches!(
        validate_requester(value),
        Err(Error::FieldEmpty { field: "Requester" })
    ));
}

#[test]
fn test_validate_title_at_limit() {
    assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
}

#[test]
fn test_validate_title_too_long() {
    let err = validate_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).unwrap_err();
    assert!(matches!(
        err,
        Error::FieldTooLong {
            field: "Title",
            actual: 201,
            max: MAX_TITLE_LENGTH,
        }
    ));
}

#[test]
fn test_length_counts_chars_not_bytes() {
    // 200 two-byte characters is still within the limit
    assert!(validate_title(&"é".repeat(MAX_TITLE_LENGTH)).is_ok());
}

#[test]
fn test_validate_description_too_long() {
    assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
}

#[test]
fn test_validate_requester_email() {
    assert_eq!(
        validate_requester("john@company.com").unwrap(),
        "john@company.com"
    );
    assert!(validate_requester(&"a".repeat(MAX_REQUESTER_LENGTH + 1)).is_err());
}

#[test]
fn test_require() {
    assert_eq!(require("Description", Some("x".into())).unwrap(), "x");
    assert!(matches!(
        require("Description", None),
        Err(Error::FieldRequired {
            field: "Description"
        })
    ));
}
