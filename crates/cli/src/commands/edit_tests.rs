// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use hd_core::{Priority, Status};

#[test]
fn test_edit_title_keeps_other_fields() {
    let mut ctx = TestContext::seeded();
    let before = ctx.ticket("TK-001").clone();

    let patch = build_patch(Some("Outlook crashes"), None, None, None).unwrap();
    let updated = run_impl(&mut ctx.store, "TK-001", &patch).unwrap();

    assert_eq!(updated.title, "Outlook crashes");
    assert_eq!(updated.description, before.description);
    assert_eq!(updated.requester, before.requester);
    assert_eq!(updated.priority, before.priority);
    assert_eq!(updated.status, Status::Open);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(ctx.store.tickets()[0], updated);
}

#[test]
fn test_edit_all_fields() {
    let mut ctx = TestContext::seeded();
    let patch = build_patch(
        Some("New title"),
        Some("New description"),
        Some("new@company.com"),
        Some("low"),
    )
    .unwrap();
    let updated = run_impl(&mut ctx.store, "TK-002", &patch).unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.description, "New description");
    assert_eq!(updated.requester, "new@company.com");
    assert_eq!(updated.priority, Priority::Low);
    assert_eq!(updated.status, Status::InProgress);
}

#[test]
fn test_edit_missing_ticket() {
    let mut ctx = TestContext::seeded();
    let before = ctx.store.tickets().to_vec();

    let patch = build_patch(Some("x"), None, None, None).unwrap();
    let err = run_impl(&mut ctx.store, "TK-999", &patch).unwrap_err();

    assert!(matches!(err, Error::TicketNotFound(ref id) if id == "TK-999"));
    assert_eq!(ctx.store.tickets(), before.as_slice());
}

#[test]
fn test_build_patch_requires_a_field() {
    assert!(matches!(
        build_patch(None, None, None, None),
        Err(Error::NothingToEdit)
    ));
}

#[test]
fn test_build_patch_rejects_blank_title() {
    assert!(matches!(
        build_patch(Some("   "), None, None, None),
        Err(Error::FieldEmpty { field: "Title" })
    ));
}

#[test]
fn test_build_patch_rejects_bad_priority() {
    assert!(matches!(
        build_patch(None, None, None, Some("critical")),
        Err(Error::InvalidPriority(_))
    ));
}
