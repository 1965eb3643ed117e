// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use hd_core::Priority;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_delete_single() {
    let mut ctx = TestContext::seeded();
    let deleted = run_impl(&mut ctx.store, &ids(&["TK-002"])).unwrap();

    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].title, "Printer offline");
    let remaining: Vec<&str> = ctx.store.tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(remaining, vec!["TK-001", "TK-003"]);
}

#[test]
fn test_delete_unknown_id_removes_nothing() {
    let mut ctx = TestContext::seeded();
    let err = run_impl(&mut ctx.store, &ids(&["TK-001", "TK-404"])).unwrap_err();

    assert!(matches!(err, Error::TicketNotFound(ref id) if id == "TK-404"));
    assert_eq!(ctx.store.len(), 3);
}

#[test]
fn test_delete_repeated_id() {
    let mut ctx = TestContext::seeded();
    let deleted = run_impl(&mut ctx.store, &ids(&["TK-001", "TK-001"])).unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(ctx.store.len(), 2);
}

#[test]
fn test_delete_last_ticket_then_create() {
    let mut ctx = TestContext::empty();
    let id = ctx.create("Only one", Priority::Low);
    run_impl(&mut ctx.store, &ids(&[id.as_str()])).unwrap();
    assert!(ctx.store.is_empty());

    let next = ctx.create("Another", Priority::Low);
    assert_eq!(next, "TK-001");
}
