// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use hd_core::Priority;

#[test]
fn test_stats_seeded() {
    let ctx = TestContext::seeded();
    let output = run_impl(&ctx.store.stats(), OutputFormat::Text).unwrap();

    assert!(output.contains("Total Tickets"));
    assert!(output.contains("33%"));
    assert!(output.contains("1.0  Days"));
}

#[test]
fn test_stats_json() {
    let mut ctx = TestContext::seeded();
    ctx.create("VPN down", Priority::High);

    let output = run_impl(&ctx.store.stats(), OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["total"], 4);
    assert_eq!(json["open"], 2);
    assert_eq!(json["in_progress"], 1);
    assert_eq!(json["resolved"], 1);
    assert_eq!(json["resolution_rate_percent"], 25);
    assert_eq!(json["average_resolution_days"], 1.0);
}

#[test]
fn test_stats_empty_list() {
    let ctx = TestContext::empty();
    let output = run_impl(&ctx.store.stats(), OutputFormat::Text).unwrap();
    assert!(output.contains(" 0%"));
    assert!(output.contains("0.0  Days"));
    assert!(!output.contains("NaN"));
}
