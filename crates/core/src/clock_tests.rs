// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn system_clock_has_millisecond_precision() {
    let now = SystemClock.now();
    assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
}

#[test]
fn manual_clock_reports_initial_time() {
    let clock = ManualClock::new(1_000);
    assert_eq!(clock.now_ms(), 1_000);
}

#[test]
fn manual_clock_advances() {
    let clock = ManualClock::new(1_000);
    clock.advance(250);
    clock.advance(250);
    assert_eq!(clock.now_ms(), 1_500);
}

#[test]
fn manual_clock_at_truncates_to_millis() {
    let instant = DateTime::parse_from_rfc3339("2026-01-15T12:00:00.123456Z")
        .unwrap()
        .to_utc();
    let clock = ManualClock::at(instant);

    let expected = DateTime::parse_from_rfc3339("2026-01-15T12:00:00.123Z")
        .unwrap()
        .to_utc();
    assert_eq!(clock.now(), expected);
}

#[test]
fn clock_reference_delegates() {
    let clock = ManualClock::new(42);
    let by_ref = &clock;
    assert_eq!(by_ref.now_ms(), 42);
    clock.advance(1);
    assert_eq!(by_ref.now_ms(), 43);
}
