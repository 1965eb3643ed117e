// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-10T09:00:00.000Z")
        .unwrap()
        .to_utc()
}

#[test]
fn seeds_three_tickets_in_order() {
    let tickets = sample_tickets(now());
    let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TK-001", "TK-002", "TK-003"]);
}

#[test]
fn seeds_cover_each_status_and_priority() {
    let tickets = sample_tickets(now());
    assert_eq!(
        tickets.iter().map(|t| (t.priority, t.status)).collect::<Vec<_>>(),
        vec![
            (Priority::High, Status::Open),
            (Priority::Medium, Status::InProgress),
            (Priority::Low, Status::Resolved),
        ]
    );
}

#[test]
fn only_resolved_seed_has_resolved_at() {
    let tickets = sample_tickets(now());
    assert!(tickets[0].resolved_at.is_none());
    assert!(tickets[1].resolved_at.is_none());
    assert!(tickets[2].resolved_at.is_some());
}

#[test]
fn resolved_seed_took_one_day() {
    let tickets = sample_tickets(now());
    assert_eq!(tickets[2].resolution_days(), Some(1.0));
}

#[test]
fn seed_timestamps_are_relative_to_now() {
    let tickets = sample_tickets(now());
    assert_eq!(tickets[0].created_at, now() - Duration::days(2));
    assert_eq!(tickets[1].created_at, now() - Duration::days(1));
    assert_eq!(tickets[2].created_at, now() - Duration::days(3));
}
