// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derived statistics and chart series.
//!
//! Everything here is a pure function of a ticket slice, recomputed on
//! demand.

use serde::Serialize;

use crate::ticket::{Priority, Status, Ticket};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Share of tickets resolved, rounded to a whole percent.
    pub resolution_rate_percent: u32,
    /// Mean days from creation to resolution over resolved tickets.
    pub average_resolution_days: f64,
}

impl Stats {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let count = |status: Status| tickets.iter().filter(|t| t.status == status).count();
        let total = tickets.len();
        let resolved = count(Status::Resolved);

        Stats {
            total,
            open: count(Status::Open),
            in_progress: count(Status::InProgress),
            resolved,
            resolution_rate_percent: resolution_rate_percent(resolved, total),
            average_resolution_days: average_resolution_days(tickets),
        }
    }
}

/// `round(resolved / total * 100)`, or 0 for an empty list.
pub fn resolution_rate_percent(resolved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (resolved as f64 / total as f64 * 100.0).round();
    rate as u32
}

/// Mean of `resolved_at - created_at` in days over tickets that are
/// Resolved and carry a resolution time. 0 when there are none.
pub fn average_resolution_days(tickets: &[Ticket]) -> f64 {
    let durations: Vec<f64> = tickets
        .iter()
        .filter(|t| t.status == Status::Resolved)
        .filter_map(Ticket::resolution_days)
        .collect();

    if durations.is_empty() {
        return 0.0;
    }
    let mean = durations.iter().sum::<f64>() / durations.len() as f64;
    if mean.is_finite() {
        mean
    } else {
        0.0
    }
}

/// One bar or wedge of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice<K> {
    pub key: K,
    pub count: usize,
}

impl<K> Slice<K> {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Ticket count per status, in lifecycle order. Zero counts are kept.
pub fn status_distribution(tickets: &[Ticket]) -> Vec<Slice<Status>> {
    Status::ALL
        .iter()
        .map(|&status| Slice {
            key: status,
            count: tickets.iter().filter(|t| t.status == status).count(),
        })
        .collect()
}

/// Ticket count per priority, highest first. Zero counts are kept.
pub fn priority_distribution(tickets: &[Ticket]) -> Vec<Slice<Priority>> {
    Priority::ALL
        .iter()
        .map(|&priority| Slice {
            key: priority,
            count: tickets.iter().filter(|t| t.priority == priority).count(),
        })
        .collect()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
