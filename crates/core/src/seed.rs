// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample tickets installed when no persisted list exists.

use chrono::{DateTime, Duration, Utc};

use crate::id::format_id;
use crate::ticket::{Priority, Status, Ticket};

/// Builds the three sample tickets relative to `now`.
///
/// One ticket per status: an open High, an in-progress Medium, and a Low
/// that was resolved one day after it was created.
pub fn sample_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    let days_ago = |days: i64| now - Duration::days(days);

    let email = Ticket::new(
        format_id(1),
        "Email not working".to_string(),
        "Cannot send or receive emails in Outlook".to_string(),
        "john.doe@company.com".to_string(),
        Priority::High,
        days_ago(2),
    );

    let printer = Ticket {
        status: Status::InProgress,
        ..Ticket::new(
            format_id(2),
            "Printer offline".to_string(),
            "Office printer showing offline status".to_string(),
            "jane.smith@company.com".to_string(),
            Priority::Medium,
            days_ago(1),
        )
    };

    let password = Ticket {
        status: Status::Resolved,
        resolved_at: Some(days_ago(2)),
        ..Ticket::new(
            format_id(3),
            "Password reset request".to_string(),
            "Need to reset Active Directory password".to_string(),
            "mike.johnson@company.com".to_string(),
            Priority::Low,
            days_ago(3),
        )
    };

    vec![email, printer, password]
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
