// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core ticket types for the helpdesk.
//!
//! This module contains the fundamental data types: Ticket, Priority,
//! Status, and TicketPatch. Field names and enum spellings follow the
//! persisted blob format (`createdAt`, `"In Progress"`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Urgency of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Initial state for new tickets.
    Open,
    /// Someone is working on it.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed. Reaching this state stamps `resolvedAt` once.
    Resolved,
}

impl Status {
    /// All statuses in lifecycle order.
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Resolved];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }

    /// The next state along the forward lifecycle, if any.
    pub fn next(&self) -> Option<Status> {
        match self {
            Status::Open => Some(Status::InProgress),
            Status::InProgress => Some(Status::Resolved),
            Status::Resolved => None,
        }
    }

    /// Check if `target` is one forward step from this status.
    ///
    /// The store accepts any transition; this is the guard front-ends use
    /// for their "start" and "resolve" actions.
    pub fn can_advance_to(&self, target: Status) -> bool {
        self.next() == Some(target)
    }

    /// Get valid forward targets as a formatted string.
    pub fn valid_targets(&self) -> String {
        match self.next() {
            Some(next) => next.as_str().to_string(),
            None => "none (ticket is already resolved)".to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "open" => Ok(Status::Open),
            "in_progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A single support request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier (format: `TK-001`).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Who asked for help, usually an email address.
    pub requester: String,
    pub priority: Priority,
    pub status: Status,
    /// When the ticket was created. Never changes.
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// When the ticket first reached Resolved. Never cleared.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis::option"
    )]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Creates an open ticket with no resolution time.
    pub fn new(
        id: String,
        title: String,
        description: String,
        requester: String,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id,
            title,
            description,
            requester,
            priority,
            status: Status::Open,
            created_at,
            resolved_at: None,
        }
    }

    /// Time from creation to first resolution, in fractional days.
    pub fn resolution_days(&self) -> Option<f64> {
        self.resolved_at.map(|resolved| {
            let elapsed_ms = (resolved - self.created_at).num_milliseconds();
            elapsed_ms as f64 / MS_PER_DAY
        })
    }
}

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// A partial update to a ticket's editable fields.
///
/// Status and timestamps are deliberately absent: status changes go through
/// the store's transition operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requester: Option<String>,
    pub priority: Option<Priority>,
}

impl TicketPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.requester.is_none()
            && self.priority.is_none()
    }

    /// Returns a merged copy: patched fields replace, everything else is kept.
    pub fn apply(&self, ticket: &Ticket) -> Ticket {
        Ticket {
            title: self.title.clone().unwrap_or_else(|| ticket.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| ticket.description.clone()),
            requester: self
                .requester
                .clone()
                .unwrap_or_else(|| ticket.requester.clone()),
            priority: self.priority.unwrap_or(ticket.priority),
            ..ticket.clone()
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix, the
/// shape a browser's `Date.prototype.toJSON` produces.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|s| super::parse(&s).map_err(de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
