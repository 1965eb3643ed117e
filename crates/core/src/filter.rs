// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search and facet filtering for ticket lists.

use crate::ticket::{Priority, Status, Ticket};

/// Narrowing criteria for a ticket list. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    /// Case-insensitive substring matched against id, title, description,
    /// and requester.
    pub query: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if every set criterion matches.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_query(ticket)
            && self.priority.is_none_or(|p| ticket.priority == p)
            && self.status.is_none_or(|s| ticket.status == s)
    }

    fn matches_query(&self, ticket: &Ticket) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        let needle = query.to_lowercase();
        [
            &ticket.id,
            &ticket.title,
            &ticket.description,
            &ticket.requester,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching tickets, in list order.
    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Splits tickets into one section per status, in lifecycle order.
///
/// Every status gets a section, possibly empty; order within a section is
/// list order.
pub fn group_by_status<'a>(tickets: &[&'a Ticket]) -> Vec<(Status, Vec<&'a Ticket>)> {
    Status::ALL
        .iter()
        .map(|&status| {
            let section = tickets
                .iter()
                .copied()
                .filter(|t| t.status == status)
                .collect();
            (status, section)
        })
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
