// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket id formatting and allocation.

use crate::ticket::Ticket;

/// Prefix shared by every ticket id.
pub const ID_PREFIX: &str = "TK-";

/// Format a sequence number as a ticket id, zero-padded to three digits.
pub fn format_id(seq: u32) -> String {
    format!("{ID_PREFIX}{seq:03}")
}

/// Extract the sequence number from an id like `TK-007`.
pub fn parse_seq(id: &str) -> Option<u32> {
    let digits = id.strip_prefix(ID_PREFIX)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Allocate the id for the next created ticket.
///
/// One past the highest sequence in use, so an id is never handed out while
/// a ticket still holds it. Ids that don't follow the `TK-` format are
/// ignored.
pub fn next_id(tickets: &[Ticket]) -> String {
    let highest = tickets
        .iter()
        .filter_map(|t| parse_seq(&t.id))
        .max()
        .unwrap_or(0);
    format_id(highest.saturating_add(1))
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
