// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashSet;

use hd_core::{BlobStore, ClockSource, Status, Ticket, TicketStore};

use crate::error::{Error, Result};

use super::{open_store, parse_status, require_ticket};

pub fn start(ids: &[String]) -> Result<()> {
    let mut store = open_store()?;
    for ticket in advance_impl(&mut store, ids, Status::InProgress)? {
        println!("Started {}", ticket.id);
    }
    Ok(())
}

pub fn resolve(ids: &[String]) -> Result<()> {
    let mut store = open_store()?;
    for ticket in advance_impl(&mut store, ids, Status::Resolved)? {
        println!("Resolved {}", ticket.id);
    }
    Ok(())
}

pub fn set_status(id: &str, status: &str) -> Result<()> {
    let target = parse_status(status)?;

    let mut store = open_store()?;
    let (from, ticket) = set_status_impl(&mut store, id, target)?;
    println!("{}: {} -> {}", ticket.id, from, ticket.status);
    Ok(())
}

/// Internal implementation for `start` and `resolve`.
///
/// Each ticket must be exactly one step before `target`, the same rule as
/// the forward-only buttons on a ticket card. All ids are checked first so
/// a bad id leaves every ticket untouched. Repeated ids are applied once.
pub(crate) fn advance_impl<B: BlobStore, C: ClockSource>(
    store: &mut TicketStore<B, C>,
    ids: &[String],
    target: Status,
) -> Result<Vec<Ticket>> {
    let mut seen = HashSet::new();
    let ids: Vec<&String> = ids.iter().filter(|id| seen.insert(id.as_str())).collect();

    for id in &ids {
        let ticket = require_ticket(store, id)?;
        if !ticket.status.can_advance_to(target) {
            return Err(Error::InvalidTransition {
                from: ticket.status.to_string(),
                to: target.to_string(),
                valid_targets: ticket.status.valid_targets(),
            });
        }
    }

    let mut updated = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(ticket) = store.transition_status(id, target)? {
            updated.push(ticket);
        }
    }
    Ok(updated)
}

/// Internal implementation for `status`: any transition is allowed.
///
/// Returns the previous status with the updated ticket.
pub(crate) fn set_status_impl<B: BlobStore, C: ClockSource>(
    store: &mut TicketStore<B, C>,
    id: &str,
    target: Status,
) -> Result<(Status, Ticket)> {
    let from = require_ticket(store, id)?.status;
    let ticket = store
        .transition_status(id, target)?
        .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;
    Ok((from, ticket))
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
