// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{BlobStore, ClockSource, Ticket, TicketStore};

use crate::error::Result;

use super::{open_store, require_ticket};

pub fn run(ids: &[String]) -> Result<()> {
    let mut store = open_store()?;
    for ticket in run_impl(&mut store, ids)? {
        println!("Deleted {}: {}", ticket.id, ticket.title);
    }
    Ok(())
}

/// Internal implementation that accepts the store for testing.
///
/// Every id is checked before anything is removed.
pub(crate) fn run_impl<B: BlobStore, C: ClockSource>(
    store: &mut TicketStore<B, C>,
    ids: &[String],
) -> Result<Vec<Ticket>> {
    for id in ids {
        require_ticket(store, id)?;
    }

    let mut deleted = Vec::with_capacity(ids.len());
    for id in ids {
        // A repeated id is already gone the second time
        if let Some(ticket) = store.delete(id)? {
            deleted.push(ticket);
        }
    }
    Ok(deleted)
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
