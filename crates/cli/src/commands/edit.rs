// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{BlobStore, ClockSource, Ticket, TicketPatch, TicketStore};

use crate::error::{Error, Result};
use crate::validate::{validate_description, validate_requester, validate_title};

use super::{open_store, parse_priority, require_ticket};

/// Build a validated patch from the edit flags.
pub(crate) fn build_patch(
    title: Option<&str>,
    description: Option<&str>,
    requester: Option<&str>,
    priority: Option<&str>,
) -> Result<TicketPatch> {
    let mut patch = TicketPatch::new();
    if let Some(title) = title {
        patch = patch.with_title(validate_title(title)?);
    }
    if let Some(description) = description {
        patch = patch.with_description(validate_description(description)?);
    }
    if let Some(requester) = requester {
        patch = patch.with_requester(validate_requester(requester)?);
    }
    if let Some(priority) = priority {
        patch = patch.with_priority(parse_priority(priority)?);
    }

    if patch.is_empty() {
        return Err(Error::NothingToEdit);
    }
    Ok(patch)
}

pub fn run(
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    requester: Option<&str>,
    priority: Option<&str>,
) -> Result<()> {
    let patch = build_patch(title, description, requester, priority)?;

    let mut store = open_store()?;
    let ticket = run_impl(&mut store, id, &patch)?;
    println!("Updated {}: {}", ticket.id, ticket.title);
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<B: BlobStore, C: ClockSource>(
    store: &mut TicketStore<B, C>,
    id: &str,
    patch: &TicketPatch,
) -> Result<Ticket> {
    require_ticket(store, id)?;
    store
        .edit(id, patch)?
        .ok_or_else(|| Error::TicketNotFound(id.to_string()))
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
