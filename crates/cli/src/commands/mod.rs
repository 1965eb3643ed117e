// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod charts;
pub mod delete;
pub mod edit;
pub mod init;
pub mod lifecycle;
pub mod list;
pub mod new;
pub mod show;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use hd_core::{BlobStore, ClockSource, FileBlobStore, Priority, Status, Ticket, TicketStore};
use tracing::debug;

use crate::config::{find_work_dir, get_data_dir, Config};
use crate::error::{Error, Result};

/// Helper to open the ticket store from the current context.
pub fn open_store() -> Result<TicketStore<FileBlobStore>> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let data_dir = get_data_dir(&work_dir, &config);
    debug!(data_dir = %data_dir.display(), key = %config.key, "opening ticket store");
    let blob = FileBlobStore::open(data_dir)?;
    Ok(TicketStore::open(blob, &config.key)?)
}

/// Look up a ticket, surfacing a missing id as an error.
pub(crate) fn require_ticket<'a, B: BlobStore, C: ClockSource>(
    store: &'a TicketStore<B, C>,
    id: &str,
) -> Result<&'a Ticket> {
    store
        .get(id)
        .ok_or_else(|| Error::TicketNotFound(id.to_string()))
}

pub(crate) fn parse_priority(s: &str) -> Result<Priority> {
    Ok(s.parse::<Priority>()?)
}

pub(crate) fn parse_status(s: &str) -> Result<Status> {
    Ok(s.parse::<Status>()?)
}
