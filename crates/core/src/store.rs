// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The ticket store: authoritative in-memory list with write-through
//! persistence.
//!
//! Every mutation replaces the affected ticket (or the list) and then
//! re-serializes the whole list into the blob store under one key. Calls
//! naming an unknown id are no-ops: they return `None` and write nothing.
//! Lists written by older sessions may repeat an id; mutations apply to
//! every ticket carrying it.

use tracing::{debug, info, warn};

use crate::blob::{validate_key, BlobStore};
use crate::clock::{ClockSource, SystemClock};
use crate::error::Result;
use crate::id::next_id;
use crate::seed::sample_tickets;
use crate::stats::Stats;
use crate::ticket::{Priority, Status, Ticket, TicketPatch};

/// Blob key used when none is configured.
pub const DEFAULT_KEY: &str = "helpdesk-tickets";

/// Owns the ticket list and keeps it in sync with a [`BlobStore`].
pub struct TicketStore<B: BlobStore, C: ClockSource = SystemClock> {
    blob: B,
    clock: C,
    key: String,
    tickets: Vec<Ticket>,
}

impl<B: BlobStore> TicketStore<B, SystemClock> {
    /// Loads the list stored under `key`, seeding sample tickets if there
    /// is none.
    pub fn open(blob: B, key: &str) -> Result<Self> {
        Self::open_with_clock(blob, key, SystemClock)
    }
}

impl<B: BlobStore, C: ClockSource> TicketStore<B, C> {
    /// Like [`TicketStore::open`], reading time from `clock`.
    ///
    /// A blob that is present but not a valid ticket list is logged and
    /// replaced with the sample tickets.
    pub fn open_with_clock(blob: B, key: &str, clock: C) -> Result<Self> {
        validate_key(key)?;
        let mut store = TicketStore {
            blob,
            clock,
            key: key.to_string(),
            tickets: Vec::new(),
        };

        match store.blob.get(key)? {
            Some(raw) => match serde_json::from_str::<Vec<Ticket>>(&raw) {
                Ok(tickets) => {
                    debug!(key, count = tickets.len(), "loaded tickets");
                    store.tickets = tickets;
                }
                Err(e) => {
                    warn!(key, error = %e, "stored tickets are malformed, reseeding");
                    store.reseed()?;
                }
            },
            None => {
                info!(key, "no stored tickets, seeding samples");
                store.reseed()?;
            }
        }

        Ok(store)
    }

    fn reseed(&mut self) -> Result<()> {
        self.tickets = sample_tickets(self.clock.now());
        self.persist()
    }

    /// Read-only snapshot of the list, in insertion order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// The clock new timestamps are read from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Aggregates over the current list.
    pub fn stats(&self) -> Stats {
        Stats::from_tickets(&self.tickets)
    }

    /// Appends a new open ticket and returns it.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        requester: impl Into<String>,
        priority: Priority,
    ) -> Result<Ticket> {
        let ticket = Ticket::new(
            next_id(&self.tickets),
            title.into(),
            description.into(),
            requester.into(),
            priority,
            self.clock.now(),
        );
        self.tickets.push(ticket.clone());
        self.persist()?;
        info!(id = %ticket.id, "created ticket");
        Ok(ticket)
    }

    /// Replaces the ticket with `patch` merged over it.
    ///
    /// Returns the updated ticket, or `None` if no ticket has this id.
    pub fn edit(&mut self, id: &str, patch: &TicketPatch) -> Result<Option<Ticket>> {
        self.replace(id, |ticket| patch.apply(ticket))
    }

    /// Removes every ticket with this id. Returns the first one removed,
    /// or `None` if no ticket has this id.
    pub fn delete(&mut self, id: &str) -> Result<Option<Ticket>> {
        let Some(first) = self.get(id).cloned() else {
            debug!(id, "delete: no such ticket");
            return Ok(None);
        };
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        self.persist()?;
        info!(id, removed = before - self.tickets.len(), "deleted ticket");
        Ok(Some(first))
    }

    /// Sets the ticket's status.
    ///
    /// Any status may follow any other. Reaching Resolved stamps
    /// `resolved_at` only if it was never set; no transition clears it.
    pub fn transition_status(&mut self, id: &str, status: Status) -> Result<Option<Ticket>> {
        let now = self.clock.now();
        self.replace(id, |ticket| {
            let mut updated = ticket.clone();
            updated.status = status;
            if status == Status::Resolved && updated.resolved_at.is_none() {
                updated.resolved_at = Some(now);
            }
            updated
        })
    }

    /// Consumes the store, handing back its blob store.
    pub fn into_blob(self) -> B {
        self.blob
    }

    fn replace<F>(&mut self, id: &str, update: F) -> Result<Option<Ticket>>
    where
        F: Fn(&Ticket) -> Ticket,
    {
        let mut first = None;
        for slot in self.tickets.iter_mut().filter(|t| t.id == id) {
            *slot = update(&*slot);
            if first.is_none() {
                first = Some(slot.clone());
            }
        }
        let Some(updated) = first else {
            debug!(id, "update: no such ticket");
            return Ok(None);
        };
        self.persist()?;
        debug!(id, status = %updated.status, "updated ticket");
        Ok(Some(updated))
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.tickets)?;
        self.blob.set(&self.key, &json)?;
        debug!(key = %self.key, count = self.tickets.len(), "persisted tickets");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
