// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hd-core: Ticket store for the helpdesk dashboard
//!
//! This crate owns the ticket data model, the [`TicketStore`] that applies
//! create/edit/delete/transition operations and writes every change through
//! to a [`BlobStore`], and the pure functions that derive statistics, chart
//! series, and filtered views from a ticket snapshot.

pub mod blob;
pub mod clock;
pub mod error;
pub mod filter;
pub mod id;
pub mod seed;
pub mod stats;
pub mod store;
pub mod ticket;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use filter::{group_by_status, TicketFilter};
pub use stats::{priority_distribution, status_distribution, Slice, Stats};
pub use store::{TicketStore, DEFAULT_KEY};
pub use ticket::{Priority, Status, Ticket, TicketPatch};
