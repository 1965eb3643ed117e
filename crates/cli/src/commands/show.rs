// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{BlobStore, ClockSource, TicketStore};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_ticket_details;
use crate::error::Result;

use super::{open_store, require_ticket};

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let store = open_store()?;
    println!(
        "{}",
        run_impl(&store, id, output, colors::should_colorize())?
    );
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<B: BlobStore, C: ClockSource>(
    store: &TicketStore<B, C>,
    id: &str,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let ticket = require_ticket(store, id)?;

    Ok(match output {
        OutputFormat::Text => format_ticket_details(ticket, color),
        OutputFormat::Json => serde_json::to_string_pretty(ticket)?,
        OutputFormat::Id => ticket.id.clone(),
    })
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
