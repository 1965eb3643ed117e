// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{BlobStore, ClockSource, Priority, Ticket, TicketStore};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::validate::{require, validate_description, validate_requester, validate_title};

use super::{open_store, parse_priority};

/// Validated input for a new ticket.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewTicket {
    pub title: String,
    pub description: String,
    pub requester: String,
    pub priority: Priority,
}

impl NewTicket {
    pub(crate) fn parse(
        title: &str,
        description: Option<String>,
        requester: Option<String>,
        priority: &str,
    ) -> Result<Self> {
        Ok(NewTicket {
            title: validate_title(title)?,
            description: validate_description(&require("Description", description)?)?,
            requester: validate_requester(&require("Requester", requester)?)?,
            priority: parse_priority(priority)?,
        })
    }
}

pub fn run(
    title: String,
    description: Option<String>,
    requester: Option<String>,
    priority: String,
    output: OutputFormat,
) -> Result<()> {
    // Validate before touching storage
    let input = NewTicket::parse(&title, description, requester, &priority)?;

    let mut store = open_store()?;
    let ticket = run_impl(&mut store, input)?;
    println!("{}", render(&ticket, output)?);
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<B: BlobStore, C: ClockSource>(
    store: &mut TicketStore<B, C>,
    input: NewTicket,
) -> Result<Ticket> {
    let ticket = store.create(
        input.title,
        input.description,
        input.requester,
        input.priority,
    )?;
    Ok(ticket)
}

pub(crate) fn render(ticket: &Ticket, output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Text => format!(
            "Created [{}] ({}) {}: {}",
            ticket.priority, ticket.status, ticket.id, ticket.title
        ),
        OutputFormat::Id => ticket.id.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(ticket)?,
    })
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
