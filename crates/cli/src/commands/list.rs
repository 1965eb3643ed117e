// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{group_by_status, Ticket, TicketFilter};

use crate::cli::{FilterArgs, OutputFormat};
use crate::colors;
use crate::display::format_ticket_list;
use crate::error::Result;

use super::{open_store, parse_priority, parse_status};

/// Turn the list flags into a filter, rejecting unknown values.
pub(crate) fn build_filter(args: &FilterArgs) -> Result<TicketFilter> {
    let mut filter = TicketFilter::new();
    if let Some(query) = args.query.as_deref() {
        filter = filter.with_query(query);
    }
    if let Some(priority) = args.priority.as_deref() {
        filter = filter.with_priority(parse_priority(priority)?);
    }
    if let Some(status) = args.status.as_deref() {
        filter = filter.with_status(parse_status(status)?);
    }
    Ok(filter)
}

pub fn run(args: FilterArgs, output: OutputFormat) -> Result<()> {
    let filter = build_filter(&args)?;

    let store = open_store()?;
    println!(
        "{}",
        run_impl(store.tickets(), &filter, output, colors::should_colorize())?
    );
    Ok(())
}

/// Internal implementation that renders a snapshot for testing.
pub(crate) fn run_impl(
    tickets: &[Ticket],
    filter: &TicketFilter,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let matched = filter.apply(tickets);

    Ok(match output {
        OutputFormat::Text => format_ticket_list(&group_by_status(&matched), color),
        OutputFormat::Json => serde_json::to_string_pretty(&matched)?,
        OutputFormat::Id => matched
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
