// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::{priority_distribution, status_distribution, Ticket};

use crate::display::format_charts;
use crate::error::Result;

use super::open_store;

pub fn run() -> Result<()> {
    let store = open_store()?;
    println!("{}", run_impl(store.tickets()));
    Ok(())
}

/// Internal implementation that renders a snapshot for testing.
pub(crate) fn run_impl(tickets: &[Ticket]) -> String {
    format_charts(
        &status_distribution(tickets),
        &priority_distribution(tickets),
    )
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
