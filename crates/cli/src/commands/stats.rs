// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hd_core::Stats;

use crate::cli::OutputFormat;
use crate::display::format_stats;
use crate::error::Result;

use super::open_store;

pub fn run(output: OutputFormat) -> Result<()> {
    let store = open_store()?;
    println!("{}", run_impl(&store.stats(), output)?);
    Ok(())
}

/// Internal implementation that renders stats for testing.
pub(crate) fn run_impl(stats: &Stats, output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Json => serde_json::to_string_pretty(stats)?,
        // Stats have no id; `-o id` falls back to the cards
        OutputFormat::Text | OutputFormat::Id => format_stats(stats),
    })
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
