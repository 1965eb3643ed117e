// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common flags.

use clap::Args;

use super::OutputFormat;

/// Filter arguments for the ticket list.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Search text matched against id, title, description, and requester
    #[arg(long, short)]
    pub query: Option<String>,

    /// Filter by priority (high, medium, low)
    #[arg(long, short)]
    pub priority: Option<String>,

    /// Filter by status (open, in_progress, resolved)
    #[arg(long, short)]
    pub status: Option<String>,
}

/// Output format argument.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json, id)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}
