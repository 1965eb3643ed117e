// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, OutputArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "An IT helpdesk ticket tracker")]
#[command(
    long_about = "An IT helpdesk ticket tracker.\n\n\
    Create support tickets, move them from Open to In Progress to Resolved, \
    and review resolution statistics from the terminal."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if helpdesk was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Tickets
    // ─────────────────────────────────────────────────────────────────────────
    /// Create a new ticket
    #[command(after_help = colors::examples("\
Examples:
  helpdesk new \"VPN down\" -d \"Cannot connect\" -r amy@corp.com          Medium priority
  helpdesk new \"Email not working\" -d \"...\" -r bob@corp.com -p high    High priority
  helpdesk new \"Printer offline\" -d \"...\" -r eve@corp.com -o id        Output only the ID"))]
    New {
        /// Short summary of the issue
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Detailed description of the issue
        #[arg(long, short, value_parser = non_empty_string)]
        description: Option<String>,

        /// Who is asking for help (name or email)
        #[arg(long, short, value_parser = non_empty_string)]
        requester: Option<String>,

        /// Priority (high, medium, low)
        #[arg(long, short, default_value = "medium")]
        priority: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Edit a ticket's title, description, requester, or priority
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  helpdesk edit TK-001 --title \"Outlook crashes\"    Change the title
  helpdesk edit TK-001 --priority low               Lower the priority
  helpdesk edit TK-002 -r jane@corp.com             Change the requester")
    )]
    Edit {
        /// Ticket ID
        id: String,

        /// New title
        #[arg(long, value_parser = non_empty_string)]
        title: Option<String>,

        /// New description
        #[arg(long, value_parser = non_empty_string)]
        description: Option<String>,

        /// New requester
        #[arg(long, short, value_parser = non_empty_string)]
        requester: Option<String>,

        /// New priority (high, medium, low)
        #[arg(long, short)]
        priority: Option<String>,
    },

    /// Delete ticket(s)
    #[command(arg_required_else_help = true)]
    Delete {
        /// Ticket ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Start work on ticket(s) (Open -> In Progress)
    #[command(arg_required_else_help = true)]
    Start {
        /// Ticket ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Mark ticket(s) as resolved (In Progress -> Resolved)
    #[command(arg_required_else_help = true)]
    Resolve {
        /// Ticket ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Set a ticket's status directly, in any direction
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  helpdesk status TK-003 open           Reopen a resolved ticket
  helpdesk status TK-001 in_progress    Same as 'helpdesk start TK-001'")
    )]
    Status {
        /// Ticket ID
        id: String,

        /// Target status (open, in_progress, resolved)
        status: String,
    },

    /// List tickets grouped by status
    #[command(after_help = colors::examples("\
Examples:
  helpdesk list                  All tickets
  helpdesk list -q printer       Search id, title, description, and requester
  helpdesk list -p high -s open  Open high-priority tickets
  helpdesk list -o json          Output as JSON"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show ticket details
    #[command(arg_required_else_help = true)]
    Show {
        /// Ticket ID
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────────────────────
    /// Show ticket statistics
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show status and priority distribution charts
    Charts,

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize the helpdesk in the current directory
    #[command(after_help = colors::examples("\
Examples:
  helpdesk init                           Store tickets in .helpdesk/
  helpdesk init --key team-a              Use a different storage key
  helpdesk init --data-dir shared/desk    Keep ticket data elsewhere"))]
    Init {
        /// Storage key for the ticket list [default: helpdesk-tickets]
        #[arg(long)]
        key: Option<String>,

        /// Directory for ticket data, relative to the project root or absolute
        #[arg(long, value_name = "path")]
        data_dir: Option<String>,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  helpdesk completion bash > ~/.local/share/bash-completion/completions/helpdesk
  helpdesk completion zsh > ~/.zfunc/_helpdesk
  helpdesk completion fish > ~/.config/fish/completions/helpdesk.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
