// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hdrs - The library behind the `helpdesk` CLI.
//!
//! This crate wires the [`hd_core`] ticket store to a command-line front end:
//! argument parsing, project configuration, and text/JSON rendering of the
//! ticket list, ticket details, statistics, and charts.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - Parsed command line
//! - [`Config`] - Project configuration (storage key, data location)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use hdrs::{init_work_dir, find_work_dir, Config};
//!
//! // Initialize a new project
//! let work_dir = init_work_dir(Path::new("."), &Config::default())?;
//!
//! // Later, find an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;
mod validate;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, OutputArgs, OutputFormat};
pub use config::{find_work_dir, get_data_dir, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { key, data_dir } => commands::init::run(key, data_dir),
        Command::New {
            title,
            description,
            requester,
            priority,
            output,
        } => commands::new::run(title, description, requester, priority, output.output),
        Command::Edit {
            id,
            title,
            description,
            requester,
            priority,
        } => commands::edit::run(
            &id,
            title.as_deref(),
            description.as_deref(),
            requester.as_deref(),
            priority.as_deref(),
        ),
        Command::Delete { ids } => commands::delete::run(&ids),
        Command::Start { ids } => commands::lifecycle::start(&ids),
        Command::Resolve { ids } => commands::lifecycle::resolve(&ids),
        Command::Status { id, status } => commands::lifecycle::set_status(&id, &status),
        Command::List { filter, output } => commands::list::run(filter, output.output),
        Command::Show { id, output } => commands::show::run(&id, output.output),
        Command::Stats { output } => commands::stats::run(output.output),
        Command::Charts => commands::charts::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "helpdesk", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
