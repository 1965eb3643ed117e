// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use hd_core::{FileBlobStore, TicketStore, DEFAULT_KEY};

use crate::config::{get_data_dir, init_work_dir, Config};
use crate::error::Result;

pub fn run(key: Option<String>, data_dir: Option<String>) -> Result<()> {
    let path = std::env::current_dir()?;
    let (work_dir, count) = run_impl(&path, key, data_dir)?;

    println!("Initialized helpdesk at {}", work_dir.display());
    println!("  {} tickets loaded", count);
    Ok(())
}

/// Internal implementation that accepts the target directory for testing.
///
/// Opens the store once so a fresh project starts with the sample tickets
/// on disk. Returns the `.helpdesk/` path and the ticket count.
pub(crate) fn run_impl(
    path: &Path,
    key: Option<String>,
    data_dir: Option<String>,
) -> Result<(PathBuf, usize)> {
    let config =
        Config::new(key.unwrap_or_else(|| DEFAULT_KEY.to_string()))?.with_data_dir(data_dir);
    let work_dir = init_work_dir(path, &config)?;

    let blob = FileBlobStore::open(get_data_dir(&work_dir, &config))?;
    let store = TicketStore::open(blob, &config.key)?;

    Ok((work_dir, store.len()))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
