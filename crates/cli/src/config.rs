// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.helpdesk/config.toml` and includes:
//! - `key`: The blob key the ticket list is stored under (default
//!   `helpdesk-tickets`)
//! - `data_dir`: Optional path to keep ticket data in a different location

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use hd_core::blob::validate_key;
use hd_core::DEFAULT_KEY;

use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".helpdesk";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Project configuration stored in `.helpdesk/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Blob key for the ticket list.
    #[serde(default = "default_key")]
    pub key: String,
    /// Optional directory for ticket data (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            key: default_key(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Creates a config with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is not usable as a blob key.
    pub fn new(key: String) -> Result<Self> {
        validate_key(&key).map_err(|_| Error::Config(format!("invalid storage key '{}'", key)))?;
        Ok(Config {
            key,
            data_dir: None,
        })
    }

    /// Sets the data directory (builder pattern).
    pub fn with_data_dir(mut self, data_dir: Option<String>) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Loads configuration from the given `.helpdesk/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.helpdesk/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .helpdesk directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .helpdesk directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the directory that holds ticket blobs
pub fn get_data_dir(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.data_dir {
        Some(data_dir) => {
            let data_path = Path::new(data_dir);
            if data_path.is_absolute() {
                data_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(data_dir)
            }
        }
        None => work_dir.to_path_buf(),
    }
}

/// Initialize a new .helpdesk directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
