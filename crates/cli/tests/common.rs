// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn helpdesk() -> Command {
    let mut cmd = cargo_bin_cmd!("helpdesk");
    cmd.env_remove("COLOR").env_remove("HELPDESK_LOG");
    cmd
}

/// Helper to create an initialized temp directory holding the sample tickets
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    helpdesk()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create a ticket and return its ID
pub fn create_ticket(temp: &TempDir, title: &str, priority: &str) -> String {
    let output = helpdesk()
        .args(["new", title, "-d", "Created by a test", "-r", "tester@company.com"])
        .args(["-p", priority, "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Helper to read the raw ticket blob
pub fn read_blob(temp: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(temp.path().join(".helpdesk/helpdesk-tickets.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Helper to get a ticket's status from `show -o json`
pub fn get_status(temp: &TempDir, id: &str) -> String {
    let output = helpdesk()
        .args(["show", id, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["status"].as_str().unwrap().to_string()
}
