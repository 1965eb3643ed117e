// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

// Helper to parse CLI args
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_start_command_multiple() {
    let cli = parse(&["helpdesk", "start", "TK-001", "TK-002"]).unwrap();
    match cli.command {
        Command::Start { ids } => assert_eq!(ids, vec!["TK-001", "TK-002"]),
        _ => panic!("Expected Start command"),
    }
}

#[test]
fn test_resolve_command() {
    let cli = parse(&["helpdesk", "resolve", "TK-002"]).unwrap();
    match cli.command {
        Command::Resolve { ids } => assert_eq!(ids, vec!["TK-002"]),
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_delete_command() {
    let cli = parse(&["helpdesk", "delete", "TK-001", "TK-003"]).unwrap();
    match cli.command {
        Command::Delete { ids } => assert_eq!(ids, vec!["TK-001", "TK-003"]),
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn test_status_command() {
    let cli = parse(&["helpdesk", "status", "TK-003", "open"]).unwrap();
    match cli.command {
        Command::Status { id, status } => {
            assert_eq!(id, "TK-003");
            assert_eq!(status, "open");
        }
        _ => panic!("Expected Status command"),
    }
}

#[test]
fn test_lifecycle_commands_require_ids() {
    assert!(parse(&["helpdesk", "start"]).is_err());
    assert!(parse(&["helpdesk", "resolve"]).is_err());
    assert!(parse(&["helpdesk", "delete"]).is_err());
    assert!(parse(&["helpdesk", "status", "TK-001"]).is_err());
}
