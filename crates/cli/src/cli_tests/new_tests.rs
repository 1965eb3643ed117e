// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_new_with_all_fields() {
    let cli = parse(&[
        "helpdesk",
        "new",
        "VPN down",
        "-d",
        "Cannot connect from home",
        "-r",
        "amy@corp.com",
        "-p",
        "high",
        "-o",
        "id",
    ])
    .unwrap();
    match cli.command {
        Command::New {
            title,
            description,
            requester,
            priority,
            output,
        } => {
            assert_eq!(title, "VPN down");
            assert_eq!(description.as_deref(), Some("Cannot connect from home"));
            assert_eq!(requester.as_deref(), Some("amy@corp.com"));
            assert_eq!(priority, "high");
            assert_eq!(output.output, OutputFormat::Id);
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn test_new_priority_defaults_to_medium() {
    let cli = parse(&["helpdesk", "new", "VPN down"]).unwrap();
    match cli.command {
        Command::New {
            priority, output, ..
        } => {
            assert_eq!(priority, "medium");
            assert_eq!(output.output, OutputFormat::Text);
        }
        _ => panic!("Expected New command"),
    }
}

#[test]
fn test_new_rejects_blank_title() {
    assert!(parse(&["helpdesk", "new", "   "]).is_err());
    assert!(parse(&["helpdesk", "new", ""]).is_err());
}

#[test]
fn test_new_rejects_blank_description() {
    assert!(parse(&["helpdesk", "new", "VPN down", "-d", " "]).is_err());
}

#[test]
fn test_output_ids_alias() {
    let cli = parse(&["helpdesk", "new", "VPN down", "-o", "ids"]).unwrap();
    match cli.command {
        Command::New { output, .. } => assert_eq!(output.output, OutputFormat::Id),
        _ => panic!("Expected New command"),
    }
}
