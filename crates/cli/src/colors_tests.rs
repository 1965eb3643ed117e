// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(fg256(255), "\x1b[38;5;255m");
}

#[test]
fn header_literal_context_wrap_text() {
    assert_eq!(header("Examples:"), "\x1b[38;5;74mExamples:\x1b[0m");
    assert_eq!(strip_ansi(&literal("new")), "new");
    assert_eq!(strip_ansi(&context("<id>")), "<id>");
}

#[test]
fn priority_and_status_codes_are_distinct() {
    let priorities: Vec<u8> = Priority::ALL.iter().map(|p| priority_code(*p)).collect();
    let statuses: Vec<u8> = Status::ALL.iter().map(|s| status_code(*s)).collect();
    assert_eq!(priorities, vec![167, 179, 108]);
    assert_eq!(statuses, vec![68, 179, 71]);
}

#[test]
fn badges_keep_label_text() {
    assert_eq!(strip_ansi(&priority(Priority::High)), "High");
    assert_eq!(strip_ansi(&status(Status::InProgress)), "In Progress");
}

#[parameterized(
    two_spaces = { "helpdesk list  List tickets", Some(13) },
    many_spaces = { "helpdesk new      Create", Some(12) },
    single_space = { "helpdesk list tickets", None },
    empty = { "", None },
    trailing_spaces = { "helpdesk list   ", None },
)]
fn find_description_start_cases(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn colorize_command_plain_words_are_literal() {
    assert_eq!(
        colorize_command("helpdesk list"),
        "\x1b[38;5;250mhelpdesk list\x1b[0m"
    );
}

#[test]
fn colorize_command_dims_placeholders_and_quotes() {
    let result = colorize_command("helpdesk start <id> -q \"vpn\"");
    assert_eq!(strip_ansi(&result), "helpdesk start <id> -q \"vpn\"");
    assert!(result.contains(&context("<id>")));
    assert!(result.contains(&context("\"vpn\"")));
    assert!(result.contains(&literal("helpdesk start ")));
}

#[test]
fn colorize_command_unclosed_quote_runs_to_end() {
    let result = colorize_command("helpdesk new \"VPN down");
    assert!(result.ends_with(&context("\"VPN down")));
}

#[test]
fn colorize_command_empty_string() {
    assert_eq!(colorize_command(""), "");
}

#[test]
fn examples_preserves_text_when_stripped() {
    let text = "Examples:\n  helpdesk list -s open    Open tickets\n\n  plain line";
    assert_eq!(strip_ansi(&examples(text)), text);
}
