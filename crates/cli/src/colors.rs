// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and ticket output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use hd_core::{Priority, Status};

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    /// High priority badge: soft red
    pub const PRIORITY_HIGH: u8 = 167;
    /// Medium priority badge: amber
    pub const PRIORITY_MEDIUM: u8 = 179;
    /// Low priority badge: sage green
    pub const PRIORITY_LOW: u8 = 108;

    /// Open status badge: blue
    pub const STATUS_OPEN: u8 = 68;
    /// In Progress status badge: amber
    pub const STATUS_IN_PROGRESS: u8 = 179;
    /// Resolved status badge: green
    pub const STATUS_RESOLVED: u8 = 71;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn priority_code(priority: Priority) -> u8 {
    match priority {
        Priority::High => codes::PRIORITY_HIGH,
        Priority::Medium => codes::PRIORITY_MEDIUM,
        Priority::Low => codes::PRIORITY_LOW,
    }
}

pub fn status_code(status: Status) -> u8 {
    match status {
        Status::Open => codes::STATUS_OPEN,
        Status::InProgress => codes::STATUS_IN_PROGRESS,
        Status::Resolved => codes::STATUS_RESOLVED,
    }
}

/// Apply the priority's badge color to its label.
pub fn priority(priority: Priority) -> String {
    paint(priority_code(priority), priority.as_str())
}

/// Apply the status's badge color to its label.
pub fn status(status: Status) -> String {
    paint(status_code(status), status.as_str())
}

/// Colorize an examples help block.
///
/// Lines ending with `:` become headers. In `command    description`
/// lines the command part is shown as a literal, with `<placeholders>` and
/// quoted arguments dimmed as context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(cmd_end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command: words as literals, quoted text and `<placeholders>`
/// as context.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while !rest.is_empty() {
        let (closing, is_context) = match rest.as_bytes()[0] {
            b'"' => (Some('"'), true),
            b'<' => (Some('>'), true),
            _ => (None, false),
        };

        let end = match closing {
            Some(close) => rest[1..].find(close).map_or(rest.len(), |i| i + 2),
            None => rest.find(['"', '<']).unwrap_or(rest.len()),
        };

        let (segment, tail) = rest.split_at(end);
        if is_context {
            result.push_str(&context(segment));
        } else {
            result.push_str(&literal(segment));
        }
        rest = tail;
    }

    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    if line[start..].trim().is_empty() {
        return None;
    }
    Some(start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
