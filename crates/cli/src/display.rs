// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Display;

use hd_core::{Priority, Slice, Stats, Status, Ticket};

use crate::colors;

/// Maximum line width for wrapped text content (excluding 2-space indent).
const WRAP_WIDTH: usize = 96;

/// Width of the longest bar in chart output.
const BAR_WIDTH: usize = 40;

pub const NO_MATCHES: &str = "No tickets found matching your criteria.";

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn priority_label(priority: Priority, color: bool) -> String {
    if color {
        colors::priority(priority)
    } else {
        priority.to_string()
    }
}

fn status_label(status: Status, color: bool) -> String {
    if color {
        colors::status(status)
    } else {
        status.to_string()
    }
}

/// Format a single ticket line for list output
pub fn format_ticket_line(ticket: &Ticket, color: bool) -> String {
    format!(
        "- [{}] {}: {} ({}, created {})",
        priority_label(ticket.priority, color),
        ticket.id,
        ticket.title,
        ticket.requester,
        ticket.created_at.format("%Y-%m-%d")
    )
}

/// Format tickets grouped by status, hiding empty sections.
///
/// ```text
/// Open (1)
/// - [High] TK-001: Email not working (john@company.com, created 2024-05-01)
///
/// Resolved (1)
/// - [Low] TK-003: Password reset request (bob@company.com, created 2024-04-30)
/// ```
pub fn format_ticket_list(groups: &[(Status, Vec<&Ticket>)], color: bool) -> String {
    let sections: Vec<String> = groups
        .iter()
        .filter(|(_, tickets)| !tickets.is_empty())
        .map(|(status, tickets)| {
            let mut lines = vec![format!(
                "{} ({})",
                status_label(*status, color),
                tickets.len()
            )];
            lines.extend(tickets.iter().map(|t| format_ticket_line(t, color)));
            lines.join("\n")
        })
        .collect();

    if sections.is_empty() {
        return NO_MATCHES.to_string();
    }
    sections.join("\n\n")
}

/// Format ticket details for the show command
pub fn format_ticket_details(ticket: &Ticket, color: bool) -> String {
    let mut output = vec![
        format!("[{}] {}", status_label(ticket.status, color), ticket.id),
        format!("Title: {}", ticket.title),
        format!("Priority: {}", priority_label(ticket.priority, color)),
        format!("Requester: {}", ticket.requester),
        format!("Created: {}", ticket.created_at.format("%Y-%m-%d %H:%M")),
    ];

    // Only resolved tickets show the resolution date, even if a reopened
    // ticket still carries one.
    if ticket.status == Status::Resolved {
        if let Some(resolved_at) = ticket.resolved_at {
            output.push(format!("Resolved on {}", resolved_at.format("%Y-%m-%d %H:%M")));
        }
    }

    output.push(String::new());
    output.push("Description:".to_string());
    for line in wrap_text(&ticket.description, WRAP_WIDTH).lines() {
        output.push(format!("  {}", line));
    }

    output.join("\n")
}

/// Format the dashboard stat cards.
pub fn format_stats(stats: &Stats) -> String {
    let cards = [
        ("Total Tickets", stats.total.to_string(), "All time"),
        ("Open Tickets", stats.open.to_string(), "Needs attention"),
        (
            "Resolution Rate",
            format!("{}%", stats.resolution_rate_percent),
            "Tickets resolved",
        ),
        (
            "Avg Resolution Time",
            format!("{:.1}", stats.average_resolution_days),
            "Days",
        ),
    ];

    cards
        .iter()
        .map(|(title, value, caption)| format!("{:<20} {:>6}  {}", title, value, caption))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one horizontal bar chart, skipping empty slices.
fn format_bars<K: Display>(title: &str, slices: &[Slice<K>]) -> String {
    let visible: Vec<(String, usize)> = slices
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| (s.key.to_string(), s.count))
        .collect();

    if visible.is_empty() {
        return format!("{}\n  (no tickets)", title);
    }

    let max = visible.iter().map(|(_, count)| *count).max().unwrap_or(1);
    let label_width = visible.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut lines = vec![title.to_string()];
    for (label, count) in &visible {
        let width = (count * BAR_WIDTH).div_ceil(max);
        lines.push(format!(
            "  {:<label_width$}  {} {}",
            label,
            "█".repeat(width),
            count,
        ));
    }
    lines.join("\n")
}

/// Format the status and priority distribution charts.
pub fn format_charts(status: &[Slice<Status>], priority: &[Slice<Priority>]) -> String {
    format!(
        "{}\n\n{}",
        format_bars("Ticket Status Distribution", status),
        format_bars("Priority Distribution", priority)
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
