// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_tickets}
  {new}         Create a new ticket
  {edit}        Edit a ticket's title, description, requester, or priority
  {delete}      Delete ticket(s)
  {start}       Start work on ticket(s)
  {resolve}     Mark ticket(s) as resolved
  {status}      Set a ticket's status directly
  {list}        List tickets grouped by status
  {show}        Show ticket details

{header_dashboard}
  {stats}       Show ticket statistics
  {charts}      Show status and priority distribution

{header_setup}
  {init}        Initialize the helpdesk
  {completion}  Generate shell completions",
        header_tickets = colors::header("Tickets:"),
        header_dashboard = colors::header("Dashboard:"),
        header_setup = colors::header("Setup:"),
        new = colors::literal("new"),
        edit = colors::literal("edit"),
        delete = colors::literal("delete"),
        start = colors::literal("start"),
        resolve = colors::literal("resolve"),
        status = colors::literal("status"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        stats = colors::literal("stats"),
        charts = colors::literal("charts"),
        init = colors::literal("init"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  helpdesk init                                  Initialize the helpdesk
  helpdesk new \"VPN down\" -d <desc> -r <who>     Open a ticket
  helpdesk list                                  List all tickets
  helpdesk start <id>                            Start working on a ticket
  helpdesk resolve <id>                          Mark a ticket resolved",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
