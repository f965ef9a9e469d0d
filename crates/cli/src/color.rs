// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cb_core::report;
use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Stage names and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Whether usage output should be colored.
///
/// Help goes to stdout, so the TTY check looks there rather than at the
/// stderr stream the markers use.
pub fn should_colorize() -> bool {
    report::should_colorize_for(&std::io::stdout())
}

/// Clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
