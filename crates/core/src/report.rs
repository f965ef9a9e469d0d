// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `INFO:` / `ERROR:` markers on the diagnostic stream (stderr).

use std::fmt::Display;
use std::io::IsTerminal;

pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    /// Bold bright white
    pub const INFO: &str = "\x1b[1m\x1b[97m";
    /// Bold bright red
    pub const ERROR: &str = "\x1b[1m\x1b[91m";
}

/// Determine if output written to `stream` should carry ANSI attributes.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check on `stream`.
pub fn should_colorize_for(stream: &impl IsTerminal) -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    stream.is_terminal()
}

/// Whether the markers on stderr should be colored.
pub fn should_colorize() -> bool {
    should_colorize_for(&std::io::stderr())
}

fn marker(code: &str, label: &str) -> String {
    if should_colorize() {
        format!("{code}{label}{}", codes::RESET)
    } else {
        label.to_string()
    }
}

pub fn info_marker() -> String {
    marker(codes::INFO, "INFO:")
}

pub fn error_marker() -> String {
    marker(codes::ERROR, "ERROR:")
}

/// Print `INFO: <msg>` to stderr.
pub fn info(msg: impl Display) {
    eprintln!("{} {msg}", info_marker());
}

/// Print `ERROR: <msg>` to stderr.
pub fn error(msg: impl Display) {
    eprintln!("{} {msg}", error_marker());
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
