// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The usage block printed for `--help` and for bad invocations.

use cb_build::Stage;
use clap::CommandFactory;

use crate::{color, Cli};

/// The clap command with the stage list appended to its help.
pub fn command() -> clap::Command {
    Cli::command()
        .styles(color::styles())
        .after_help(commands_section())
}

/// `Commands:` followed by one line per stage.
pub fn commands_section() -> String {
    let width = Stage::ALL.iter().map(|s| s.name().len()).max().unwrap_or(0);
    let mut out = color::header("Commands:");
    for stage in Stage::ALL {
        let name = format!("{:<width$}", stage.name());
        out.push_str(&format!("\n  {}  {}", color::literal(&name), stage.description()));
    }
    out
}

pub fn print_stdout() {
    let help = command().render_help();
    if color::should_colorize() {
        println!("{}", help.ansi());
    } else {
        println!("{help}");
    }
}

pub fn print_stderr() {
    eprintln!("{}", command().render_help());
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
