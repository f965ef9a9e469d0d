// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying the process exit code.
//!
//! `run()` returns `ExitError` for usage mistakes instead of exiting, so
//! `main()` is the only place that terminates the process.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// No action on the command line.
    pub fn missing_action() -> Self {
        Self::new(1, "no command was given")
    }

    /// An action that names no stage.
    pub fn unknown_action() -> Self {
        Self::new(1, "unknown subcommand found")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned from `run()`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map_or(1, |e| e.code)
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
