// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal state of a child process.

use std::process::ExitStatus;

/// How a child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    ExitedWithCode(i32),
    /// Terminated by the named signal (e.g. `SIGKILL`).
    TerminatedBySignal(String),
}

impl ExitOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitOutcome::ExitedWithCode(code),
            None => ExitOutcome::TerminatedBySignal(signal_of(status)),
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::ExitedWithCode(0))
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(signo) => signal_name(signo),
        None => "unknown signal".to_string(),
    }
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> String {
    "unknown signal".to_string()
}

/// Name for a raw signal number, e.g. `9` → `SIGKILL`.
#[cfg(unix)]
pub fn signal_name(signo: i32) -> String {
    match nix::sys::signal::Signal::try_from(signo) {
        Ok(signal) => signal.as_str().to_string(),
        Err(_) => format!("signal {signo}"),
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
