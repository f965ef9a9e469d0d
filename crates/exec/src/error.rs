// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution error types.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while launching or waiting for an external command.
///
/// Every variant is terminal for a pipeline stage: there is no retry and no
/// partial success.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The OS could not create a child process.
    #[error("cannot make a process for `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: io::Error,
    },

    /// The program could not be located on `PATH` or is not executable.
    #[error("cannot execute {command}: {source}")]
    ExecFailed {
        command: String,
        source: io::Error,
    },

    /// The directory the child should start in does not exist.
    #[error("cannot run {command} in {}: {source}", dir.display())]
    WorkingDir {
        command: String,
        dir: PathBuf,
        source: io::Error,
    },

    /// Waiting for the child's terminal state failed.
    #[error("could not wait pid: {pid}: {source}")]
    WaitFailed {
        command: String,
        pid: u32,
        source: io::Error,
    },

    /// The child exited with a non-zero status.
    #[error("a child process {pid} exited with exit code {code}")]
    NonZeroExit {
        command: String,
        pid: u32,
        code: i32,
    },

    /// The child was terminated by a signal.
    #[error("command process {pid} was terminated by {signal}")]
    Signaled {
        command: String,
        pid: u32,
        signal: String,
    },
}

impl ExecError {
    /// Classify an error returned while spawning `command` in `cwd`.
    ///
    /// A missing working directory is also reported as `NotFound`, so the
    /// directory is checked before blaming the program.
    pub(crate) fn from_spawn(command: &str, cwd: Option<&Path>, source: io::Error) -> Self {
        let command = command.to_string();
        match (source.kind(), cwd) {
            (io::ErrorKind::NotFound, Some(dir)) if !dir.is_dir() => ExecError::WorkingDir {
                command,
                dir: dir.to_path_buf(),
                source,
            },
            (io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied, _) => {
                ExecError::ExecFailed { command, source }
            }
            _ => ExecError::SpawnFailed { command, source },
        }
    }

    /// The program name of the command that failed.
    pub fn command(&self) -> &str {
        match self {
            ExecError::SpawnFailed { command, .. }
            | ExecError::ExecFailed { command, .. }
            | ExecError::WorkingDir { command, .. }
            | ExecError::WaitFailed { command, .. }
            | ExecError::NonZeroExit { command, .. }
            | ExecError::Signaled { command, .. } => command,
        }
    }
}
