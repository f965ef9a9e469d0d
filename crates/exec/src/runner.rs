// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning external commands and waiting for them.

use std::path::PathBuf;
use std::time::Instant;

use async_trait::async_trait;
use cb_core::{report, Command};

use crate::error::ExecError;
use crate::executor::Executor;
use crate::outcome::ExitOutcome;

/// Runs [`Command`]s as real child processes.
///
/// Children inherit stdin/stdout/stderr, so tool output streams straight to
/// the terminal.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    cwd: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run children in `dir` instead of the current directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Start `cmd` without waiting for it. The program is looked up on `PATH`.
    ///
    /// The command is consumed: once spawned it belongs to the handle.
    pub fn spawn(&self, cmd: Command) -> Result<ProcessHandle, ExecError> {
        let (program, args) = cmd.into_parts();

        let span = tracing::info_span!(
            "cb.cmd",
            cmd = %program,
            args = ?args,
            pid = tracing::field::Empty,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let mut process = tokio::process::Command::new(&program);
        process.args(&args);
        if let Some(dir) = &self.cwd {
            process.current_dir(dir);
        }

        let start = Instant::now();
        let child = process
            .spawn()
            .map_err(|source| ExecError::from_spawn(&program, self.cwd.as_deref(), source))?;
        let pid = child.id().unwrap_or_default();
        span.record("pid", pid);
        tracing::debug!(parent: &span, pid, "spawned");

        Ok(ProcessHandle {
            child,
            pid,
            command: program,
            span,
            start,
        })
    }
}

/// A running child process. Consumed by [`ProcessHandle::wait`].
#[derive(Debug)]
pub struct ProcessHandle {
    child: tokio::process::Child,
    pid: u32,
    command: String,
    span: tracing::Span,
    start: Instant,
}

impl ProcessHandle {
    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Block until the child terminates. Only `ExitedWithCode(0)` is success.
    pub async fn wait(mut self) -> Result<(), ExecError> {
        let waited = self.child.wait().await;
        let status = waited.map_err(|source| ExecError::WaitFailed {
            command: self.command.clone(),
            pid: self.pid,
            source,
        })?;

        let elapsed = self.start.elapsed().as_millis() as u64;
        self.span.record("duration_ms", elapsed);

        match ExitOutcome::from_status(status) {
            ExitOutcome::ExitedWithCode(0) => {
                self.span.record("exit_code", 0);
                tracing::debug!(parent: &self.span, "exited successfully");
                Ok(())
            }
            ExitOutcome::ExitedWithCode(code) => {
                self.span.record("exit_code", code);
                tracing::warn!(parent: &self.span, code, "exited with non-zero code");
                Err(ExecError::NonZeroExit {
                    command: self.command,
                    pid: self.pid,
                    code,
                })
            }
            ExitOutcome::TerminatedBySignal(signal) => {
                tracing::warn!(parent: &self.span, %signal, "terminated by signal");
                Err(ExecError::Signaled {
                    command: self.command,
                    pid: self.pid,
                    signal,
                })
            }
        }
    }
}

#[async_trait]
impl Executor for ProcessRunner {
    async fn run(&self, cmd: Command) -> Result<(), ExecError> {
        // Printed before spawning so a hung tool still shows what it was.
        report::info(&cmd);
        self.spawn(cmd)?.wait().await
    }

    async fn run_all(&self, cmds: Vec<Command>) -> Result<(), ExecError> {
        let mut handles = Vec::with_capacity(cmds.len());
        let mut spawn_error = None;

        for cmd in cmds {
            report::info(&cmd);
            match self.spawn(cmd) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        // Every started child is waited for, even after a failure.
        let mut first_error = None;
        for handle in handles {
            if let Err(e) = handle.wait().await {
                first_error.get_or_insert(e);
            }
        }

        match first_error.or(spawn_error) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
