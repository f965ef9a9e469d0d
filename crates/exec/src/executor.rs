// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use cb_core::Command;

use crate::error::ExecError;

/// Runs pipeline commands to completion.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Print `cmd`, spawn it and wait for it. Any failure is fatal to the caller.
    async fn run(&self, cmd: Command) -> Result<(), ExecError>;

    /// Spawn every command, then wait for all of them.
    ///
    /// The first failure in submission order is returned once every started
    /// child has terminated.
    async fn run_all(&self, cmds: Vec<Command>) -> Result<(), ExecError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ExecError, Executor};
    use async_trait::async_trait;
    use cb_core::Command;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct FakeExecutorState {
        calls: Vec<Command>,
        failures: HashMap<String, i32>,
        next_pid: u32,
    }

    /// Fake executor that records commands instead of spawning them.
    #[derive(Clone)]
    pub struct FakeExecutor {
        inner: Arc<Mutex<FakeExecutorState>>,
    }

    impl Default for FakeExecutor {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeExecutorState {
                    calls: Vec::new(),
                    failures: HashMap::new(),
                    next_pid: 1000,
                })),
            }
        }
    }

    impl FakeExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every later run of `program` exit with `code`.
        pub fn fail_on(&self, program: &str, code: i32) {
            self.inner.lock().failures.insert(program.to_string(), code);
        }

        /// All recorded commands, in execution order.
        pub fn calls(&self) -> Vec<Command> {
            self.inner.lock().calls.clone()
        }

        /// Program names of the recorded commands.
        pub fn programs(&self) -> Vec<String> {
            self.inner
                .lock()
                .calls
                .iter()
                .map(|c| c.program().to_string())
                .collect()
        }

        fn record(&self, cmd: Command) -> Result<(), ExecError> {
            let mut state = self.inner.lock();
            let pid = state.next_pid;
            state.next_pid += 1;
            let failure = state.failures.get(cmd.program()).copied();
            let command = cmd.program().to_string();
            state.calls.push(cmd);
            match failure {
                Some(code) => Err(ExecError::NonZeroExit { command, pid, code }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl Executor for FakeExecutor {
        async fn run(&self, cmd: Command) -> Result<(), ExecError> {
            self.record(cmd)
        }

        async fn run_all(&self, cmds: Vec<Command>) -> Result<(), ExecError> {
            let mut first_error = None;
            for cmd in cmds {
                if let Err(e) = self.record(cmd) {
                    first_error.get_or_insert(e);
                }
            }
            match first_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeExecutor;

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
