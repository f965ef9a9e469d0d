// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-exec: external process runner for the cb build tool

mod error;
mod executor;
mod outcome;
mod runner;

pub use error::ExecError;
#[cfg(any(test, feature = "test-support"))]
pub use executor::FakeExecutor;
pub use executor::Executor;
#[cfg(unix)]
pub use outcome::signal_name;
pub use outcome::ExitOutcome;
pub use runner::{ProcessHandle, ProcessRunner};
