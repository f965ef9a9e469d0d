// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-core: commands, path rewriting and diagnostics for the cb build tool

pub mod command;
pub mod path;
pub mod report;

pub use command::Command;
pub use path::{change_extension, change_filename, change_prefix, PathError};
