// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-build: kernel build pipeline and self-rebuild bootstrap

pub mod bootstrap;
mod error;
pub mod layout;
mod pipeline;
mod stage;

pub use bootstrap::{Bootstrap, BootstrapError, Freshness, Startup};
pub use error::BuildError;
pub use layout::{BuildConfig, CompileMode, Layout, Toolchain};
pub use pipeline::{CompilePlan, Pipeline};
pub use stage::{Stage, UnknownStage};
