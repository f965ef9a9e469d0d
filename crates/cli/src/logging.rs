// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic tracing, separate from the INFO/ERROR progress lines.

use tracing_subscriber::EnvFilter;

/// Variable holding the filter directives, e.g. `CB_LOG=cb_exec=debug`.
pub const LOG_ENV: &str = "CB_LOG";

const DEFAULT_FILTER: &str = "error";

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
