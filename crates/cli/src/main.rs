// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb: build, package and boot the AxiomOS kernel

mod color;
mod exit_error;
mod logging;
mod usage;

use std::path::Path;

use anyhow::Result;
use cb_build::{Bootstrap, BuildConfig, Pipeline, Stage, Startup};
use cb_core::report;
use cb_exec::ProcessRunner;
use clap::error::ErrorKind;
use clap::{FromArgMatches, Parser};

use crate::exit_error::ExitError;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("CB_GIT_HASH"));

/// Manifest the running binary is rebuilt from.
const MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

#[derive(Parser, Debug)]
#[command(
    name = "cb",
    version = VERSION,
    about = "Build, package and boot the AxiomOS kernel"
)]
struct Cli {
    /// Stage to run
    #[arg(value_name = "COMMAND")]
    command: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args).await {
        report::error(&e);
        std::process::exit(exit_error::exit_code(&e));
    }
}

async fn run(args: &[String]) -> Result<()> {
    let runner = ProcessRunner::new();

    // Rebuild before looking at the arguments: a stale binary may not
    // understand them yet.
    let bootstrap = Bootstrap::for_current_exe(Path::new(MANIFEST), "cb")?;
    let forwarded = args.get(1..).unwrap_or_default();
    if bootstrap.ensure_fresh(&runner, forwarded).await? == Startup::Reexecuted {
        return Ok(());
    }

    let Some(stage) = parse_stage(args)? else {
        return Ok(());
    };
    tracing::debug!(%stage, "dispatching");
    Pipeline::new(runner, BuildConfig::default())
        .execute(stage)
        .await?;
    Ok(())
}

/// Resolve the requested stage, printing usage for bad invocations.
///
/// `None` when help or the version was printed instead.
fn parse_stage(args: &[String]) -> Result<Option<Stage>> {
    let matches = match usage::command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(None);
        }
        Err(_) => {
            usage::print_stderr();
            return Err(ExitError::unknown_action().into());
        }
    };
    let cli = Cli::from_arg_matches(&matches)?;

    let Some(name) = cli.command else {
        usage::print_stdout();
        return Err(ExitError::missing_action().into());
    };
    match name.parse::<Stage>() {
        Ok(stage) => Ok(Some(stage)),
        Err(_) => {
            usage::print_stderr();
            Err(ExitError::unknown_action().into())
        }
    }
}
