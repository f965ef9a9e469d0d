// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Self-rebuild: keep the running binary in sync with its own sources.
//!
//! On startup the newest source modification time is compared with the
//! binary's. If a source is strictly newer the binary is rebuilt, the fresh
//! binary is re-invoked with the original arguments, and the current process
//! is expected to exit once that re-invocation completes.

mod dep_info;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use cb_core::{cmd, Command};
use cb_exec::Executor;
use thiserror::Error;

use crate::error::BuildError;

pub use dep_info::parse as parse_dep_info;

/// Errors from the freshness check.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("cannot stat {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read dep-info {}: {source}", path.display())]
    DepInfo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The rebuild command succeeded but `input` is still newer than the
    /// binary. A source stamped in the future stays newer than any rebuild.
    #[error(
        "{} is still older than {} after rebuilding (is its mtime in the future?)",
        binary.display(),
        input.display()
    )]
    StillStale { binary: PathBuf, input: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The binary is at least as new as every source.
    Fresh,
    /// Some source is strictly newer than the binary.
    Stale,
}

/// What the caller should do after [`Bootstrap::ensure_fresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// Nothing was rebuilt; dispatch the requested action.
    Dispatch,
    /// The rebuilt binary already ran the requested action; exit successfully.
    Reexecuted,
}

/// The binary, the sources it is built from, and how to rebuild it.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    binary: PathBuf,
    sources: Vec<PathBuf>,
    rebuild: Command,
}

impl Bootstrap {
    pub fn new(binary: impl Into<PathBuf>, sources: Vec<PathBuf>, rebuild: Command) -> Self {
        Self {
            binary: binary.into(),
            sources,
            rebuild,
        }
    }

    /// Bootstrap for the running executable.
    ///
    /// Sources come from the dep-info file Cargo leaves next to the binary.
    /// Without one (e.g. an installed binary) there is nothing to compare and
    /// the binary is always fresh.
    pub fn for_current_exe(manifest: &Path, bin_name: &str) -> Result<Self, BootstrapError> {
        let binary = std::env::current_exe().map_err(BootstrapError::CurrentExe)?;

        let dep_info = binary.with_extension("d");
        let sources = match std::fs::read_to_string(&dep_info) {
            Ok(text) => dep_info::parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %dep_info.display(),
                    "no dep-info, skipping self-rebuild check"
                );
                Vec::new()
            }
            Err(source) => {
                return Err(BootstrapError::DepInfo {
                    path: dep_info,
                    source,
                });
            }
        };

        let manifest = manifest.display().to_string();
        let mut rebuild = cmd!("cargo", "build", "--manifest-path", manifest)
            .args(["--bin", bin_name]);
        if !cfg!(debug_assertions) {
            rebuild = rebuild.arg("--release");
        }

        Ok(Self::new(binary, sources, rebuild))
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn rebuild_command(&self) -> &Command {
        &self.rebuild
    }

    /// Compare every source against the binary.
    pub fn freshness(&self) -> Result<Freshness, BootstrapError> {
        match self.newer_source()? {
            Some(_) => Ok(Freshness::Stale),
            None => Ok(Freshness::Fresh),
        }
    }

    /// First source strictly newer than the binary.
    ///
    /// Sources that no longer exist are ignored.
    pub fn newer_source(&self) -> Result<Option<&Path>, BootstrapError> {
        let binary_time = modified(&self.binary)?;

        for source in &self.sources {
            let source_time = match modified(source) {
                Ok(t) => t,
                Err(BootstrapError::Metadata { source: e, .. })
                    if e.kind() == std::io::ErrorKind::NotFound =>
                {
                    continue
                }
                Err(e) => return Err(e),
            };
            if source_time > binary_time {
                tracing::debug!(source = %source.display(), "source is newer than binary");
                return Ok(Some(source.as_path()));
            }
        }
        Ok(None)
    }

    /// Rebuild and re-invoke the binary with `args` if it is stale.
    ///
    /// `args` are the original arguments without the program name.
    pub async fn ensure_fresh<E>(&self, exec: &E, args: &[String]) -> Result<Startup, BuildError>
    where
        E: Executor + ?Sized,
    {
        if self.freshness()? == Freshness::Fresh {
            return Ok(Startup::Dispatch);
        }

        tracing::info!(binary = %self.binary.display(), "sources changed, rebuilding");
        exec.run(self.rebuild.clone()).await?;

        // A rebuild that leaves the binary stale would re-enter this path forever.
        if let Some(input) = self.newer_source()? {
            return Err(BootstrapError::StillStale {
                binary: self.binary.clone(),
                input: input.to_path_buf(),
            }
            .into());
        }

        let program = self.binary.to_string_lossy();
        exec.run(Command::copy(&program, args)).await?;
        Ok(Startup::Reexecuted)
    }
}

fn modified(path: &Path) -> Result<SystemTime, BootstrapError> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| BootstrapError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
