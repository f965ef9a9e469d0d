// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use cb_core::PathError;
use cb_exec::ExecError;
use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::stage::Stage;

/// Errors that stop the build. None of them are recoverable.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    /// A file the pipeline writes itself could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Two sources map to the same object file.
    #[error("{first} and {second} would both be compiled to {object}")]
    DuplicateObject {
        object: String,
        first: String,
        second: String,
    },

    /// The input of a stage has not been produced yet.
    #[error("{path} does not exist (run `{stage}` first)")]
    MissingArtifact { path: String, stage: Stage },

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}
