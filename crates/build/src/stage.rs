// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::str::FromStr;

/// A pipeline action selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Compile,
    Package,
    Run,
    Clean,
    /// Compile, package and run in sequence.
    All,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Compile,
        Stage::Package,
        Stage::Run,
        Stage::Clean,
        Stage::All,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Compile => "compile",
            Stage::Package => "make-iso",
            Stage::Run => "run-qemu",
            Stage::Clean => "clean",
            Stage::All => "all",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::Compile => "Compile this project",
            Stage::Package => "Make ISO file of this project",
            Stage::Run => "Run QEMU",
            Stage::Clean => "Clean object files",
            Stage::All => "Compile, make the ISO file and run QEMU",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subcommand found: {0}")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
