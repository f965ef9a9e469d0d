// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External process invocations.
//!
//! A [`Command`] is a program name plus an ordered argument list. It is never
//! mutated in place: every builder step and [`Command::append`] consumes the
//! value and hands back a new one, so a stage that has been extended cannot be
//! reused by accident.

use std::fmt;

/// One external process invocation (`program` followed by `args`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
}

impl Command {
    /// A command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// A command from a program name and a list of arguments.
    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(program).args(args)
    }

    /// A command owning fresh copies of borrowed arguments.
    ///
    /// Used when the argument list belongs to someone else, e.g. the
    /// arguments this process was started with.
    pub fn copy<S: AsRef<str>>(name: &str, args: &[S]) -> Self {
        Self {
            program: name.to_owned(),
            args: args.iter().map(|a| a.as_ref().to_owned()).collect(),
        }
    }

    /// Add one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `self.args ++ extra`. The original command is moved into the result.
    pub fn append<I, S>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args(extra)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Split into program and arguments.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.program, self.args)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Build a [`Command`] from a program and any number of arguments.
///
/// ```ignore
/// let nasm = cb_core::cmd!("nasm", "-felf32", "-o", obj, src);
/// ```
#[macro_export]
macro_rules! cmd {
    ($program:expr $(, $arg:expr)* $(,)?) => {
        $crate::Command::new($program)$(.arg($arg))*
    };
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
