// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Makefile-style dep-info files written by Cargo next to each binary.
//!
//! ```text
//! /work/target/debug/cb: /work/crates/cli/src/main.rs /work/crates/core/src/lib.rs
//!
//! /work/crates/cli/src/main.rs:
//! ```

use std::path::PathBuf;

/// Source files of the first rule in `text`.
///
/// Spaces inside paths are escaped as `\ `.
pub fn parse(text: &str) -> Vec<PathBuf> {
    let Some(deps) = text
        .lines()
        .find_map(|line| line.split_once(": ").map(|(_, deps)| deps))
    else {
        return Vec::new();
    };

    let mut paths = Vec::new();
    let mut current = String::new();
    let mut chars = deps.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&' ') => {
                current.push(' ');
                chars.next();
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(PathBuf::from(current));
    }
    paths
}

#[cfg(test)]
#[path = "dep_info_tests.rs"]
mod tests;
