// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntactic source-to-object path rewriting.
//!
//! These helpers never touch the filesystem. They look only at the last `.`
//! and the last `/` of the input string.

use thiserror::Error;

/// Errors from path rewriting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The expected `.` or `/` was not found (or only at index 0).
    #[error("invalid filename was found.\n    filename: {filename}")]
    InvalidFilename { filename: String },
}

/// Position of the last `needle`, ignoring a match at index 0.
fn last_index_of(path: &str, needle: char) -> Result<usize, PathError> {
    match path.rfind(needle) {
        Some(idx) if idx > 0 => Ok(idx),
        _ => Err(PathError::InvalidFilename {
            filename: path.to_string(),
        }),
    }
}

/// Replace everything after the last `.` with `ext`.
///
/// `change_extension("./src/boot.asm", "o") == "./src/boot.o"`
pub fn change_extension(path: &str, ext: &str) -> Result<String, PathError> {
    let period = last_index_of(path, '.')?;
    let mut out = String::with_capacity(period + 1 + ext.len());
    out.push_str(&path[..=period]);
    out.push_str(ext);
    Ok(out)
}

/// Replace the directory part (everything before the last `/`) with `prefix`.
///
/// The separator itself is kept, so `prefix` should not end with `/`:
/// `change_prefix("./src/boot.o", "./obj") == "./obj/boot.o"`
pub fn change_prefix(path: &str, prefix: &str) -> Result<String, PathError> {
    let slash = last_index_of(path, '/')?;
    let mut out = String::with_capacity(prefix.len() + path.len() - slash);
    out.push_str(prefix);
    out.push_str(&path[slash..]);
    Ok(out)
}

/// Map a source path to an output path: new extension, then new directory.
pub fn change_filename(prefix: &str, path: &str, suffix: &str) -> Result<String, PathError> {
    change_prefix(&change_extension(path, suffix)?, prefix)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
