//! Existence and type queries against the filesystem.
//!
//! Every function here takes a path that has already been cleaned and never
//! fails: an unreadable or missing path is simply reported as not existing.

use std::fs::{self, Metadata};

use crate::path::grammar::SEPARATOR;

/// Stat `cleaned`, following symlinks.
///
/// When the direct stat fails the path is retried with a trailing separator,
/// which some platforms need to resolve a directory.
#[must_use]
pub fn stat(cleaned: &str) -> Option<Metadata> {
    if cleaned.is_empty() {
        return None;
    }
    match fs::metadata(cleaned) {
        Ok(meta) => Some(meta),
        Err(err) if !cleaned.ends_with(SEPARATOR) => {
            log::trace!("stat {cleaned} failed ({err}), retrying as a directory");
            fs::metadata(format!("{cleaned}{SEPARATOR}")).ok()
        }
        Err(err) => {
            log::trace!("stat {cleaned} failed: {err}");
            None
        }
    }
}

/// Whether `cleaned` exists.
#[must_use]
pub fn exists(cleaned: &str) -> bool {
    stat(cleaned).is_some()
}

/// Whether `cleaned` exists and is a directory.
#[must_use]
pub fn is_directory(cleaned: &str) -> bool {
    stat(cleaned).is_some_and(|meta| meta.is_dir())
}

/// Whether `cleaned` exists and is not a directory.
///
/// A missing path is not a file.
#[must_use]
pub fn is_file(cleaned: &str) -> bool {
    stat(cleaned).is_some_and(|meta| !meta.is_dir())
}

/// Whether `cleaned` itself is a symbolic link.
///
/// A trailing separator would make the platform follow the link, so it is
/// removed before the `lstat`.
#[must_use]
pub fn is_symlink(cleaned: &str) -> bool {
    let target = match cleaned.strip_suffix(SEPARATOR) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => cleaned,
    };
    if target.is_empty() {
        return false;
    }
    fs::symlink_metadata(target).is_ok_and(|meta| meta.file_type().is_symlink())
}
