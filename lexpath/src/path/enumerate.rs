//! Directory enumeration.
//!
//! The directory handle lives in a [`DirScan`] guard owned by a single
//! [`read_entries`] call; dropping the guard releases the handle, so every
//! return path (including `?` on a failed entry) closes it.

use std::fs::{self, ReadDir};

use crate::error::{Error, Result};
use crate::path::grammar::SEPARATOR;
use crate::path::oracle;

/// Version-control metadata names skipped unless configured otherwise.
pub const DEFAULT_IGNORED_ENTRIES: &[&str] = &[".svn"];

/// Which children to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Entries that are not directories.
    Files,
    /// Directories, reported with a trailing separator.
    Folders,
}

/// A scoped handle over one open directory.
///
/// Yields the names of the directory's children. Names that are not valid
/// UTF-8 cannot be expressed as path strings and are skipped.
pub struct DirScan {
    dir: String,
    entries: ReadDir,
}

impl DirScan {
    /// Open `dir` for scanning.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound`, `PermissionDenied` or `Io` if the directory
    /// cannot be opened.
    pub fn open(dir: &str) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| Error::from_io(e, dir))?;
        log::debug!("opened directory handle for {dir}");
        Ok(Self {
            dir: dir.to_string(),
            entries,
        })
    }
}

impl Iterator for DirScan {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::from_io(e, &self.dir))),
            };
            match entry.file_name().into_string() {
                Ok(name) => return Some(Ok(name)),
                Err(raw) => log::debug!("skipping non UTF-8 entry {raw:?} in {}", self.dir),
            }
        }
    }
}

impl Drop for DirScan {
    fn drop(&mut self) {
        log::debug!("closed directory handle for {}", self.dir);
    }
}

/// List the children of the cleaned directory path `cleaned`.
///
/// `.`, `..` and any name in `ignored` are skipped. Each remaining entry is
/// classified by following symlinks; entries that cannot be stat'ed belong to
/// neither kind. Returned paths are `cleaned` with a trailing separator plus
/// the entry name, folders with a trailing separator of their own, sorted.
///
/// # Errors
///
/// - `PathNotFound` / `PermissionDenied` / `Io` if `cleaned` cannot be
///   stat'ed or opened, or reading an entry fails.
/// - `NotADirectory` if `cleaned` is not a directory.
pub fn read_entries(cleaned: &str, kind: EntryKind, ignored: &[String]) -> Result<Vec<String>> {
    let meta = fs::metadata(cleaned).map_err(|e| Error::from_io(e, cleaned))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: cleaned.into(),
        });
    }

    let dir = if cleaned.ends_with(SEPARATOR) {
        cleaned.to_string()
    } else {
        format!("{cleaned}{SEPARATOR}")
    };

    let mut results = Vec::new();
    for name in DirScan::open(&dir)? {
        let name = name?;
        if name == "." || name == ".." || ignored.iter().any(|skip| *skip == name) {
            log::trace!("skipping {name} in {dir}");
            continue;
        }

        let full = format!("{dir}{name}");
        let Some(meta) = oracle::stat(&full) else {
            log::debug!("cannot classify {full}, skipping");
            continue;
        };
        match (kind, meta.is_dir()) {
            (EntryKind::Folders, true) => results.push(format!("{full}{SEPARATOR}")),
            (EntryKind::Files, false) => results.push(full),
            _ => {}
        }
    }

    results.sort();
    Ok(results)
}

/// The default ignore list as owned strings.
#[must_use]
pub fn default_ignored() -> Vec<String> {
    DEFAULT_IGNORED_ENTRIES
        .iter()
        .map(ToString::to_string)
        .collect()
}
