//! The public path engine.
//!
//! [`PathEngine`] strings the pipeline stages together:
//! validate, split off the network prefix, collapse, resolve, reattach.
//! The string-returning operations never fail: invalid input yields `""`,
//! filesystem failures yield `false` or an empty list. The `try_*`/`check`/
//! `read_entries` twins report why.

use std::env;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::collapse::collapse;
use crate::path::decompose::{decompose, Decomposed};
use crate::path::enumerate::{self, EntryKind};
use crate::path::grammar::{Grammar, SEPARATOR};
use crate::path::{oracle, prefix, resolve, validate};

/// Lexical path engine bound to one grammar.
///
/// The engine holds no mutable state and is cheap to clone; it can be shared
/// freely between threads.
///
/// # Examples
///
/// ```
/// use lexpath::{Grammar, PathEngine};
///
/// let engine = PathEngine::new(Grammar::Posix);
/// assert_eq!(engine.clean("  a//b/./c/../d.txt "), "a/b/d.txt");
/// assert_eq!(engine.get_extension("a//b/./c/../d.txt"), "txt");
///
/// let windows = PathEngine::new(Grammar::Windows);
/// assert_eq!(windows.clean("C:\\Users\\..\\Public\\"), "C:/Public/");
/// assert_eq!(windows.clean("C:/temp/NUL"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEngine {
    grammar: Grammar,
    ignored_entries: Vec<String>,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new(Grammar::native())
    }
}

impl PathEngine {
    /// Create an engine for `grammar` with the default enumeration ignore list.
    #[must_use]
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            ignored_entries: enumerate::default_ignored(),
        }
    }

    /// Create an engine for the host grammar.
    #[must_use]
    pub fn native() -> Self {
        Self::default()
    }

    /// Create an engine from a merged configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::config::{Config, GrammarChoice};
    /// use lexpath::{Grammar, PathEngine};
    ///
    /// let config = Config {
    ///     grammar: Some(GrammarChoice::Windows),
    ///     ignored_entries: Some(vec![".git".to_string()]),
    ///     ..Default::default()
    /// };
    /// let engine = PathEngine::from_config(&config);
    /// assert_eq!(engine.grammar(), Grammar::Windows);
    /// assert_eq!(engine.ignored_entries(), [".git".to_string()]);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let grammar = config.grammar.unwrap_or_default().resolve();
        let mut engine = Self::new(grammar);
        if let Some(ref ignored) = config.ignored_entries {
            engine.ignored_entries.clone_from(ignored);
        }
        engine
    }

    /// Replace the names skipped during enumeration.
    #[must_use]
    pub fn with_ignored_entries(mut self, ignored: Vec<String>) -> Self {
        self.ignored_entries = ignored;
        self
    }

    /// The grammar this engine applies.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Names skipped during enumeration, besides `.` and `..`.
    #[must_use]
    pub fn ignored_entries(&self) -> &[String] {
        &self.ignored_entries
    }

    /// The separator of cleaned paths, as a string.
    #[must_use]
    pub fn separator(&self) -> String {
        self.grammar.separator().to_string()
    }

    /// Check `raw` against the validity rules of the grammar.
    ///
    /// Surrounding spaces are ignored, as they are by `clean`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` describing the first violated rule.
    pub fn check(&self, raw: &str) -> Result<()> {
        validate::check(raw.trim_matches(' '), self.grammar)
    }

    /// Whether `raw` passes [`check`](Self::check).
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }

    /// Clean `raw` into its canonical form.
    ///
    /// `Ok("")` means the path was empty or resolved to nothing (`a/..`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if `raw` is rejected by the validity checker, or
    /// if resolution exposes a form the grammar rejects (a drive letter
    /// surfacing under POSIX, for instance).
    pub fn try_clean(&self, raw: &str) -> Result<String> {
        // Trimming and prefix detection can expose new work after resolution
        // (`a/../ b`), so the pipeline runs until it stops changing the string.
        // A pass never lengthens its input, and a same-length rewrite only
        // respells a network prefix, which is stable after one pass.
        let mut current = self.clean_once(raw)?;
        loop {
            let next = self.clean_once(&current)?;
            if next == current {
                return Ok(current);
            }
            current = next;
        }
    }

    fn clean_once(&self, raw: &str) -> Result<String> {
        let trimmed = raw.trim_matches(' ');
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        validate::check(trimmed, self.grammar).map_err(|e| {
            log::debug!("{e}");
            e
        })?;

        let normalized = prefix::normalize(trimmed, self.grammar);
        let body = collapse(&normalized.body, self.grammar);
        let resolved = resolve::resolve(&body, self.grammar);
        Ok(normalized.join_body(&resolved))
    }

    /// Clean `raw` into its canonical form, or `""` if it is invalid.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        self.try_clean(raw).unwrap_or_default()
    }

    /// Join two paths with exactly one separator.
    ///
    /// Both sides are cleaned first, then the trailing separators of the first
    /// and the leading separators of the second are replaced by exactly one
    /// separator. An invalid side makes the result empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Grammar, PathEngine};
    ///
    /// let engine = PathEngine::new(Grammar::Posix);
    /// assert_eq!(engine.join("a/", "/b"), "a/b");
    /// assert_eq!(engine.join("a", "b"), "a/b");
    /// assert_eq!(engine.join("a", ""), "a/");
    /// ```
    #[must_use]
    pub fn join(&self, first: &str, second: &str) -> String {
        let (Ok(first), Ok(second)) = (self.try_clean(first), self.try_clean(second)) else {
            return String::new();
        };
        format!(
            "{}{SEPARATOR}{}",
            first.trim_end_matches(SEPARATOR),
            second.trim_start_matches(SEPARATOR)
        )
    }

    /// The cleaned current working directory, ending in a separator.
    ///
    /// Returns `""` if the directory cannot be determined or is not valid
    /// UTF-8.
    #[must_use]
    pub fn working_directory(&self) -> String {
        let cwd = match env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                log::debug!("cannot get current directory: {e}");
                return String::new();
            }
        };
        match cwd.to_str() {
            Some(cwd) => self.join(cwd, ""),
            None => {
                log::debug!("current directory {} is not UTF-8", cwd.display());
                String::new()
            }
        }
    }

    /// Make `raw` absolute.
    ///
    /// A path that is already absolute under the grammar is returned cleaned;
    /// anything else is resolved against the working directory.
    #[must_use]
    pub fn to_absolute(&self, raw: &str) -> String {
        let cleaned = self.clean(raw);
        if cleaned.is_empty() || self.grammar.is_absolute(&cleaned) {
            return cleaned;
        }
        let cwd = self.working_directory();
        if cwd.is_empty() {
            return String::new();
        }
        self.clean(&format!("{cwd}{cleaned}"))
    }

    /// Clean `raw` and split it into directory, basename and extension.
    #[must_use]
    pub fn decompose(&self, raw: &str) -> Decomposed {
        decompose(&self.clean(raw), self.grammar)
    }

    /// The directory part of `raw`, ending in a separator.
    #[must_use]
    pub fn get_directory(&self, raw: &str) -> String {
        self.decompose(raw).directory
    }

    /// The file name of `raw` without its extension.
    #[must_use]
    pub fn get_basename(&self, raw: &str) -> String {
        self.decompose(raw).basename
    }

    /// The extension of `raw`, without the dot.
    #[must_use]
    pub fn get_extension(&self, raw: &str) -> String {
        self.decompose(raw).extension
    }

    /// Whether `raw` names an existing filesystem object.
    #[must_use]
    pub fn exists(&self, raw: &str) -> bool {
        oracle::exists(&self.clean(raw))
    }

    /// Whether `raw` names an existing directory.
    #[must_use]
    pub fn is_directory(&self, raw: &str) -> bool {
        oracle::is_directory(&self.clean(raw))
    }

    /// Whether `raw` names an existing object that is not a directory.
    #[must_use]
    pub fn is_file(&self, raw: &str) -> bool {
        oracle::is_file(&self.clean(raw))
    }

    /// Whether `raw` names a symbolic link.
    #[must_use]
    pub fn is_symlink(&self, raw: &str) -> bool {
        oracle::is_symlink(&self.clean(raw))
    }

    /// Enumerate the children of directory `raw`.
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if `raw` is rejected or cleans to nothing.
    /// - `PathNotFound`, `PermissionDenied`, `NotADirectory` or `Io` from the
    ///   filesystem.
    pub fn read_entries(&self, raw: &str, kind: EntryKind) -> Result<Vec<String>> {
        let cleaned = self.try_clean(raw)?;
        if cleaned.is_empty() {
            return Err(Error::InvalidPath {
                path: raw.to_string(),
                reason: "path resolves to nothing".to_string(),
            });
        }
        enumerate::read_entries(&cleaned, kind, &self.ignored_entries)
    }

    /// Files directly inside `raw`, or nothing if it cannot be listed.
    #[must_use]
    pub fn list_files(&self, raw: &str) -> Vec<String> {
        self.list(raw, EntryKind::Files)
    }

    /// Folders directly inside `raw`, each ending in a separator, or nothing
    /// if it cannot be listed.
    #[must_use]
    pub fn list_folders(&self, raw: &str) -> Vec<String> {
        self.list(raw, EntryKind::Folders)
    }

    fn list(&self, raw: &str, kind: EntryKind) -> Vec<String> {
        self.read_entries(raw, kind).unwrap_or_else(|e| {
            log::debug!("cannot list {raw}: {e}");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posix() -> PathEngine {
        PathEngine::new(Grammar::Posix)
    }

    fn windows() -> PathEngine {
        PathEngine::new(Grammar::Windows)
    }

    #[test]
    fn test_clean_basic() {
        assert_eq!(posix().clean("a/b/../c"), "a/c");
        assert_eq!(posix().clean("a/./b"), "a/b");
        assert_eq!(posix().clean("a\\b\\c"), "a/b/c");
        assert_eq!(posix().clean("  /usr//local/ "), "/usr/local/");
        assert_eq!(posix().clean(""), "");
        assert_eq!(posix().clean("   "), "");
    }

    #[test]
    fn test_clean_windows_paths() {
        assert_eq!(windows().clean("C:\\Windows\\System32\\..\\"), "C:/Windows/");
        assert_eq!(windows().clean("C:\\..\\..\\x"), "C:/x");
        assert_eq!(windows().clean("C::\\dir"), "C:/dir");
        assert_eq!(windows().clean(".\\tools\\run.bat"), "tools/run.bat");
    }

    #[test]
    fn test_clean_rejects_invalid() {
        assert_eq!(windows().clean("NUL"), "");
        assert_eq!(windows().clean("nul"), "");
        assert_eq!(windows().clean("dir/a*b"), "");
        assert_eq!(posix().clean("C:/Windows"), "");
        assert!(windows().try_clean("NUL").unwrap_err().is_invalid_path());
    }

    #[test]
    fn test_clean_network_paths() {
        assert_eq!(windows().clean("//server/share/x"), "\\\\server/share/x");
        assert_eq!(windows().clean("smb://server/share"), "\\\\server/share");
        assert_eq!(windows().clean("sftp://host\\dir\\..\\f"), "\\\\host/f");
        assert_eq!(posix().clean("\\\\server\\share"), "//server/share");
        assert_eq!(posix().clean("////server//share/"), "//server/share/");
        assert_eq!(posix().clean("smb://host//a/./b"), "smb://host/a/b");
        assert_eq!(posix().clean("sftp://host/a/.."), "sftp://host/");
    }

    #[test]
    fn test_clean_trailing_dots() {
        assert_eq!(posix().clean("dir/file."), "dir/file");
        assert_eq!(posix().clean("dir/.."), "");
        assert_eq!(posix().clean("a/dir/.."), "a/");
        assert_eq!(posix().clean("dir/."), "dir/");
    }

    #[test]
    fn test_clean_fixed_point_after_resolution() {
        assert_eq!(posix().clean("a/../ b"), "b");
        let once = posix().clean("a/../ b/c");
        assert_eq!(posix().clean(&once), once);
    }

    #[test]
    fn test_clean_converges_on_long_space_led_chains() {
        let raw = format!("z/..{}/x", "/ .".repeat(10));
        let once = windows().clean(&raw);
        assert_eq!(once, "x");
        assert_eq!(windows().clean(&once), once);

        let raw = format!("a/..{}/b", "/ ./ ..".repeat(12));
        let once = posix().clean(&raw);
        assert_eq!(posix().clean(&once), once);
    }

    #[test]
    fn test_clean_drive_surfacing_under_posix() {
        assert_eq!(posix().clean("a/../c:/x"), "");
    }

    #[test]
    fn test_clean_leading_current_dir() {
        assert_eq!(posix().clean("./run.sh"), "./run.sh");
        assert_eq!(windows().clean("./run.sh"), "run.sh");
    }

    #[test]
    fn test_join() {
        assert_eq!(posix().join("a/", "/b"), "a/b");
        assert_eq!(posix().join("a", "b"), "a/b");
        assert_eq!(posix().join("/", "b"), "/b");
        assert_eq!(posix().join("", "b"), "/b");
        assert_eq!(posix().join("", ""), "/");
        assert_eq!(posix().join("a", ""), "a/");
        assert_eq!(windows().join("C:/dir", "NUL"), "");
    }

    #[test]
    fn test_working_directory_is_terminated() {
        let cwd = PathEngine::native().working_directory();
        if !cfg!(windows) {
            assert!(cwd.starts_with('/'));
        }
        assert!(cwd.ends_with('/'));
        assert!(!cwd.ends_with("//"));
    }

    #[test]
    fn test_to_absolute() {
        let engine = PathEngine::native();
        assert_eq!(engine.to_absolute(""), "");

        let cwd = engine.working_directory();
        assert_eq!(engine.to_absolute("some/file"), format!("{cwd}some/file"));
        assert_eq!(engine.to_absolute("./some/../file"), format!("{cwd}file"));

        assert_eq!(posix().to_absolute("/etc/hosts"), "/etc/hosts");
        assert_eq!(posix().to_absolute("smb://host/x"), "smb://host/x");
        assert_eq!(windows().to_absolute("D:\\data"), "D:/data");
        assert_eq!(windows().to_absolute("\\\\host\\x"), "\\\\host/x");
    }

    #[test]
    fn test_decompose_via_engine() {
        let engine = posix();
        assert_eq!(engine.get_directory("a/b/c.txt"), "a/b/");
        assert_eq!(engine.get_basename("a/b/c.txt"), "c");
        assert_eq!(engine.get_extension("a/b/c.txt"), "txt");
        assert_eq!(engine.get_directory("a/b/"), "a/b/");
        assert_eq!(engine.get_basename("a/b/"), "");
        assert_eq!(engine.get_extension("a/b/"), "");
    }

    #[test]
    fn test_decompose_invalid_is_empty() {
        let engine = windows();
        assert_eq!(engine.decompose("C:/x/CON"), Decomposed::default());
    }

    #[test]
    fn test_separator() {
        assert_eq!(posix().separator(), "/");
        assert_eq!(windows().separator(), "/");
    }

    #[test]
    fn test_check_reports_reason() {
        let err = windows().check(" C:/a/com3 ").unwrap_err();
        assert!(err.to_string().contains("COM3"));
        assert!(posix().is_valid("anything/goes"));
    }

    #[test]
    fn test_oracle_on_invalid_input() {
        let engine = windows();
        assert!(!engine.exists("NUL"));
        assert!(!engine.is_file("NUL"));
        assert!(!engine.is_directory("NUL"));
        assert!(!engine.is_symlink("NUL"));
        assert!(engine.list_files("NUL").is_empty());
        assert!(engine.list_folders("").is_empty());
    }

    #[test]
    fn test_read_entries_rejects_empty() {
        let err = posix().read_entries("a/..", EntryKind::Files).unwrap_err();
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathEngine>();
    }
}
