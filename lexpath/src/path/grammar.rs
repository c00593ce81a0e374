//! Path grammars.
//!
//! A [`Grammar`] captures every rule that differs between the Windows and
//! POSIX path conventions: separators, forbidden characters, reserved device
//! names, how network prefixes are spelled, what counts as absolute, and where
//! a file extension begins. The grammar is a plain value chosen once, so both
//! rule sets can be exercised on any host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The separator every cleaned path uses.
pub const SEPARATOR: char = '/';

/// The separator that is rewritten to [`SEPARATOR`] during cleaning.
pub const INVALID_SEPARATOR: char = '\\';

/// Characters Windows refuses in file names.
const WINDOWS_FORBIDDEN: &[char] = &['*', '?', '"', '<', '>', '|'];

/// Device names Windows reserves regardless of directory.
const WINDOWS_RESERVED: &[&str] = &[
    "AUX", "NUL", "CON", "PRN", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// A path grammar.
///
/// # Examples
///
/// ```
/// use lexpath::Grammar;
///
/// assert!(Grammar::Windows.is_reserved_name("nul"));
/// assert!(!Grammar::Posix.is_reserved_name("nul"));
/// assert!(Grammar::Posix.is_absolute("/usr/lib"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Drive letters, `\\` network prefixes, reserved device names.
    Windows,
    /// Single root, `//`, `smb://` and `sftp://` network prefixes.
    Posix,
}

impl Grammar {
    /// The grammar of the host operating system.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator used in cleaned paths.
    #[must_use]
    pub const fn separator(self) -> char {
        SEPARATOR
    }

    /// Returns the first forbidden character in `path`, if any.
    #[must_use]
    pub fn forbidden_char(self, path: &str) -> Option<char> {
        if path.contains('\0') {
            return Some('\0');
        }
        match self {
            Self::Windows => path.chars().find(|c| WINDOWS_FORBIDDEN.contains(c)),
            Self::Posix => None,
        }
    }

    /// Whether `segment` is a reserved device name (case-insensitive).
    #[must_use]
    pub fn is_reserved_name(self, segment: &str) -> bool {
        match self {
            Self::Windows => {
                let upper = segment.to_ascii_uppercase();
                WINDOWS_RESERVED.contains(&upper.as_str())
            }
            Self::Posix => false,
        }
    }

    /// Whether `path` is absolute under this grammar.
    ///
    /// Expects a cleaned path.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Grammar;
    ///
    /// assert!(Grammar::Windows.is_absolute("C:/Windows"));
    /// assert!(Grammar::Windows.is_absolute("\\\\server/share"));
    /// assert!(Grammar::Posix.is_absolute("sftp://host/home"));
    /// assert!(!Grammar::Posix.is_absolute("relative/path"));
    /// ```
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            Self::Windows => {
                path.starts_with("\\\\") || path.starts_with(SEPARATOR) || has_drive(path)
            }
            Self::Posix => {
                path.starts_with(SEPARATOR)
                    || path.starts_with("smb://")
                    || path.starts_with("sftp://")
            }
        }
    }

    /// Byte index of the dot that starts the extension of `name`.
    ///
    /// `name` is a single file name with no separators. Windows takes the last
    /// dot; POSIX takes the first dot that is not the leading character, so
    /// hidden files such as `.bashrc` have no extension. A dot that would leave
    /// an empty extension, and the names `.` and `..`, never qualify.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Grammar;
    ///
    /// assert_eq!(Grammar::Windows.extension_dot("a.tar.gz"), Some(5));
    /// assert_eq!(Grammar::Posix.extension_dot("a.tar.gz"), Some(1));
    /// assert_eq!(Grammar::Posix.extension_dot(".bashrc"), None);
    /// assert_eq!(Grammar::Windows.extension_dot(".bashrc"), Some(0));
    /// ```
    #[must_use]
    pub fn extension_dot(self, name: &str) -> Option<usize> {
        if name == "." || name == ".." {
            return None;
        }
        let dot = match self {
            Self::Windows => name.rfind('.'),
            Self::Posix => name
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c == '.')
                .map(|(idx, _)| idx),
        }?;
        (dot + 1 < name.len()).then_some(dot)
    }

    /// Whether a `.` segment at the start of a relative path is kept.
    #[must_use]
    pub const fn keeps_leading_current_dir(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Whether colons after the first one are deleted during cleaning.
    #[must_use]
    pub const fn collapses_colons(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Whether a path starting with a drive designator is foreign to this grammar.
    #[must_use]
    pub const fn rejects_drive_paths(self) -> bool {
        matches!(self, Self::Posix)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

/// Whether `path` starts with an ASCII letter followed by a colon.
#[must_use]
pub fn has_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() > 1 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Whether `segment` is exactly a drive designator such as `C:`.
#[must_use]
pub fn is_drive_designator(segment: &str) -> bool {
    segment.len() == 2 && has_drive(segment)
}
