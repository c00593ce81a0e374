//! Splitting a cleaned path into directory, basename and extension.

use serde::Serialize;

use crate::path::grammar::{Grammar, SEPARATOR};

/// The three parts of a cleaned path.
///
/// For a path that does not end in a separator,
/// `directory + basename + ("." + extension, if any)` reproduces the path.
/// A path ending in a separator is a directory reference: it is all
/// `directory`, with empty `basename` and `extension`.
///
/// # Examples
///
/// ```
/// use lexpath::path::decompose::decompose;
/// use lexpath::Grammar;
///
/// let parts = decompose("docs/archive.tar.gz", Grammar::Posix);
/// assert_eq!(parts.directory, "docs/");
/// assert_eq!(parts.basename, "archive");
/// assert_eq!(parts.extension, "tar.gz");
/// assert_eq!(parts.to_path(), "docs/archive.tar.gz");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decomposed {
    /// Everything up to and including the last separator.
    pub directory: String,
    /// The file name without its extension.
    pub basename: String,
    /// The extension without its leading dot.
    pub extension: String,
}

impl Decomposed {
    /// Reassemble the path.
    #[must_use]
    pub fn to_path(&self) -> String {
        if self.extension.is_empty() {
            format!("{}{}", self.directory, self.basename)
        } else {
            format!("{}{}.{}", self.directory, self.basename, self.extension)
        }
    }

    /// Whether the decomposed path was a directory reference.
    #[must_use]
    pub fn is_directory_reference(&self) -> bool {
        !self.directory.is_empty() && self.basename.is_empty() && self.extension.is_empty()
    }
}

/// Decompose an already-cleaned path.
///
/// The extension boundary follows [`Grammar::extension_dot`].
#[must_use]
pub fn decompose(cleaned: &str, grammar: Grammar) -> Decomposed {
    if cleaned.is_empty() {
        return Decomposed::default();
    }

    if cleaned.ends_with(SEPARATOR) {
        return Decomposed {
            directory: cleaned.to_string(),
            ..Decomposed::default()
        };
    }

    let split = cleaned.rfind(SEPARATOR).map_or(0, |idx| idx + 1);
    let (directory, name) = cleaned.split_at(split);

    let (basename, extension) = match grammar.extension_dot(name) {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => (name, ""),
    };

    Decomposed {
        directory: directory.to_string(),
        basename: basename.to_string(),
        extension: extension.to_string(),
    }
}
