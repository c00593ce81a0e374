//! Validity checking.
//!
//! Runs before any mutation of the input. A rejected path never reaches the
//! normalizer; `clean` turns the rejection into an empty string while
//! `try_clean` surfaces it as [`Error::InvalidPath`].

use crate::error::{Error, Result};
use crate::path::grammar::{has_drive, Grammar, INVALID_SEPARATOR, SEPARATOR};

/// Check `path` against the rules of `grammar`.
///
/// - Windows: rejects `* ? " < > |` and any segment equal to a reserved
///   device name, case-insensitively.
/// - POSIX: rejects a path that starts with a drive designator, which names a
///   volume on another system.
/// - Both: reject an embedded NUL.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] with the reason for rejection.
///
/// # Examples
///
/// ```
/// use lexpath::path::validate::check;
/// use lexpath::Grammar;
///
/// assert!(check("C:/dir/file.txt", Grammar::Windows).is_ok());
/// assert!(check("C:/dir/nul", Grammar::Windows).is_err());
/// assert!(check("C:/dir/file.txt", Grammar::Posix).is_err());
/// assert!(check("what?", Grammar::Posix).is_ok());
/// ```
pub fn check(path: &str, grammar: Grammar) -> Result<()> {
    let invalid = |reason: String| Error::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if let Some(c) = grammar.forbidden_char(path) {
        return Err(invalid(format!("contains forbidden character {c:?}")));
    }

    if grammar.rejects_drive_paths() && has_drive(path) {
        return Err(invalid(format!(
            "drive-letter paths are not resolvable under the {grammar} grammar"
        )));
    }

    if let Some(segment) = path
        .split([SEPARATOR, INVALID_SEPARATOR])
        .find(|segment| grammar.is_reserved_name(segment))
    {
        return Err(invalid(format!(
            "reserved device name '{}'",
            segment.to_ascii_uppercase()
        )));
    }

    Ok(())
}

/// Whether `path` passes [`check`].
#[must_use]
pub fn is_valid(path: &str, grammar: Grammar) -> bool {
    check(path, grammar).is_ok()
}
