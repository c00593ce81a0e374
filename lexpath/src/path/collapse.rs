//! Redundancy collapsing: spurious colons, repeated separators, trailing dots.

use crate::path::grammar::{Grammar, SEPARATOR};

/// Collapse redundant characters in a prefix-free, separator-canonical body.
///
/// - Windows only: every colon after the first is deleted. Two colons mean
///   one spurious token, not two drives.
/// - Runs of separators become a single separator.
/// - Trailing dots are dropped from the last segment, unless that segment is
///   exactly `.` or `..`: those are left for the resolver. A last segment of
///   three or more dots is dropped entirely.
///
/// # Examples
///
/// ```
/// use lexpath::path::collapse::collapse;
/// use lexpath::Grammar;
///
/// assert_eq!(collapse("C::/a//b.", Grammar::Windows), "C:/a/b");
/// assert_eq!(collapse("a///b/..", Grammar::Posix), "a/b/..");
/// assert_eq!(collapse("file...", Grammar::Posix), "file");
/// ```
#[must_use]
pub fn collapse(body: &str, grammar: Grammar) -> String {
    let mut out = String::with_capacity(body.len());
    let mut seen_colon = false;
    let mut previous_was_separator = false;

    for c in body.chars() {
        if c == ':' && grammar.collapses_colons() {
            if seen_colon {
                continue;
            }
            seen_colon = true;
        }
        if c == SEPARATOR {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        out.push(c);
    }

    strip_trailing_dots(&mut out);
    out
}

fn strip_trailing_dots(path: &mut String) {
    let last = path.rsplit(SEPARATOR).next().unwrap_or_default();
    if last == "." || last == ".." {
        return;
    }
    let trimmed = path.trim_end_matches('.').len();
    path.truncate(trimmed);
}
