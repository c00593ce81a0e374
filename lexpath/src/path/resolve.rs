//! Lexical resolution of `.` and `..` segments.
//!
//! Resolution is purely textual: no component is looked up on disk, so a `..`
//! after a symlinked directory cancels the link name rather than its target.
//!
//! The resolver makes one forward pass over the segments and keeps an output
//! stack. Each rule only looks at the top of the stack, which is exactly the
//! segment left of the current one after all earlier eliminations, so chains
//! such as `a/b/../../c` or `./../x` reach the same fixed point a
//! rescan-after-every-deletion would.

use crate::path::grammar::{is_drive_designator, Grammar, SEPARATOR};

/// Classification of one segment during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// `.`
    Current,
    /// `..`
    Parent,
    /// Anything else.
    Normal(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a segment.
    #[must_use]
    pub fn classify(text: &'a str) -> Self {
        match text {
            "." => Self::Current,
            ".." => Self::Parent,
            other => Self::Normal(other),
        }
    }
}

/// Eliminate `.` and `..` from a collapsed, prefix-free body.
///
/// Rules:
/// - `.` is dropped, except that the POSIX grammar keeps a `.` that starts a
///   relative path, so `./tool` keeps meaning "relative to here".
/// - `..` cancels the segment before it, unless there is none, it is another
///   `..`, or it is a kept leading `.`; then the `..` is kept.
/// - `..` directly after a leading drive designator is dropped and the drive
///   stays: nothing escapes a drive root.
/// - A trailing separator survives, and a path whose final segment was
///   eliminated ends in a separator. A relative path that resolves to nothing
///   becomes empty; a rooted one becomes `/`.
///
/// # Examples
///
/// ```
/// use lexpath::path::resolve::resolve;
/// use lexpath::Grammar;
///
/// assert_eq!(resolve("a/b/../c", Grammar::Posix), "a/c");
/// assert_eq!(resolve("a/../../b", Grammar::Posix), "../b");
/// assert_eq!(resolve("./x/./y", Grammar::Posix), "./x/y");
/// assert_eq!(resolve("./x/./y", Grammar::Windows), "x/y");
/// assert_eq!(resolve("C:/../Windows", Grammar::Windows), "C:/Windows");
/// assert_eq!(resolve("a/b/..", Grammar::Posix), "a/");
/// ```
#[must_use]
pub fn resolve(body: &str, grammar: Grammar) -> String {
    let rooted = body.starts_with(SEPARATOR);
    let inner = body.strip_prefix(SEPARATOR).unwrap_or(body);

    let mut kept: Vec<&str> = Vec::new();
    let trailing = inner.ends_with(SEPARATOR);
    let mut consumed_last = false;

    for text in inner.split(SEPARATOR).filter(|s| !s.is_empty()) {
        consumed_last = match Segment::classify(text) {
            Segment::Current => {
                if kept.is_empty() && !rooted && grammar.keeps_leading_current_dir() {
                    kept.push(text);
                    false
                } else {
                    true
                }
            }
            Segment::Parent => match kept.last() {
                Some(top) if !rooted && kept.len() == 1 && is_drive_designator(top) => true,
                Some(&top) if top != ".." && top != "." => {
                    kept.pop();
                    true
                }
                _ => {
                    kept.push(text);
                    false
                }
            },
            Segment::Normal(name) => {
                kept.push(name);
                false
            }
        };
    }

    let mut out = String::with_capacity(body.len());
    if rooted {
        out.push(SEPARATOR);
    }
    if !kept.is_empty() {
        out.push_str(&kept.join("/"));
        if trailing || consumed_last {
            out.push(SEPARATOR);
        }
    }
    out
}
