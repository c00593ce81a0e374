//! Network prefix extraction and separator canonicalization.

use std::fmt;

use crate::path::grammar::{Grammar, INVALID_SEPARATOR, SEPARATOR};

/// A leading marker naming a remote resource rather than a local path.
///
/// At most one prefix applies to a path. Detection tries the scheme prefixes
/// before the bare double-separator ones, since `sftp://` would otherwise be
/// read as an ordinary segment followed by a separator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkPrefix {
    /// `\\`
    UncBackslash,
    /// `//`
    UncForward,
    /// `smb://`
    Smb,
    /// `sftp://`
    Sftp,
}

impl NetworkPrefix {
    /// Detect the prefix at the start of `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::path::prefix::NetworkPrefix;
    ///
    /// assert_eq!(NetworkPrefix::detect("sftp://host/x"), Some(NetworkPrefix::Sftp));
    /// assert_eq!(NetworkPrefix::detect("\\\\host\\x"), Some(NetworkPrefix::UncBackslash));
    /// assert_eq!(NetworkPrefix::detect("/usr"), None);
    /// ```
    #[must_use]
    pub fn detect(path: &str) -> Option<Self> {
        [Self::Smb, Self::Sftp, Self::UncBackslash, Self::UncForward]
            .into_iter()
            .find(|prefix| path.starts_with(prefix.as_str()))
    }

    /// The literal spelling of this prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UncBackslash => "\\\\",
            Self::UncForward => "//",
            Self::Smb => "smb://",
            Self::Sftp => "sftp://",
        }
    }

    /// Whether this is one of the two-character separator prefixes.
    #[must_use]
    pub const fn is_unc(self) -> bool {
        matches!(self, Self::UncBackslash | Self::UncForward)
    }

    /// The spelling `grammar` uses for this kind of prefix.
    ///
    /// Windows spells every network path `\\`. POSIX spells the UNC form `//`
    /// and keeps the URL schemes.
    #[must_use]
    pub const fn translate(self, grammar: Grammar) -> Self {
        match (grammar, self) {
            (Grammar::Windows, _) => Self::UncBackslash,
            (Grammar::Posix, Self::UncBackslash) => Self::UncForward,
            (Grammar::Posix, other) => other,
        }
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path split into its translated network prefix and canonical body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The prefix in the grammar's spelling, if the path had one.
    pub prefix: Option<NetworkPrefix>,
    /// The rest of the path with every separator canonical.
    pub body: String,
}

impl Normalized {
    /// Reassemble prefix and `body`.
    #[must_use]
    pub fn join_body(&self, body: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}{body}"),
            None => body.to_string(),
        }
    }
}

/// Split off the network prefix of `path` and canonicalize separators.
///
/// A UNC prefix absorbs any separator characters that immediately follow it,
/// so `////host` has the body `host`.
///
/// # Examples
///
/// ```
/// use lexpath::path::prefix::{normalize, NetworkPrefix};
/// use lexpath::Grammar;
///
/// let n = normalize("smb://server\\share", Grammar::Windows);
/// assert_eq!(n.prefix, Some(NetworkPrefix::UncBackslash));
/// assert_eq!(n.body, "server/share");
///
/// let n = normalize("\\\\\\server\\share", Grammar::Posix);
/// assert_eq!(n.prefix, Some(NetworkPrefix::UncForward));
/// assert_eq!(n.body, "server/share");
/// ```
#[must_use]
pub fn normalize(path: &str, grammar: Grammar) -> Normalized {
    let Some(detected) = NetworkPrefix::detect(path) else {
        return Normalized {
            prefix: None,
            body: canonical_separators(path),
        };
    };

    let mut rest = &path[detected.as_str().len()..];
    if detected.is_unc() {
        rest = rest.trim_start_matches([SEPARATOR, INVALID_SEPARATOR]);
    }

    let prefix = detected.translate(grammar);
    log::trace!("network prefix {detected} read as {prefix} under {grammar}");

    Normalized {
        prefix: Some(prefix),
        body: canonical_separators(rest),
    }
}

fn canonical_separators(path: &str) -> String {
    path.replace(INVALID_SEPARATOR, &SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_exclusive() {
        assert_eq!(NetworkPrefix::detect("//host"), Some(NetworkPrefix::UncForward));
        assert_eq!(NetworkPrefix::detect("smb://host"), Some(NetworkPrefix::Smb));
        assert_eq!(NetworkPrefix::detect("sftp:/host"), None);
        assert_eq!(NetworkPrefix::detect("\\host"), None);
        assert_eq!(NetworkPrefix::detect(""), None);
    }

    #[test]
    fn test_translate_windows() {
        for prefix in [
            NetworkPrefix::UncBackslash,
            NetworkPrefix::UncForward,
            NetworkPrefix::Smb,
            NetworkPrefix::Sftp,
        ] {
            assert_eq!(prefix.translate(Grammar::Windows), NetworkPrefix::UncBackslash);
        }
    }

    #[test]
    fn test_translate_posix() {
        assert_eq!(
            NetworkPrefix::UncBackslash.translate(Grammar::Posix),
            NetworkPrefix::UncForward
        );
        assert_eq!(NetworkPrefix::Smb.translate(Grammar::Posix), NetworkPrefix::Smb);
        assert_eq!(NetworkPrefix::Sftp.translate(Grammar::Posix), NetworkPrefix::Sftp);
    }

    #[test]
    fn test_unc_run_collapses() {
        let n = normalize("////host/share", Grammar::Posix);
        assert_eq!(n.prefix, Some(NetworkPrefix::UncForward));
        assert_eq!(n.body, "host/share");

        let n = normalize("\\\\/\\host", Grammar::Windows);
        assert_eq!(n.prefix, Some(NetworkPrefix::UncBackslash));
        assert_eq!(n.body, "host");
    }

    #[test]
    fn test_plain_path_separators() {
        let n = normalize("C:\\Users\\me/docs", Grammar::Windows);
        assert_eq!(n.prefix, None);
        assert_eq!(n.body, "C:/Users/me/docs");
    }

    #[test]
    fn test_join_body() {
        let n = normalize("sftp://host/a", Grammar::Posix);
        assert_eq!(n.join_body("host/b"), "sftp://host/b");
        let n = normalize("a", Grammar::Posix);
        assert_eq!(n.join_body("b"), "b");
    }
}
