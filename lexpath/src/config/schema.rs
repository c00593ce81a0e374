//! Configuration schema definitions.
//!
//! Every field is optional so that partial files from several sources can be
//! layered on top of each other; see [`ConfigMerger`](super::ConfigMerger).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::path::Grammar;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use lexpath::config::{Config, GrammarChoice};
///
/// let config: Config = serde_yaml::from_str(
///     "grammar: windows\nignored_entries: [.git, .hg]\n",
/// ).unwrap();
/// assert_eq!(config.grammar, Some(GrammarChoice::Windows));
/// assert_eq!(config.ignored_entries.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which path grammar to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<GrammarChoice>,

    /// Names skipped by directory enumeration, besides `.` and `..`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_entries: Option<Vec<String>>,

    /// Output format for CLI commands that print structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

/// Grammar selection as written in configuration.
///
/// `native` defers to the host operating system at resolution time.
///
/// # Examples
///
/// ```
/// use lexpath::config::GrammarChoice;
/// use lexpath::Grammar;
///
/// assert_eq!(GrammarChoice::Posix.resolve(), Grammar::Posix);
/// assert_eq!(GrammarChoice::Native.resolve(), Grammar::native());
/// assert_eq!("windows".parse::<GrammarChoice>().unwrap(), GrammarChoice::Windows);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrammarChoice {
    /// The grammar of the host.
    #[default]
    Native,
    /// Windows rules regardless of host.
    Windows,
    /// POSIX rules regardless of host.
    Posix,
}

impl GrammarChoice {
    /// The concrete grammar this choice selects.
    #[must_use]
    pub const fn resolve(self) -> Grammar {
        match self {
            Self::Native => Grammar::native(),
            Self::Windows => Grammar::Windows,
            Self::Posix => Grammar::Posix,
        }
    }
}

impl From<Grammar> for GrammarChoice {
    fn from(grammar: Grammar) -> Self {
        match grammar {
            Grammar::Windows => Self::Windows,
            Grammar::Posix => Self::Posix,
        }
    }
}

impl fmt::Display for GrammarChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

impl FromStr for GrammarChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "windows" => Ok(Self::Windows),
            "posix" => Ok(Self::Posix),
            other => Err(format!(
                "unknown grammar '{other}' (expected native, windows or posix)"
            )),
        }
    }
}

/// Output format selection.
///
/// # Examples
///
/// ```
/// use lexpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line.
    #[default]
    Text,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected text or json)"
            )),
        }
    }
}
