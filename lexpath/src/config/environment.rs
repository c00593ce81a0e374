//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! - `LEXPATH_GRAMMAR`: `native`, `windows` or `posix`
//! - `LEXPATH_IGNORED_ENTRIES`: comma-separated names, added to the list
//! - `LEXPATH_OUTPUT_FORMAT`: `text` or `json`

use crate::config::schema::{Config, GrammarChoice, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Grammar override variable.
pub const GRAMMAR_VAR: &str = "LEXPATH_GRAMMAR";

/// Ignored-entries override variable.
pub const IGNORED_ENTRIES_VAR: &str = "LEXPATH_IGNORED_ENTRIES";

/// Output format override variable.
pub const OUTPUT_FORMAT_VAR: &str = "LEXPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use lexpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(GRAMMAR_VAR) {
            config.grammar = Some(value.parse::<GrammarChoice>().map_err(|message| {
                Error::Validation {
                    field: GRAMMAR_VAR.into(),
                    message,
                }
            })?);
        }

        if let Some(value) = Self::var(IGNORED_ENTRIES_VAR) {
            let names = Self::parse_list(&value);
            let target = config.ignored_entries.get_or_insert_with(Vec::new);
            for name in names {
                if !target.contains(&name) {
                    target.push(name);
                }
            }
        }

        if let Some(value) = Self::var(OUTPUT_FORMAT_VAR) {
            config.output_format = Some(value.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_VAR.into(),
                    message,
                }
            })?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Split a comma-separated list, trimming items and dropping empty ones.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
