//! Configuration merging and precedence handling.
//!
//! Scalars are overwritten by higher-precedence sources; `ignored_entries`
//! accumulate across sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use lexpath::config::{Config, ConfigMerger, GrammarChoice};
///
/// let low = Config { grammar: Some(GrammarChoice::Windows), ..Default::default() };
/// let high = Config { grammar: Some(GrammarChoice::Posix), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.grammar, Some(GrammarChoice::Posix));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!(
                "merging configuration from {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `grammar`, `output_format`: source overwrites if set
    /// - `ignored_entries`: ordered union, earlier entries first, no duplicates
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.grammar.is_some() {
            target.grammar = source.grammar;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_ignored) = source.ignored_entries {
            match &mut target.ignored_entries {
                Some(target_ignored) => {
                    for entry in source_ignored {
                        if !target_ignored.contains(entry) {
                            target_ignored.push(entry.clone());
                        }
                    }
                }
                None => {
                    target.ignored_entries.clone_from(&source.ignored_entries);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{GrammarChoice, OutputFormat};
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("test-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    fn entries(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_merge_into_empty() {
        let mut target = Config::default();
        let source = Config {
            grammar: Some(GrammarChoice::Windows),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target, source);
    }

    #[test]
    fn test_unset_fields_do_not_overwrite() {
        let mut target = Config {
            grammar: Some(GrammarChoice::Posix),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.grammar, Some(GrammarChoice::Posix));
    }

    #[test]
    fn test_ignored_entries_accumulate() {
        let mut target = Config {
            ignored_entries: entries(&[".svn", ".git"]),
            ..Default::default()
        };
        let source = Config {
            ignored_entries: entries(&[".git", "node_modules"]),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(
            target.ignored_entries,
            entries(&[".svn", ".git", "node_modules"])
        );
    }

    #[test]
    fn test_merge_respects_order() {
        let sources = vec![
            make_source(
                1,
                Config {
                    grammar: Some(GrammarChoice::Windows),
                    ignored_entries: entries(&[".svn"]),
                    ..Default::default()
                },
            ),
            make_source(
                2,
                Config {
                    grammar: Some(GrammarChoice::Posix),
                    ..Default::default()
                },
            ),
            make_source(
                3,
                Config {
                    ignored_entries: entries(&[".hg"]),
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            ),
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.grammar, Some(GrammarChoice::Posix));
        assert_eq!(merged.ignored_entries, entries(&[".svn", ".hg"]));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_nothing() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
