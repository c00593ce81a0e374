//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, GrammarChoice, OutputFormat};
use proptest::prelude::*;

fn grammar_strategy() -> impl Strategy<Value = GrammarChoice> {
    prop_oneof![
        Just(GrammarChoice::Native),
        Just(GrammarChoice::Windows),
        Just(GrammarChoice::Posix),
    ]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(grammar_strategy()),
        prop::option::of(prop::collection::vec("\\.?[a-z]{1,6}", 0..5)),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(grammar, ignored_entries, output_format)| Config {
            grammar,
            ignored_entries,
            output_format,
        })
}

proptest! {
    // Merging an empty config changes nothing
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // A set scalar in the source always wins
    #[test]
    fn merge_source_scalars_win(target in config_strategy(), source in config_strategy()) {
        let mut merged = target.clone();
        ConfigMerger::merge_into(&mut merged, &source);
        prop_assert_eq!(merged.grammar, source.grammar.or(target.grammar));
        prop_assert_eq!(merged.output_format, source.output_format.or(target.output_format));
    }

    // Every ignored entry from either side survives the merge
    #[test]
    fn merge_keeps_all_ignored_entries(target in config_strategy(), source in config_strategy()) {
        let mut merged = target.clone();
        ConfigMerger::merge_into(&mut merged, &source);
        let merged_entries = merged.ignored_entries.unwrap_or_default();
        for entry in target.ignored_entries.iter().chain(source.ignored_entries.iter()).flatten() {
            prop_assert!(merged_entries.contains(entry));
        }
    }

    // Serializing to YAML and back preserves a config
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
