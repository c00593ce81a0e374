//! Property-based tests for the cleaning pipeline.

use super::decompose::decompose;
use super::engine::PathEngine;
use super::grammar::Grammar;
use super::prefix::NetworkPrefix;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,6}",
        2 => "[a-z]{1,4}\\.[a-z]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just("...".to_string()),
        1 => Just(".hidden".to_string()),
        1 => Just(" .".to_string()),
        1 => Just(" ..".to_string()),
        1 => Just(" a".to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("//"), Just("\\/")]
}

fn leading_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("/"),
        Just("./"),
        Just("//"),
        Just("\\\\"),
        Just("smb://"),
        Just("sftp://"),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        leading_strategy(),
        prop::collection::vec((segment_strategy(), separator_strategy()), 0..16),
        prop::bool::ANY,
    )
        .prop_map(|(leading, parts, trailing)| {
            let mut path = leading.to_string();
            let count = parts.len();
            for (idx, (segment, separator)) in parts.into_iter().enumerate() {
                path.push_str(&segment);
                if idx + 1 < count || trailing {
                    path.push_str(separator);
                }
            }
            path
        })
}

fn grammar_strategy() -> impl Strategy<Value = Grammar> {
    prop_oneof![Just(Grammar::Posix), Just(Grammar::Windows)]
}

fn body_of(cleaned: &str) -> &str {
    match NetworkPrefix::detect(cleaned) {
        Some(prefix) => &cleaned[prefix.as_str().len()..],
        None => cleaned,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // clean(clean(p)) == clean(p)
    #[test]
    fn clean_idempotent(grammar in grammar_strategy(), raw in raw_path_strategy()) {
        let engine = PathEngine::new(grammar);
        let once = engine.clean(&raw);
        let twice = engine.clean(&once);
        prop_assert_eq!(once, twice);
    }

    // Only the Windows network prefix may carry a backslash
    #[test]
    fn cleaned_body_has_no_backslash(grammar in grammar_strategy(), raw in raw_path_strategy()) {
        let cleaned = PathEngine::new(grammar).clean(&raw);
        prop_assert!(!body_of(&cleaned).contains('\\'), "{}", cleaned);
    }

    // Separator runs are gone outside the prefix
    #[test]
    fn cleaned_body_has_no_separator_runs(grammar in grammar_strategy(), raw in raw_path_strategy()) {
        let cleaned = PathEngine::new(grammar).clean(&raw);
        prop_assert!(!body_of(&cleaned).contains("//"), "{}", cleaned);
    }

    // Rooted paths keep no `.` segments and no `..` after a normal name
    #[test]
    fn rooted_paths_fully_resolved(
        grammar in grammar_strategy(),
        parts in prop::collection::vec(segment_strategy(), 1..8),
    ) {
        let raw = format!("/{}", parts.join("/"));
        let cleaned = PathEngine::new(grammar).clean(&raw);
        let segments: Vec<&str> = cleaned.split('/').filter(|s| !s.is_empty()).collect();
        prop_assert!(!segments.contains(&"."), "{}", cleaned);
        let first_normal = segments.iter().position(|s| *s != "..");
        if let Some(first_normal) = first_normal {
            prop_assert!(!segments[first_normal..].contains(&".."), "{}", cleaned);
        }
    }

    // A cleaned file path reassembles from its parts
    #[test]
    fn decomposition_reassembles(grammar in grammar_strategy(), raw in raw_path_strategy()) {
        let cleaned = PathEngine::new(grammar).clean(&raw);
        let parts = decompose(&cleaned, grammar);
        prop_assert_eq!(parts.to_path(), cleaned);
    }

    // join never produces a doubled separator at the seam
    #[test]
    fn join_single_separator(
        first in prop::collection::vec("[a-z]{1,5}", 1..4),
        second in prop::collection::vec("[a-z]{1,5}", 1..4),
    ) {
        let engine = PathEngine::new(Grammar::Posix);
        let joined = engine.join(&format!("{}/", first.join("/")), &format!("/{}", second.join("/")));
        prop_assert_eq!(joined, format!("{}/{}", first.join("/"), second.join("/")));
    }
}
