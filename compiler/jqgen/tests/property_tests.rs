//! Property-based tests for the generator.
//!
//! 1. Determinism: the output does not depend on table order.
//! 2. Non-collision: numerals that happen to equal an operator ordinal are
//!    never symbolized; only `op` fields are.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use jqgen::generate;
use proptest::prelude::*;

/// Small jq programs paired with unique names.
fn table_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let source = prop_oneof![
        (0u8..40).prop_map(|n| format!("{n}")),
        (0u8..40, 0u8..40).prop_map(|(a, b)| format!("{a} + {b}")),
        (0u8..40).prop_map(|n| format!(".[{n}] // {n}")),
        Just(". as $x | $x".to_string()),
        Just("def f: .; f | f".to_string()),
        Just("[.[] | select(. > 2)]".to_string()),
    ];
    prop::collection::btree_map("[a-z_]{1,8}", source, 1..8)
        .prop_map(|map| map.into_iter().collect())
}

fn borrowed(table: &[(String, String)]) -> Vec<(&str, &str)> {
    table
        .iter()
        .map(|(name, source)| (name.as_str(), source.as_str()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_ignores_table_order(
        (table, shuffled) in table_strategy()
            .prop_flat_map(|table| (Just(table.clone()), Just(table).prop_shuffle()))
    ) {
        let first = generate(&borrowed(&table)).expect("generates");
        let second = generate(&borrowed(&shuffled)).expect("generates");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn numbers_are_never_symbolized(n in 0u8..=30) {
        let source = format!(".[{n}] + {n}");
        let text = generate(&[("f", source.as_str())]).expect("generates");

        let number = format!("TermKind::Number({n}.0)");
        prop_assert!(text.contains(&number), "missing `{}` in\n{}", number, text);
        prop_assert!(text.contains("op: Operator::ADD"));
        prop_assert_eq!(text.matches("Operator::").count(), 1);
    }
}
