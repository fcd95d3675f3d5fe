//! Property-based tests for natorder using proptest.

use std::cmp::Ordering;

use proptest::prelude::*;

use natorder::{natural_cmp, runs, Collation, Key, NaturalSortExt, Number};

// ============================================================================
// Test helpers
// ============================================================================

/// Strings mixing letters, digits, dots, and dashes, like real file names.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.\\-]{0,16}".prop_map(String::from)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// The comparator is antisymmetric: swapping arguments reverses the sign.
    #[test]
    fn comparison_is_antisymmetric(a in name_strategy(), b in name_strategy()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
    }

    /// Every value compares equal to itself.
    #[test]
    fn comparison_is_reflexive(a in name_strategy()) {
        prop_assert_eq!(natural_cmp(&a, &a), Ordering::Equal);
    }

    /// The comparator is pure: repeated calls on the same pair agree.
    #[test]
    fn comparison_is_deterministic(a in name_strategy(), b in name_strategy()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&a, &b));
    }

    /// Natural order is transitive, so it is safe to hand to sort_by.
    #[test]
    fn comparison_is_transitive(
        a in name_strategy(),
        b in name_strategy(),
        c in name_strategy(),
    ) {
        if natural_cmp(&a, &b) != Ordering::Greater
            && natural_cmp(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(natural_cmp(&a, &c), Ordering::Greater);
        }
    }

    /// Sorting an already-sorted sequence is a fixed point.
    #[test]
    fn sort_is_idempotent(mut items in prop::collection::vec(name_strategy(), 0..50)) {
        items.sort_natural();
        let once = items.clone();
        items.sort_natural();
        prop_assert_eq!(items, once);
    }

    /// A sorted sequence reports as sorted.
    #[test]
    fn sorted_sequence_is_sorted(mut items in prop::collection::vec(name_strategy(), 0..50)) {
        items.sort_natural();
        prop_assert!(items.is_sorted_natural());
    }

    /// Common-prefix strings with numeric suffixes sort by suffix value.
    #[test]
    fn numeric_suffixes_sort_by_value(mut suffixes in prop::collection::vec(0u32..100_000, 1..30)) {
        let mut names: Vec<String> = suffixes.iter().map(|n| format!("z{}.doc", n)).collect();
        names.sort_natural();

        suffixes.sort_unstable();
        let expected: Vec<String> = suffixes.iter().map(|n| format!("z{}.doc", n)).collect();
        // Duplicate suffixes collapse to identical names, so plain equality holds
        prop_assert_eq!(names, expected);
    }

    /// Zero-padding a digit run never changes its magnitude.
    #[test]
    fn leading_zeros_preserve_magnitude(n in 0u64..1_000_000, pad in 1usize..6) {
        let plain = format!("f{}", n);
        let padded = format!("f{}{}", "0".repeat(pad), n);
        prop_assert_eq!(natural_cmp(&plain, &padded), Ordering::Equal);
    }

    /// The empty string never sorts after anything.
    #[test]
    fn empty_string_sorts_first(s in name_strategy()) {
        prop_assert_ne!(natural_cmp("", &s), Ordering::Greater);
    }

    /// Number keys sort identically to the integers themselves.
    #[test]
    fn number_keys_match_integer_order(mut values in prop::collection::vec(any::<i64>(), 0..50)) {
        let mut keyed = values.clone();
        keyed.sort_natural_by_key(|v| Key::Number(Number::I64(*v)));

        values.sort_unstable();
        prop_assert_eq!(keyed, values);
    }

    /// Runs always concatenate back to the input and alternate in kind.
    #[test]
    fn runs_partition_the_input(s in "\\PC{0,24}") {
        let collected: Vec<_> = runs(&s).collect();

        let joined: String = collected.iter().map(|r| r.as_str()).collect();
        prop_assert_eq!(&joined, &s);

        for pair in collected.windows(2) {
            prop_assert_ne!(pair[0].is_digits(), pair[1].is_digits());
        }

        for run in &collected {
            prop_assert!(!run.as_str().is_empty());
        }
    }

    /// Case-insensitive collation agrees with comparing lowercased inputs.
    #[test]
    fn case_insensitive_matches_lowercase(a in name_strategy(), b in name_strategy()) {
        let collation = Collation::new().case_insensitive();
        prop_assert_eq!(
            natorder::natural_cmp_with(&collation, &a, &b),
            natural_cmp(&a.to_lowercase(), &b.to_lowercase())
        );
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn sorting_empty_slice_is_a_noop() {
    let mut items: Vec<String> = vec![];
    items.sort_natural();
    assert!(items.is_empty());
    assert!(items.is_sorted_natural());
}

#[test]
fn single_element_is_sorted() {
    let mut items = vec!["only1"];
    items.sort_natural();
    assert_eq!(items, vec!["only1"]);
    assert!(items.is_sorted_natural());
}
