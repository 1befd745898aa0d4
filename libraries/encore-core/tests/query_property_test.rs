//! Property-based tests for comparison queries and name matching

use encore_core::{Comparison, LibraryEntry, Predicate, Track, TrackId};
use proptest::prelude::*;
use std::time::Duration;

proptest! {
    /// Property: every well-formed query parses and agrees with integer ordering
    #[test]
    fn well_formed_queries_agree_with_ordering(bound in -5000i64..5000, value in -5000i64..5000) {
        prop_assert_eq!(Comparison::parse(&format!("<{}", bound)).unwrap().test(value), value < bound);
        prop_assert_eq!(Comparison::parse(&format!(">{}", bound)).unwrap().test(value), value > bound);
        prop_assert_eq!(Comparison::parse(&bound.to_string()).unwrap().test(value), value == bound);
    }

    /// Property: display output parses back to the same comparison
    #[test]
    fn display_is_parseable(bound in any::<i32>(), form in 0u8..3) {
        let bound = i64::from(bound);
        let query = match form {
            0 => Comparison::LessThan(bound),
            1 => Comparison::GreaterThan(bound),
            _ => Comparison::Equal(bound),
        };
        prop_assert_eq!(Comparison::parse(&query.to_string()).unwrap(), query);
    }

    /// Property: alphabetic garbage never parses
    #[test]
    fn alphabetic_queries_fail(query in "[a-zA-Z]{1,8}") {
        prop_assert!(Comparison::parse(&query).is_err());
    }

    /// Property: any prefix of a name matches it, whatever the casing
    #[test]
    fn every_prefix_matches(name in "[A-Za-z ]{1,20}", cut in 0usize..20) {
        let track = Track::new(name.clone(), Duration::from_secs(1));
        let entry = LibraryEntry::Track { id: TrackId::new(0), track: &track };
        let prefix: String = name.chars().take(cut).collect();

        prop_assert!(entry.matches(&Predicate::Name(prefix.to_uppercase())));
        prop_assert!(entry.matches(&Predicate::Name(prefix.to_lowercase())));
    }
}
