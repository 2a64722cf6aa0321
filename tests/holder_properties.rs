//! Property-based tests for the invariant holder construction protocol

use std::panic;

use invar::invariant::violations;
use invar::{Invariant, InvariantHolder};
use proptest::prelude::*;

static NUMBER_RULES: [Invariant<i32>; 3] = [
    Invariant::new("must be positive", |v: &i32| *v > 0),
    Invariant::new("must be even", |v: &i32| v % 2 == 0),
    Invariant::new("must be below 1000", |v: &i32| *v < 1000),
];

static LIST_RULES: [Invariant<Vec<u8>>; 4] = [
    Invariant::new("list must be non-empty", |v: &Vec<u8>| !v.is_empty()),
    Invariant::new("list must be shorter than 10", |v: &Vec<u8>| v.len() < 10),
    Invariant::new("list must be sorted", |v: &Vec<u8>| v.windows(2).all(|w| w[0] <= w[1])),
    Invariant::new("list must not contain zero", |v: &Vec<u8>| !v.contains(&0)),
];

fn expected_names<T>(set: &[Invariant<T>], value: &T) -> Vec<&'static str> {
    set.iter()
        .filter(|invariant| !invariant.holds(value))
        .map(|invariant| invariant.name())
        .collect()
}

proptest! {
    #[test]
    fn prop_try_new_succeeds_iff_all_hold(v in any::<i32>()) {
        let all_hold = NUMBER_RULES.iter().all(|i| i.holds(&v));
        prop_assert_eq!(InvariantHolder::try_new(v, &NUMBER_RULES).is_ok(), all_hold);
    }

    #[test]
    fn prop_failure_names_exactly_the_violated_in_order(v in any::<i32>()) {
        let expected = expected_names(&NUMBER_RULES, &v);
        match InvariantHolder::try_new(v, &NUMBER_RULES) {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(err) => prop_assert_eq!(err.names(), expected.as_slice()),
        }
    }

    #[test]
    fn prop_list_failures_are_exhaustive(v in prop::collection::vec(any::<u8>(), 0..20)) {
        let expected = expected_names(&LIST_RULES, &v);
        prop_assert_eq!(violations(&LIST_RULES, &v), expected.clone());

        match InvariantHolder::try_new(v, &LIST_RULES) {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(err) => prop_assert_eq!(err.into_names(), expected),
        }
    }

    #[test]
    fn prop_value_round_trips(v in prop::collection::vec(1u8..=255, 1..10)) {
        let mut sorted = v;
        sorted.sort();
        let holder = InvariantHolder::try_new(sorted.clone(), &LIST_RULES).unwrap();
        prop_assert_eq!(holder.value(), &sorted);
        prop_assert_eq!(holder.into_inner(), sorted);
    }

    #[test]
    fn prop_new_panics_iff_try_new_fails(v in -50i32..50) {
        let trusted = panic::catch_unwind(|| InvariantHolder::new(v, &NUMBER_RULES));
        let checked = InvariantHolder::try_new(v, &NUMBER_RULES);

        prop_assert_eq!(trusted.is_err(), checked.is_err());
        if let (Ok(a), Ok(b)) = (trusted, checked) {
            prop_assert_eq!(a, b);
        }
    }
}
