//! End-to-end scenarios for the shipped refined types and custom sets

use invar::prelude::*;
use invar::{assert_holds, assert_violations};

#[test]
fn non_empty_vec_rejects_empty() {
    assert_violations!(NonEmptyVec::<i32>::try_new(vec![]), ["slice must be non-empty"]);
}

#[test]
fn non_empty_vec_accepts_one_element() {
    let nev = assert_holds!(NonEmptyVec::try_new(vec![1]));
    assert_eq!(nev.as_slice(), &[1]);
}

#[test]
fn non_empty_string() {
    assert_violations!(NonEmptyString::try_new(""), ["string must be non-empty"]);
    let s = assert_holds!(NonEmptyString::try_new("a"));
    assert_eq!(s.as_str(), "a");
}

#[test]
fn non_null_ref() {
    assert_violations!(NonNullRef::<u32>::try_new(None), ["pointer must not be nil"]);

    let value = 7u32;
    let r = assert_holds!(NonNullRef::try_new(Some(&value)));
    assert_eq!(*r.get(), 7);
}

#[test]
fn positive_int() {
    assert_violations!(PositiveInt::try_new(0), ["number must be positive"]);
    assert_violations!(PositiveInt::try_new(-5), ["number must be positive"]);
    assert_eq!(assert_holds!(PositiveInt::try_new(3)).get(), 3);
}

static HANDLE: [Invariant<String>; 2] = [
    Invariant::new("handle must be non-empty", |s: &String| !s.is_empty()),
    Invariant::new("handle must start with '@'", |s: &String| s.starts_with('@')),
];

#[test]
fn multi_invariant_set_reports_every_violation_in_order() {
    assert_violations!(
        InvariantHolder::try_new(String::new(), &HANDLE),
        ["handle must be non-empty", "handle must start with '@'"]
    );
    assert_violations!(
        InvariantHolder::try_new("plain".to_string(), &HANDLE),
        ["handle must start with '@'"]
    );
    assert_holds!(InvariantHolder::try_new("@ferris".to_string(), &HANDLE));
}

#[test]
#[should_panic(expected = "invariants violated: handle must be non-empty; handle must start with '@'")]
fn trusted_construction_panics_with_every_name() {
    InvariantHolder::new(String::new(), &HANDLE);
}

/// A refined type defined outside the crate, following the shipped pattern.
#[derive(Debug, Clone, PartialEq)]
struct Probability(InvariantHolder<f64>);

impl Probability {
    const INVARIANTS: [Invariant<f64>; 2] = [
        Invariant::new("probability must not be below 0", |p: &f64| *p >= 0.0),
        Invariant::new("probability must not exceed 1", |p: &f64| *p <= 1.0),
    ];

    fn try_new(p: f64) -> Result<Self, Violations> {
        InvariantHolder::try_new(p, &Self::INVARIANTS).map(Self)
    }

    fn value(&self) -> f64 {
        *self.0.value()
    }
}

#[test]
fn custom_refined_type_generalizes() {
    assert_eq!(Probability::try_new(0.5).unwrap().value(), 0.5);
    assert_violations!(Probability::try_new(1.5), ["probability must not exceed 1"]);
    // NaN fails both comparisons.
    assert_violations!(
        Probability::try_new(f64::NAN),
        ["probability must not be below 0", "probability must not exceed 1"]
    );
}

#[test]
fn accumulating_across_fields() {
    let result = NonEmptyString::validate("")
        .with_field("name")
        .map_err(|e| vec![e])
        .and(PositiveInt::validate(-1).with_field("age").map_err(|e| vec![e]))
        .and(NonEmptyVec::<String>::validate(vec![]).with_field("tags").map_err(|e| vec![e]));

    match result {
        Validation::Failure(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec!["name", "age", "tags"]);
            assert_eq!(errors[2].error.names(), &["slice must be non-empty"]);
        }
        Validation::Success(_) => panic!("Expected failure"),
    }
}

#[test]
fn accumulating_success_yields_all_values() {
    let result = NonEmptyString::validate("ann").and(PositiveInt::validate(30));
    let (name, age) = result.into_result().unwrap();
    assert_eq!(name.as_str(), "ann");
    assert_eq!(age.get(), 30);
}
