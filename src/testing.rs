//! Testing utilities for refined types
//!
//! Assertion macros for construction results and, behind the `proptest`
//! feature, strategies that only produce values satisfying an invariant set.
//!
//! # Examples
//!
//! ```rust
//! use invar::{assert_holds, assert_violations, PositiveInt};
//!
//! let n = assert_holds!(PositiveInt::try_new(3));
//! assert_eq!(n.get(), 3);
//!
//! assert_violations!(PositiveInt::try_new(0), ["number must be positive"]);
//! ```

/// Assert that a construction result is `Ok`, evaluating to the constructed
/// value.
///
/// Panics with the violated invariants otherwise.
///
/// # Example
///
/// ```rust
/// use invar::{assert_holds, NonEmptyString};
///
/// let s = assert_holds!(NonEmptyString::try_new("hi"));
/// assert_eq!(s.as_str(), "hi");
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(violations) => {
                panic!("Expected invariants to hold, got: {}", violations);
            }
        }
    };
}

/// Assert that a construction result failed with exactly these invariant
/// names, in this order.
///
/// # Example
///
/// ```rust
/// use invar::{assert_violations, NonEmptyVec};
///
/// assert_violations!(NonEmptyVec::<u8>::try_new(vec![]), ["slice must be non-empty"]);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($result:expr, $expected:expr) => {
        match $result {
            ::std::result::Result::Err(violations) => {
                let expected = $expected;
                let expected: &[&str] = &expected[..];
                assert_eq!($crate::Violations::names(&violations), expected);
            }
            ::std::result::Result::Ok(value) => {
                panic!(
                    "Expected violations {:?}, got Ok: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::holder_strategy;

#[cfg(feature = "proptest")]
mod strategies {
    use std::fmt;

    use proptest::prelude::*;

    use crate::{InvariantHolder, InvariantSet};

    /// Strategy producing holders from `values`, keeping only candidates that
    /// satisfy `invariants`.
    ///
    /// Rejections count against proptest's local-reject limit, so `values`
    /// should mostly generate valid candidates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use invar::{testing::holder_strategy, Invariant, PositiveInt};
    /// use proptest::prelude::*;
    ///
    /// static POSITIVE: [Invariant<i64>; 1] = PositiveInt::INVARIANTS;
    ///
    /// proptest!(|(n in holder_strategy(-10i64..1000, &POSITIVE))| {
    ///     prop_assert!(*n.value() > 0);
    /// });
    /// ```
    pub fn holder_strategy<T, S>(
        values: S,
        invariants: &'static InvariantSet<T>,
    ) -> impl Strategy<Value = InvariantHolder<T>>
    where
        T: fmt::Debug + 'static,
        S: Strategy<Value = T>,
    {
        values.prop_filter_map("candidate violated its invariants", move |value| {
            InvariantHolder::try_new(value, invariants).ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Invariant, InvariantHolder, NonEmptyString, PositiveInt};

    static TWO: [Invariant<i32>; 2] = [
        Invariant::new("must be positive", |v: &i32| *v > 0),
        Invariant::new("must be even", |v: &i32| v % 2 == 0),
    ];

    #[test]
    fn assert_holds_returns_value() {
        let h = assert_holds!(InvariantHolder::try_new(2, &TWO));
        assert_eq!(*h.value(), 2);
    }

    #[test]
    fn assert_violations_matches_order() {
        assert_violations!(
            InvariantHolder::try_new(-1, &TWO),
            ["must be positive", "must be even"]
        );
    }

    #[test]
    fn assert_violations_accepts_vec() {
        assert_violations!(NonEmptyString::try_new(""), vec!["string must be non-empty"]);
    }

    #[test]
    #[should_panic(expected = "Expected invariants to hold")]
    fn assert_holds_panics_on_violation() {
        assert_holds!(PositiveInt::try_new(0));
    }

    #[test]
    #[should_panic(expected = "Expected violations")]
    fn assert_violations_panics_on_success() {
        assert_violations!(PositiveInt::try_new(1), ["number must be positive"]);
    }

    #[test]
    #[should_panic]
    fn assert_violations_panics_on_wrong_names() {
        assert_violations!(InvariantHolder::try_new(-2, &TWO), ["must be even"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::testing::holder_strategy;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn holder_strategy_only_yields_valid_values(
                h in holder_strategy(-20i32..20, &TWO)
            ) {
                prop_assert!(TWO.iter().all(|i| i.holds(h.value())));
            }
        }
    }
}
