//! Validation integration for invariant holders
//!
//! Lets several constructions be checked together, reporting every violated
//! invariant across all of them.
//!
//! # Example
//!
//! ```rust
//! use invar::{Invariant, InvariantHolder, Validation, ValidationFieldExt};
//!
//! static NAME: [Invariant<String>; 1] =
//!     [Invariant::new("name must be non-empty", |s: &String| !s.is_empty())];
//! static AGE: [Invariant<u32>; 1] = [Invariant::new("age must be at most 150", |a: &u32| *a <= 150)];
//!
//! let result = InvariantHolder::validate(String::new(), &NAME)
//!     .with_field("name")
//!     .map_err(|e| vec![e])
//!     .and(InvariantHolder::validate(200, &AGE).with_field("age").map_err(|e| vec![e]));
//!
//! match result {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors[0].to_string(), "name: invariants violated: name must be non-empty");
//!         assert_eq!(errors[1].field, "age");
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use std::fmt;

use super::InvariantHolder;
use crate::invariant::InvariantSet;
use crate::violations::Violations;
use crate::Validation;

impl<T> InvariantHolder<T> {
    /// Construct a holder from untrusted input, returning a [`Validation`].
    ///
    /// Same checks as [`try_new`](Self::try_new); the `Validation` form
    /// accumulates with other validations through [`Validation::and`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use invar::{Invariant, InvariantHolder};
    ///
    /// static ODD: [Invariant<i32>; 1] = [Invariant::new("value must be odd", |v: &i32| v % 2 != 0)];
    ///
    /// assert!(InvariantHolder::validate(3, &ODD).is_success());
    /// assert!(InvariantHolder::validate(4, &ODD).is_failure());
    /// ```
    pub fn validate(value: T, invariants: &InvariantSet<T>) -> Validation<Self, Violations> {
        Validation::from_result(Self::try_new(value, invariants))
    }
}

/// Error with field context
///
/// Labels a failure with the field it came from.
///
/// # Example
///
/// ```rust
/// use invar::FieldError;
///
/// let err = FieldError {
///     field: "username",
///     error: "cannot be empty",
/// };
/// assert_eq!(format!("{}", err), "username: cannot be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<E> {
    /// The field name
    pub field: &'static str,
    /// The underlying error
    pub error: E,
}

impl<E: fmt::Display> fmt::Display for FieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for FieldError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Extension trait for adding field context to validations
pub trait ValidationFieldExt<T, E> {
    /// Add field context to a validation error
    fn with_field(self, field: &'static str) -> Validation<T, FieldError<E>>;
}

impl<T, E> ValidationFieldExt<T, E> for Validation<T, E> {
    fn with_field(self, field: &'static str) -> Validation<T, FieldError<E>> {
        self.map_err(|error| FieldError { field, error })
    }
}
