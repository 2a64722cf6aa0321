//! # Invar
//!
//! Refined value types: wrappers that carry a value together with the
//! guarantee that a fixed set of named invariants held when the wrapper was
//! built.
//!
//! A refined type is defined by an ordered set of [`Invariant`]s. Values come
//! into existence only through [`InvariantHolder::new`] (trusted input, panics
//! on violation) or [`InvariantHolder::try_new`] (untrusted input, reports
//! every violated invariant). There is no way to mutate the wrapped value
//! afterwards, so the guarantee holds for the holder's whole lifetime.
//!
//! ## Quick Example
//!
//! ```rust
//! use invar::{Invariant, InvariantHolder};
//!
//! static USERNAME: [Invariant<String>; 2] = [
//!     Invariant::new("username must be non-empty", |s: &String| !s.is_empty()),
//!     Invariant::new("username must be lowercase", |s: &String| {
//!         s.chars().all(|c| !c.is_uppercase())
//!     }),
//! ];
//!
//! let ok = InvariantHolder::try_new("alice".to_string(), &USERNAME);
//! assert_eq!(ok.unwrap().value(), "alice");
//!
//! let err = InvariantHolder::try_new("Bob".to_string(), &USERNAME).unwrap_err();
//! assert_eq!(err.names(), &["username must be lowercase"]);
//! ```
//!
//! Ready-made refined types live in [`refined`]: [`NonEmptyVec`],
//! [`NonEmptyString`], [`NonNullRef`] and [`PositiveInt`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod holder;
pub mod invariant;
pub mod refined;
pub mod semigroup;
pub mod testing;
pub mod validation;
mod violations;

// Re-exports
pub use holder::{FieldError, InvariantHolder, ValidationFieldExt};
pub use invariant::{Invariant, InvariantSet};
pub use refined::{NonEmptyString, NonEmptyVec, NonNullRef, PositiveInt};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use violations::Violations;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::holder::{FieldError, InvariantHolder, ValidationFieldExt};
    pub use crate::invariant::{Invariant, InvariantSet};
    pub use crate::refined::{NonEmptyString, NonEmptyVec, NonNullRef, PositiveInt};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::violations::Violations;
}
