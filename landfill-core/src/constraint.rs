//! Numeric constraints checked once at construction time.
//!
//! [`Constrained<T, C>`] wraps a value that is known to satisfy the marker
//! constraint `C`, so model parameters such as a settlement coefficient or a
//! decay rate never need to be re-validated after they are built.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! [`Interval`] covers the other common case: a runtime range with a closed
//! upper bound and an open or closed lower bound, used for input fields.

mod interval;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use interval::Interval;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use landfill_core::constraint::{Constrained, NonNegative};
///
/// let n = Constrained::<_, NonNegative>::new(0.05).unwrap();
/// assert_eq!(n.into_inner(), 0.05);
///
/// assert!(Constrained::<_, NonNegative>::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
