use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Works with primitive floats and with `uom` quantities.
///
/// # Examples
///
/// ```
/// use landfill_core::constraint::NonNegative;
/// use uom::si::{f64::Length, length::meter};
///
/// let rate = NonNegative::new(0.05).unwrap();
/// assert_eq!(rate.into_inner(), 0.05);
///
/// let depth = NonNegative::new(Length::new::<meter>(20.0)).unwrap();
/// assert_eq!(depth.as_ref().get::<meter>(), 20.0);
///
/// assert!(NonNegative::new(-0.1).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
