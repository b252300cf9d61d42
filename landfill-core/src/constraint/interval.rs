use std::fmt;

use super::ConstraintError;

/// A range of `f64` values with a closed upper bound.
///
/// The lower bound may be closed (`[lower, upper]`) or open (`(lower, upper]`).
///
/// # Examples
///
/// ```
/// use landfill_core::constraint::Interval;
///
/// let depth = Interval::closed(5.0, 60.0);
/// assert!(depth.contains(5.0));
/// assert!(!depth.contains(60.5));
///
/// let permeability = Interval::left_open(0.0, 1.0);
/// assert!(!permeability.contains(0.0));
/// assert_eq!(permeability.to_string(), "(0, 1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
    lower_open: bool,
}

impl Interval {
    /// Creates the closed interval `[lower, upper]`.
    #[must_use]
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            lower_open: false,
        }
    }

    /// Creates the left-open interval `(lower, upper]`.
    #[must_use]
    pub const fn left_open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            lower_open: true,
        }
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Checks that `value` lies inside the interval.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] if `value` is NaN.
    /// - [`ConstraintError::BelowMinimum`] if `value` is below the lower bound.
    /// - [`ConstraintError::AboveMaximum`] if `value` is above the upper bound.
    pub fn check(&self, value: f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            return Err(ConstraintError::NotANumber);
        }

        let below = if self.lower_open {
            value <= self.lower
        } else {
            value < self.lower
        };

        if below {
            Err(ConstraintError::BelowMinimum)
        } else if value > self.upper {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.check(value).is_ok()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_open { '(' } else { '[' };
        write!(f, "{open}{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_interval_includes_both_ends() {
        let interval = Interval::closed(10.0, 45.0);
        assert_eq!(interval.check(10.0), Ok(()));
        assert_eq!(interval.check(45.0), Ok(()));
        assert_eq!(interval.check(9.99), Err(ConstraintError::BelowMinimum));
        assert_eq!(interval.check(45.01), Err(ConstraintError::AboveMaximum));
    }

    #[test]
    fn left_open_interval_excludes_lower_end() {
        let interval = Interval::left_open(0.0, 1.0);
        assert_eq!(interval.check(0.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(interval.check(1e-9), Ok(()));
        assert_eq!(interval.check(1.0), Ok(()));
    }

    #[test]
    fn nan_is_rejected() {
        let interval = Interval::closed(0.0, 100.0);
        assert_eq!(interval.check(f64::NAN), Err(ConstraintError::NotANumber));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn display_uses_bracket_notation() {
        assert_eq!(Interval::closed(1000.0, 100_000.0).to_string(), "[1000, 100000]");
        assert_eq!(Interval::closed(0.1, 2.0).to_string(), "[0.1, 2]");
    }
}
