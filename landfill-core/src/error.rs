use thiserror::Error;

use crate::{Field, constraint::Interval};

/// Errors raised by a model when its formula is undefined for the given inputs.
///
/// Models never return infinity or NaN in place of one of these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// The slope angle sits at or beyond 0° or 90°, where its tangent is zero or undefined.
    #[error("slope angle must lie strictly between 0° and 90° (got {degrees}°)")]
    SlopeAngle { degrees: f64 },

    /// The friction angle is negative or sits at the 90° tangent singularity.
    #[error("friction angle must lie in [0°, 90°) (got {degrees}°)")]
    FrictionAngle { degrees: f64 },

    /// The driving stress `γ⋅d⋅sin(θ)` is zero, so the factor of safety is undefined.
    ///
    /// Happens when the slope angle, the depth, or the unit weight is zero.
    #[error("driving stress is zero (depth={depth_m} m, slope={slope_degrees}°)")]
    ZeroDrivingStress { depth_m: f64, slope_degrees: f64 },
}

/// Errors raised while building [`LandfillInputs`](crate::LandfillInputs).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// The value lies outside the field's allowed interval.
    #[error("`{field}` must lie in {interval} {} (got {value})", .field.unit())]
    OutOfRange {
        field: Field,
        value: f64,
        interval: Interval,
    },

    /// The value is NaN.
    #[error("`{field}` is not a number")]
    NotANumber { field: Field },
}

impl RangeError {
    /// Returns the field that failed validation.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::OutOfRange { field, .. } | Self::NotANumber { field } => *field,
        }
    }
}
