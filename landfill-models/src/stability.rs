//! Infinite-slope stability of the waste slope.
//!
//! The factor of safety compares resisting to driving stress on a slip plane
//! parallel to the slope surface:
//!
//! ```text
//! FOS = (c + γ⋅d⋅tan(φ)) / (γ⋅d⋅sin(θ))
//! ```
//!
//! where `c` is cohesion, `φ` the friction angle, and `θ` the slope angle.

use std::fmt;

use landfill_core::{DomainError, LandfillInputs, Model, units::UnitWeight};
use uom::si::{
    angle::degree,
    f64::{Angle, Length, Pressure, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::angle;

/// Factor of safety below which the slope is expected to fail.
pub const FAILURE_FACTOR_OF_SAFETY: f64 = 1.0;

/// Conventional minimum factor of safety for a slope to be considered safe.
pub const MIN_SAFE_FACTOR_OF_SAFETY: f64 = 1.5;

/// Stability class of a slope, from its factor of safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// `FOS < 1.0`
    Unsafe,
    /// `1.0 ≤ FOS < 1.5`
    Marginal,
    /// `FOS ≥ 1.5`
    Safe,
}

impl Classification {
    /// Classifies a factor of safety against [`FAILURE_FACTOR_OF_SAFETY`]
    /// and [`MIN_SAFE_FACTOR_OF_SAFETY`].
    #[must_use]
    pub fn from_factor_of_safety(factor_of_safety: f64) -> Self {
        if factor_of_safety >= MIN_SAFE_FACTOR_OF_SAFETY {
            Self::Safe
        } else if factor_of_safety >= FAILURE_FACTOR_OF_SAFETY {
            Self::Marginal
        } else {
            Self::Unsafe
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsafe => "unsafe",
            Self::Marginal => "marginal",
            Self::Safe => "safe",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the stability model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityResult {
    /// Ratio of resisting to driving stress.
    pub factor_of_safety: Ratio,
    pub classification: Classification,
}

impl StabilityResult {
    /// Returns the factor of safety as a plain number.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.factor_of_safety.get::<ratio>()
    }
}

/// Computes the infinite-slope factor of safety and its classification.
///
/// # Example
///
/// ```
/// use landfill_core::units::unit_weight_from_kn_per_m3;
/// use landfill_models::{Classification, evaluate_stability};
/// use uom::si::{
///     angle::degree,
///     f64::{Angle, Length, Pressure},
///     length::meter,
///     pressure::kilopascal,
/// };
///
/// let result = evaluate_stability(
///     Length::new::<meter>(20.0),
///     unit_weight_from_kn_per_m3(12.0),
///     Pressure::new::<kilopascal>(5.0),
///     Angle::new::<degree>(30.0),
///     Angle::new::<degree>(30.0),
/// ).unwrap();
///
/// assert!((result.value() - 1.196).abs() < 1e-3);
/// assert_eq!(result.classification, Classification::Marginal);
/// ```
///
/// # Errors
///
/// - [`DomainError::FrictionAngle`] unless `0° ≤ friction_angle < 90°`.
/// - [`DomainError::ZeroDrivingStress`] if `γ⋅d⋅sin(θ)` is zero, which
///   happens when the slope angle, depth, or unit weight is zero.
pub fn evaluate_stability(
    depth: Length,
    unit_weight: UnitWeight,
    cohesion: Pressure,
    friction_angle: Angle,
    slope_angle: Angle,
) -> Result<StabilityResult, DomainError> {
    if !angle::is_below_right_angle(friction_angle) {
        return Err(DomainError::FrictionAngle {
            degrees: friction_angle.get::<degree>(),
        });
    }

    let normal_stress: Pressure = unit_weight * depth;
    let driving_stress = normal_stress * slope_angle.sin();

    // `sin(π)` and friends are not exactly zero in floating point.
    let negligible = f64::EPSILON * normal_stress.value.abs();
    if !(driving_stress.value.abs() > negligible) {
        return Err(DomainError::ZeroDrivingStress {
            depth_m: depth.get::<meter>(),
            slope_degrees: slope_angle.get::<degree>(),
        });
    }

    let resisting_stress = cohesion + normal_stress * friction_angle.tan();
    let factor_of_safety: Ratio = resisting_stress / driving_stress;

    Ok(StabilityResult {
        factor_of_safety,
        classification: Classification::from_factor_of_safety(factor_of_safety.get::<ratio>()),
    })
}

/// Slope stability model over the shared landfill inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StabilityModel;

impl Model for StabilityModel {
    type Input = LandfillInputs;
    type Output = StabilityResult;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = evaluate_stability(
            input.waste_depth(),
            input.unit_weight(),
            input.cohesion(),
            input.friction_angle(),
            input.slope_angle(),
        )?;

        match result.classification {
            Classification::Unsafe => tracing::warn!(
                factor_of_safety = result.value(),
                "slope is below the failure threshold"
            ),
            _ => tracing::debug!(
                factor_of_safety = result.value(),
                classification = %result.classification,
                "evaluated slope stability"
            ),
        }

        Ok(result)
    }
}
