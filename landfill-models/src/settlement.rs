//! Self-weight settlement of the waste mass.
//!
//! The applied vertical stress at the base is `σ = γ⋅d`, and settlement is
//! taken as proportional to it: `s = k⋅σ`, with an empirical coefficient `k`.

use std::convert::Infallible;

use landfill_core::{
    LandfillInputs, Model,
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::{self, SettlementCoefficient, UnitWeight},
};
use uom::si::{
    f64::{Length, Pressure},
    length::meter,
    pressure::kilopascal,
};

/// Empirical settlement coefficient used when none is given, m/kPa.
pub const DEFAULT_COEFFICIENT_M_PER_KPA: f64 = 0.02;

/// Result of the settlement model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementResult {
    /// Vertical stress at the base of the waste, `γ⋅d`.
    pub applied_stress: Pressure,
    /// Estimated settlement, `k⋅σ`.
    pub settlement: Length,
}

/// Computes settlement with the default coefficient.
///
/// # Example
///
/// ```
/// use landfill_core::units::unit_weight_from_kn_per_m3;
/// use landfill_models::evaluate_settlement;
/// use uom::si::{f64::Length, length::meter, pressure::kilopascal};
///
/// let result = evaluate_settlement(Length::new::<meter>(20.0), unit_weight_from_kn_per_m3(12.0));
///
/// assert!((result.applied_stress.get::<kilopascal>() - 240.0).abs() < 1e-9);
/// assert!((result.settlement.get::<meter>() - 4.8).abs() < 1e-9);
/// ```
#[must_use]
pub fn evaluate_settlement(depth: Length, unit_weight: UnitWeight) -> SettlementResult {
    SettlementModel::default().settle(depth, unit_weight)
}

/// Linear settlement model with a configurable coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementModel {
    coefficient: Constrained<SettlementCoefficient, NonNegative>,
}

impl SettlementModel {
    /// Creates a model with the given settlement coefficient.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`](landfill_core::constraint::ConstraintError)
    /// if the coefficient is negative or NaN.
    pub fn new(coefficient: SettlementCoefficient) -> ConstraintResult<Self> {
        Ok(Self {
            coefficient: NonNegative::new(coefficient)?,
        })
    }

    #[must_use]
    pub fn coefficient(&self) -> SettlementCoefficient {
        *self.coefficient.as_ref()
    }

    /// Computes the applied stress and settlement for one depth and unit weight.
    #[must_use]
    pub fn settle(&self, depth: Length, unit_weight: UnitWeight) -> SettlementResult {
        let applied_stress: Pressure = unit_weight * depth;
        let settlement: Length = self.coefficient() * applied_stress;

        SettlementResult {
            applied_stress,
            settlement,
        }
    }
}

impl Default for SettlementModel {
    fn default() -> Self {
        Self {
            coefficient: NonNegative::new(units::settlement_coefficient_from_m_per_kpa(
                DEFAULT_COEFFICIENT_M_PER_KPA,
            ))
            .expect("default settlement coefficient is non-negative"),
        }
    }
}

impl Model for SettlementModel {
    type Input = LandfillInputs;
    type Output = SettlementResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = self.settle(input.waste_depth(), input.unit_weight());
        tracing::debug!(
            applied_stress_kpa = result.applied_stress.get::<kilopascal>(),
            settlement_m = result.settlement.get::<meter>(),
            "evaluated settlement"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use landfill_core::{
        InputParameters,
        constraint::ConstraintError,
        units::{m_per_kpa, unit_weight_from_kn_per_m3},
    };
    use uom::ConstZero;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn default_scenario() {
        let result = evaluate_settlement(m(20.0), unit_weight_from_kn_per_m3(12.0));

        assert_relative_eq!(result.applied_stress.get::<kilopascal>(), 240.0, max_relative = 1e-12);
        assert_relative_eq!(result.settlement.get::<meter>(), 4.8, max_relative = 1e-12);
    }

    #[test]
    fn custom_coefficient_scales_settlement() {
        let model = SettlementModel::new(units::settlement_coefficient_from_m_per_kpa(0.01)).unwrap();
        assert_relative_eq!(m_per_kpa(model.coefficient()), 0.01, max_relative = 1e-12);

        let result = model.settle(m(20.0), unit_weight_from_kn_per_m3(12.0));

        assert_relative_eq!(result.settlement.get::<meter>(), 2.4, max_relative = 1e-12);
    }

    #[test]
    fn negative_coefficient_is_rejected() {
        let err = SettlementModel::new(units::settlement_coefficient_from_m_per_kpa(-0.02))
            .unwrap_err();
        assert_eq!(err, ConstraintError::Negative);
    }

    #[test]
    fn monotonic_in_depth_and_unit_weight() {
        let model = SettlementModel::default();
        let mut previous_by_depth = Length::ZERO;
        for depth in (5..=60).step_by(5).map(f64::from) {
            let mut previous_by_weight = Length::ZERO;
            for gamma in (5..=25).map(f64::from) {
                let s = model.settle(m(depth), unit_weight_from_kn_per_m3(gamma)).settlement;
                assert!(s >= previous_by_weight);
                previous_by_weight = s;
            }
            let s = model.settle(m(depth), unit_weight_from_kn_per_m3(12.0)).settlement;
            assert!(s >= previous_by_depth);
            previous_by_depth = s;
        }
    }

    #[test]
    fn model_call_matches_free_function() {
        let inputs = LandfillInputs::new(InputParameters::default()).unwrap();

        let Ok(result) = SettlementModel::default().call(&inputs);

        assert_eq!(result, evaluate_settlement(inputs.waste_depth(), inputs.unit_weight()));
    }
}
