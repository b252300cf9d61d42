use landfill_core::{DomainError, LandfillInputs, Model};

use crate::{
    geometry::{GeometryModel, GeometryResult},
    leachate::{LeachateModel, LeachateResult},
    settlement::{SettlementModel, SettlementResult},
    stability::{StabilityModel, StabilityResult},
};

/// The four landfill models, configured once and reused across evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyses {
    pub geometry: GeometryModel,
    pub settlement: SettlementModel,
    pub leachate: LeachateModel,
    pub stability: StabilityModel,
}

impl Analyses {
    /// Runs every model against one input snapshot.
    ///
    /// Each outcome is kept on its own: a domain error in one model does not
    /// prevent the others from reporting.
    #[must_use]
    pub fn assess(&self, inputs: &LandfillInputs) -> Assessment {
        let Ok(settlement) = self.settlement.call(inputs);
        let Ok(leachate) = self.leachate.call(inputs);

        Assessment {
            inputs: *inputs,
            geometry: self.geometry.call(inputs),
            settlement,
            leachate,
            stability: self.stability.call(inputs),
        }
    }
}

/// Outcome of every landfill model for a single input snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub inputs: LandfillInputs,
    pub geometry: Result<GeometryResult, DomainError>,
    pub settlement: SettlementResult,
    pub leachate: LeachateResult,
    pub stability: Result<StabilityResult, DomainError>,
}

impl Assessment {
    /// Runs the default-configured models against `inputs`.
    ///
    /// # Example
    ///
    /// ```
    /// use landfill_core::{InputParameters, LandfillInputs};
    /// use landfill_models::{Assessment, Classification};
    ///
    /// let inputs = LandfillInputs::new(InputParameters::default()).unwrap();
    /// let assessment = Assessment::evaluate(&inputs);
    ///
    /// assert_eq!(
    ///     assessment.stability.unwrap().classification,
    ///     Classification::Marginal,
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(inputs: &LandfillInputs) -> Self {
        Analyses::default().assess(inputs)
    }

    /// Returns `true` if every model produced a result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.geometry.is_ok() && self.stability.is_ok()
    }
}
