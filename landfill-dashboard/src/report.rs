//! Display-ready summary of an [`Assessment`].
//!
//! Values are rounded the way the dashboard shows them: settlement, volume,
//! and factor of safety to two decimals, flow to five.

use std::fmt;

use landfill_core::{
    Field, InputParameters,
    constraint::{Constrained, StrictlyPositive},
    units::in_m3_per_day,
};
use landfill_models::{
    Assessment, GeometryResult, LeachateResult, SettlementResult, StabilityResult,
    stability::MIN_SAFE_FACTOR_OF_SAFETY,
};
use serde::Serialize;
use uom::si::{f64::Length, length::meter, pressure::kilopascal, ratio::ratio};

/// Settlement that fills the progress bar, m.
pub const DEFAULT_SETTLEMENT_SCALE_M: f64 = 5.0;

const PROGRESS_WIDTH: usize = 30;

/// Rounds `value` to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Fraction of `full_scale` reached by `settlement`, clamped to `[0, 1]`.
pub fn settlement_progress(
    settlement: Length,
    full_scale: Constrained<Length, StrictlyPositive>,
) -> f64 {
    (settlement / full_scale.into_inner())
        .get::<ratio>()
        .clamp(0.0, 1.0)
}

/// A model result, or the reason it is undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ready(T),
    Undefined { error: String },
}

impl<T> Section<T> {
    fn from_result<R, E: fmt::Display>(result: &Result<R, E>, build: impl FnOnce(&R) -> T) -> Self {
        match result {
            Ok(value) => Self::Ready(build(value)),
            Err(err) => Self::Undefined {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryReport {
    pub base_length_m: f64,
    pub vertices_m: [[f64; 2]; 3],
}

impl From<&GeometryResult> for GeometryReport {
    fn from(result: &GeometryResult) -> Self {
        Self {
            base_length_m: round_to(result.base_length.get::<meter>(), 2),
            vertices_m: result.outline().map(|[x, y]| [round_to(x, 2), round_to(y, 2)]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReport {
    pub applied_stress_kpa: f64,
    pub settlement_m: f64,
    pub progress: f64,
}

impl SettlementReport {
    fn new(result: &SettlementResult, full_scale: Constrained<Length, StrictlyPositive>) -> Self {
        Self {
            applied_stress_kpa: round_to(result.applied_stress.get::<kilopascal>(), 2),
            settlement_m: round_to(result.settlement.get::<meter>(), 2),
            progress: settlement_progress(result.settlement, full_scale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeachateReport {
    pub volume_m3_per_day: f64,
    pub flow_m3_per_day: f64,
    pub flow_series_m3_per_day: Vec<f64>,
}

impl From<&LeachateResult> for LeachateReport {
    fn from(result: &LeachateResult) -> Self {
        Self {
            volume_m3_per_day: round_to(in_m3_per_day(result.generation_volume), 2),
            flow_m3_per_day: round_to(in_m3_per_day(result.steady_flow), 5),
            flow_series_m3_per_day: result
                .flow_series()
                .map(|flow| round_to(in_m3_per_day(flow), 5))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityReport {
    pub factor_of_safety: f64,
    pub classification: String,
    pub min_safe_factor_of_safety: f64,
}

impl From<&StabilityResult> for StabilityReport {
    fn from(result: &StabilityResult) -> Self {
        Self {
            factor_of_safety: round_to(result.value(), 2),
            classification: result.classification.to_string(),
            min_safe_factor_of_safety: MIN_SAFE_FACTOR_OF_SAFETY,
        }
    }
}

/// Everything the dashboard shows for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub inputs: InputParameters,
    pub geometry: Section<GeometryReport>,
    pub settlement: SettlementReport,
    pub leachate: LeachateReport,
    pub stability: Section<StabilityReport>,
}

impl Report {
    pub fn new(
        assessment: &Assessment,
        settlement_scale: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            inputs: assessment.inputs.parameters(),
            geometry: Section::from_result(&assessment.geometry, |geometry| {
                GeometryReport::from(geometry)
            }),
            settlement: SettlementReport::new(&assessment.settlement, settlement_scale),
            leachate: LeachateReport::from(&assessment.leachate),
            stability: Section::from_result(&assessment.stability, |stability| {
                StabilityReport::from(stability)
            }),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engineered Landfill Analysis")?;
        writeln!(f)?;

        writeln!(f, "Inputs")?;
        for field in Field::ALL {
            writeln!(
                f,
                "  {:<16} {:>10} {}",
                field.name(),
                self.inputs.get(field),
                field.unit()
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Cross-section")?;
        match &self.geometry {
            Section::Ready(geometry) => {
                writeln!(f, "  base length      {:.2} m", geometry.base_length_m)?;
                let vertices: Vec<String> = geometry
                    .vertices_m
                    .iter()
                    .map(|[x, y]| format!("({x:.2}, {y:.2})"))
                    .collect();
                writeln!(f, "  vertices         {}", vertices.join(" "))?;
            }
            Section::Undefined { error } => writeln!(f, "  undefined: {error}")?,
        }
        writeln!(f)?;

        let settlement = &self.settlement;
        writeln!(f, "Settlement")?;
        writeln!(f, "  applied stress   {:.2} kPa", settlement.applied_stress_kpa)?;
        writeln!(f, "  settlement       {:.2} m", settlement.settlement_m)?;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = (settlement.progress * PROGRESS_WIDTH as f64).round() as usize;
        writeln!(
            f,
            "  progress         [{}{}] {:.0}%",
            "#".repeat(filled),
            "-".repeat(PROGRESS_WIDTH - filled),
            settlement.progress * 100.0
        )?;
        writeln!(f)?;

        let leachate = &self.leachate;
        writeln!(f, "Leachate")?;
        writeln!(f, "  volume           {:.2} m³/day", leachate.volume_m3_per_day)?;
        writeln!(f, "  flow             {:.5} m³/day", leachate.flow_m3_per_day)?;
        writeln!(f, "  day  flow (m³/day)")?;
        for (day, flow) in leachate.flow_series_m3_per_day.iter().enumerate() {
            writeln!(f, "  {day:>3}  {flow:.5}")?;
        }
        writeln!(f)?;

        writeln!(f, "Slope stability")?;
        match &self.stability {
            Section::Ready(stability) => {
                writeln!(
                    f,
                    "  factor of safety {:.2} ({})",
                    stability.factor_of_safety, stability.classification
                )?;
                writeln!(
                    f,
                    "  min safe FOS     {:.2}",
                    stability.min_safe_factor_of_safety
                )?;
            }
            Section::Undefined { error } => writeln!(f, "  undefined: {error}")?,
        }

        Ok(())
    }
}
