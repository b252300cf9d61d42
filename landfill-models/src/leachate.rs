//! Leachate generation and flow decay.
//!
//! Rainfall over the footprint gives the infiltration volume
//! `V = (r / 1000)⋅A` in m³/day. The steady flow is `Q = V⋅k`, where the
//! permeability `k` (m/day) enters as a plain scaling factor rather than a
//! Darcy flux. Flow on day `t` then decays as `Q⋅exp(-λ⋅t)`.

use std::{convert::Infallible, iter::FusedIterator};

use landfill_core::{
    LandfillInputs, Model,
    constraint::{Constrained, ConstraintResult, NonNegative},
    units,
};
use uom::si::f64::{Area, Velocity, VolumeRate};

/// Daily decay rate of leachate flow used when none is given, 1/day.
pub const DEFAULT_DECAY_RATE_PER_DAY: f64 = 0.05;

/// Number of days in the flow series used when none is given.
pub const DEFAULT_SERIES_DAYS: usize = 30;

/// Result of the leachate model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeachateResult {
    /// Infiltration volume over the footprint.
    pub generation_volume: VolumeRate,
    /// Percolation-limited flow, the value of the series on day zero.
    pub steady_flow: VolumeRate,
    decay_rate: f64,
    days: usize,
}

impl LeachateResult {
    /// Returns the flow on `day`, counted from zero.
    ///
    /// Days past the end of the series are still defined by the decay law.
    #[must_use]
    pub fn flow_on_day(&self, day: usize) -> VolumeRate {
        decayed(self.steady_flow, self.decay_rate, day)
    }

    /// Returns the daily flow series, starting from day zero.
    ///
    /// Each call starts a fresh iterator; the series holds no state beyond the
    /// current day.
    #[must_use]
    pub fn flow_series(&self) -> FlowSeries {
        FlowSeries {
            steady_flow: self.steady_flow,
            decay_rate: self.decay_rate,
            day: 0,
            days: self.days,
        }
    }

    /// Number of days in [`flow_series`](Self::flow_series).
    #[must_use]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Decay rate of the flow series, 1/day.
    #[must_use]
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }
}

/// Lazily evaluated daily leachate flow, `Q⋅exp(-λ⋅t)` for `t = 0, 1, …`.
#[derive(Debug, Clone)]
pub struct FlowSeries {
    steady_flow: VolumeRate,
    decay_rate: f64,
    day: usize,
    days: usize,
}

impl Iterator for FlowSeries {
    type Item = VolumeRate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.day >= self.days {
            return None;
        }

        let flow = decayed(self.steady_flow, self.decay_rate, self.day);
        self.day += 1;
        Some(flow)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.days.saturating_sub(self.day);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FlowSeries {}

impl FusedIterator for FlowSeries {}

fn decayed(steady_flow: VolumeRate, decay_rate: f64, day: usize) -> VolumeRate {
    #[allow(clippy::cast_precision_loss)]
    let t = day as f64;
    steady_flow * (-decay_rate * t).exp()
}

/// Computes leachate generation with the default decay rate and series length.
///
/// # Example
///
/// ```
/// use landfill_core::units::{in_m3_per_day, m_per_day, mm_per_day};
/// use landfill_models::evaluate_leachate;
/// use uom::si::{area::square_meter, f64::Area};
///
/// let result = evaluate_leachate(
///     mm_per_day(10.0),
///     Area::new::<square_meter>(10_000.0),
///     m_per_day(0.001),
/// );
///
/// assert!((in_m3_per_day(result.generation_volume) - 100.0).abs() < 1e-9);
/// assert_eq!(result.flow_series().len(), 30);
/// ```
#[must_use]
pub fn evaluate_leachate(rainfall: Velocity, area: Area, permeability: Velocity) -> LeachateResult {
    LeachateModel::default().generate(rainfall, area, permeability)
}

/// Leachate generation model with a configurable decay rate and series length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeachateModel {
    decay_rate: Constrained<f64, NonNegative>,
    days: usize,
}

impl LeachateModel {
    /// Creates a model with a decay rate in 1/day and a series length in days.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`](landfill_core::constraint::ConstraintError)
    /// if the decay rate is negative or NaN.
    pub fn new(decay_rate_per_day: f64, days: usize) -> ConstraintResult<Self> {
        Ok(Self {
            decay_rate: NonNegative::new(decay_rate_per_day)?,
            days,
        })
    }

    /// Computes the generation volume, steady flow, and decay parameters.
    ///
    /// A zero permeability is accepted and yields zero flow on every day.
    #[must_use]
    pub fn generate(&self, rainfall: Velocity, area: Area, permeability: Velocity) -> LeachateResult {
        let generation_volume: VolumeRate = rainfall * area;
        let steady_flow = generation_volume * units::in_m_per_day(permeability);

        if permeability.value == 0.0 {
            tracing::warn!("permeability is zero, leachate flow is zero on every day");
        }

        LeachateResult {
            generation_volume,
            steady_flow,
            decay_rate: self.decay_rate.into_inner(),
            days: self.days,
        }
    }
}

impl Default for LeachateModel {
    fn default() -> Self {
        Self {
            decay_rate: NonNegative::new(DEFAULT_DECAY_RATE_PER_DAY)
                .expect("default decay rate is non-negative"),
            days: DEFAULT_SERIES_DAYS,
        }
    }
}

impl Model for LeachateModel {
    type Input = LandfillInputs;
    type Output = LeachateResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = self.generate(input.rainfall(), input.area(), input.permeability());
        tracing::debug!(
            generation_m3_per_day = units::in_m3_per_day(result.generation_volume),
            steady_flow_m3_per_day = units::in_m3_per_day(result.steady_flow),
            "evaluated leachate generation"
        );
        Ok(result)
    }
}
