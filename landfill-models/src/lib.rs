//! Closed-form analyses for a conceptual landfill cross-section.
//!
//! Four independent models read the same [`LandfillInputs`]:
//!
//! - [`geometry`]: triangular cross-section from depth and slope angle.
//! - [`settlement`]: self-weight settlement from depth and unit weight.
//! - [`leachate`]: generation volume, steady flow, and a daily decay series.
//! - [`stability`]: infinite-slope factor of safety and its classification.
//!
//! None of them reads another's output, so they can run in any order or in
//! parallel. [`Assessment`] runs all four against one input snapshot.
//!
//! [`LandfillInputs`]: landfill_core::LandfillInputs

mod angle;
mod assessment;

pub mod geometry;
pub mod leachate;
pub mod settlement;
pub mod stability;

pub use assessment::{Analyses, Assessment};
pub use geometry::{GeometryModel, GeometryResult, Vertex, evaluate_geometry};
pub use leachate::{FlowSeries, LeachateModel, LeachateResult, evaluate_leachate};
pub use settlement::{SettlementModel, SettlementResult, evaluate_settlement};
pub use stability::{Classification, StabilityModel, StabilityResult, evaluate_stability};
