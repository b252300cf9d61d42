//! Inputs, units, and error types shared by the landfill analysis models.
//!
//! Every analysis consumes one immutable [`LandfillInputs`] value, which is
//! range-checked when it is built from plain [`InputParameters`].
//! Models implement the [`Model`] trait and report arithmetic degeneracies
//! through [`DomainError`].

mod error;
mod inputs;
mod model;

pub mod constraint;
pub mod units;

pub use error::{DomainError, RangeError};
pub use inputs::{Field, InputParameters, LandfillInputs};
pub use model::Model;
