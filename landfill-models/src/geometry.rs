//! Simplified landfill cross-section.
//!
//! The waste body is drawn as a right triangle: a vertical leg of height `d`
//! at the origin, a horizontal top of length `d / tan(θ)`, and a hypotenuse
//! rising from the toe at the slope angle `θ`.

use landfill_core::{DomainError, LandfillInputs, Model};
use uom::{
    ConstZero,
    si::{
        angle::degree,
        f64::{Angle, Length},
        length::meter,
    },
};

use crate::angle;

/// A point on the cross-section, measured from the toe of the slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Horizontal distance from the toe.
    pub x: Length,
    /// Height above the base.
    pub y: Length,
}

impl Vertex {
    #[must_use]
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Returns `[x, y]` in meters.
    #[must_use]
    pub fn in_meters(&self) -> [f64; 2] {
        [self.x.get::<meter>(), self.y.get::<meter>()]
    }
}

/// Result of the cross-section model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryResult {
    /// Horizontal run of the slope, `d / tan(θ)`.
    pub base_length: Length,

    /// Triangle corners in drawing order: `(0, 0)`, `(base_length, d)`, `(0, d)`.
    pub vertices: [Vertex; 3],
}

impl GeometryResult {
    /// Returns the vertices as `[x, y]` pairs in meters.
    #[must_use]
    pub fn outline(&self) -> [[f64; 2]; 3] {
        self.vertices.map(|vertex| vertex.in_meters())
    }
}

/// Computes the triangular cross-section for a waste depth and slope angle.
///
/// # Example
///
/// ```
/// use landfill_models::evaluate_geometry;
/// use uom::si::{angle::degree, f64::{Angle, Length}, length::meter};
///
/// let result = evaluate_geometry(
///     Length::new::<meter>(20.0),
///     Angle::new::<degree>(45.0),
/// ).unwrap();
///
/// assert!((result.base_length.get::<meter>() - 20.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`DomainError::SlopeAngle`] unless `0° < slope_angle < 90°`,
/// since the tangent is zero or undefined at those bounds.
pub fn evaluate_geometry(depth: Length, slope_angle: Angle) -> Result<GeometryResult, DomainError> {
    if !angle::is_acute(slope_angle) {
        return Err(DomainError::SlopeAngle {
            degrees: slope_angle.get::<degree>(),
        });
    }

    let base_length = depth / slope_angle.tan();

    Ok(GeometryResult {
        base_length,
        vertices: [
            Vertex::new(Length::ZERO, Length::ZERO),
            Vertex::new(base_length, depth),
            Vertex::new(Length::ZERO, depth),
        ],
    })
}

/// Cross-section model over the shared landfill inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryModel;

impl Model for GeometryModel {
    type Input = LandfillInputs;
    type Output = GeometryResult;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = evaluate_geometry(input.waste_depth(), input.slope_angle())?;
        tracing::debug!(
            base_length_m = result.base_length.get::<meter>(),
            "evaluated cross-section geometry"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use landfill_core::InputParameters;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn thirty_degree_slope() {
        let result = evaluate_geometry(m(20.0), deg(30.0)).unwrap();

        // 20 / tan(30°) = 20⋅√3
        let expected = 20.0 * 3.0_f64.sqrt();
        assert_relative_eq!(result.base_length.get::<meter>(), expected, max_relative = 1e-12);

        let [toe, crest, top] = result.outline();
        assert_eq!(toe, [0.0, 0.0]);
        assert_relative_eq!(crest[0], expected, max_relative = 1e-12);
        assert_relative_eq!(crest[1], 20.0);
        assert_eq!(top, [0.0, 20.0]);
    }

    #[test]
    fn steeper_slopes_have_shorter_bases() {
        let shallow = evaluate_geometry(m(30.0), deg(15.0)).unwrap();
        let steep = evaluate_geometry(m(30.0), deg(60.0)).unwrap();
        assert!(steep.base_length < shallow.base_length);
    }

    #[test]
    fn flat_slope_is_a_domain_error() {
        let err = evaluate_geometry(m(20.0), deg(0.0)).unwrap_err();
        assert_eq!(err, DomainError::SlopeAngle { degrees: 0.0 });
    }

    #[test]
    fn vertical_slope_is_a_domain_error() {
        let err = evaluate_geometry(m(20.0), deg(90.0)).unwrap_err();
        assert!(matches!(err, DomainError::SlopeAngle { .. }));
    }

    #[test]
    fn model_reads_depth_and_slope() {
        let inputs = LandfillInputs::new(InputParameters {
            waste_depth: 10.0,
            slope_angle: 45.0,
            ..InputParameters::default()
        })
        .unwrap();

        let result = GeometryModel.call(&inputs).unwrap();

        assert_relative_eq!(result.base_length.get::<meter>(), 10.0, max_relative = 1e-12);
    }
}
