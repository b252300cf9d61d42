use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length, Pressure, Velocity},
    length::meter,
    pressure::kilopascal,
};

use crate::{
    RangeError,
    constraint::{ConstraintError, Interval},
    units::{self, UnitWeight},
};

/// Plain-number landfill parameters in the units an engineer would quote.
///
/// This is the boundary record for configuration files and command-line
/// arguments. Convert it into [`LandfillInputs`] to range-check it and carry
/// the values as unit-safe quantities.
///
/// The default values match a typical mid-size municipal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InputParameters {
    /// Waste depth, m.
    pub waste_depth: f64,
    /// Liner thickness, m.
    pub liner_thickness: f64,
    /// Side slope angle from horizontal, degrees.
    pub slope_angle: f64,
    /// Waste permeability, m/day.
    pub permeability: f64,
    /// Average daily rainfall, mm/day.
    pub rainfall: f64,
    /// Landfill footprint, m².
    pub area: f64,
    /// Waste unit weight, kN/m³.
    pub unit_weight: f64,
    /// Waste cohesion, kPa.
    pub cohesion: f64,
    /// Waste friction angle, degrees.
    pub friction_angle: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            waste_depth: 20.0,
            liner_thickness: 0.5,
            slope_angle: 30.0,
            permeability: 0.001,
            rainfall: 10.0,
            area: 10_000.0,
            unit_weight: 12.0,
            cohesion: 5.0,
            friction_angle: 30.0,
        }
    }
}

impl InputParameters {
    /// Returns the value stored for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::WasteDepth => self.waste_depth,
            Field::LinerThickness => self.liner_thickness,
            Field::SlopeAngle => self.slope_angle,
            Field::Permeability => self.permeability,
            Field::Rainfall => self.rainfall,
            Field::Area => self.area,
            Field::UnitWeight => self.unit_weight,
            Field::Cohesion => self.cohesion,
            Field::FrictionAngle => self.friction_angle,
        }
    }

    /// Returns a mutable reference to the value stored for `field`.
    pub fn get_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::WasteDepth => &mut self.waste_depth,
            Field::LinerThickness => &mut self.liner_thickness,
            Field::SlopeAngle => &mut self.slope_angle,
            Field::Permeability => &mut self.permeability,
            Field::Rainfall => &mut self.rainfall,
            Field::Area => &mut self.area,
            Field::UnitWeight => &mut self.unit_weight,
            Field::Cohesion => &mut self.cohesion,
            Field::FrictionAngle => &mut self.friction_angle,
        }
    }
}

/// One of the named landfill input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WasteDepth,
    LinerThickness,
    SlopeAngle,
    Permeability,
    Rainfall,
    Area,
    UnitWeight,
    Cohesion,
    FrictionAngle,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 9] = [
        Field::WasteDepth,
        Field::LinerThickness,
        Field::SlopeAngle,
        Field::Permeability,
        Field::Rainfall,
        Field::Area,
        Field::UnitWeight,
        Field::Cohesion,
        Field::FrictionAngle,
    ];

    /// The field's key in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::WasteDepth => "waste_depth",
            Field::LinerThickness => "liner_thickness",
            Field::SlopeAngle => "slope_angle",
            Field::Permeability => "permeability",
            Field::Rainfall => "rainfall",
            Field::Area => "area",
            Field::UnitWeight => "unit_weight",
            Field::Cohesion => "cohesion",
            Field::FrictionAngle => "friction_angle",
        }
    }

    /// The unit the field is quoted in.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Field::WasteDepth | Field::LinerThickness => "m",
            Field::SlopeAngle | Field::FrictionAngle => "°",
            Field::Permeability => "m/day",
            Field::Rainfall => "mm/day",
            Field::Area => "m²",
            Field::UnitWeight => "kN/m³",
            Field::Cohesion => "kPa",
        }
    }

    /// The interval of accepted values, in the field's unit.
    #[must_use]
    pub fn interval(self) -> Interval {
        match self {
            Field::WasteDepth => Interval::closed(5.0, 60.0),
            Field::LinerThickness => Interval::closed(0.1, 2.0),
            Field::SlopeAngle => Interval::closed(10.0, 60.0),
            Field::Permeability => Interval::left_open(0.0, 1.0),
            Field::Rainfall => Interval::closed(0.0, 100.0),
            Field::Area => Interval::closed(1_000.0, 100_000.0),
            Field::UnitWeight => Interval::closed(5.0, 25.0),
            Field::Cohesion => Interval::closed(0.0, 50.0),
            Field::FrictionAngle => Interval::closed(10.0, 45.0),
        }
    }

    /// Checks `value` against this field's interval.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] naming the field if the value is NaN or out of range.
    pub fn check(self, value: f64) -> Result<(), RangeError> {
        let interval = self.interval();
        interval.check(value).map_err(|err| match err {
            ConstraintError::NotANumber => RangeError::NotANumber { field: self },
            _ => RangeError::OutOfRange {
                field: self,
                value,
                interval,
            },
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Range-checked landfill inputs shared by every model.
///
/// Built once per evaluation and never mutated.
/// The liner thickness is validated and carried but no model reads it.
///
/// # Example
///
/// ```
/// use landfill_core::{InputParameters, LandfillInputs};
/// use uom::si::length::meter;
///
/// let inputs = LandfillInputs::new(InputParameters::default()).unwrap();
/// assert_eq!(inputs.waste_depth().get::<meter>(), 20.0);
///
/// let too_deep = InputParameters { waste_depth: 75.0, ..Default::default() };
/// assert!(LandfillInputs::new(too_deep).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandfillInputs {
    waste_depth: Length,
    liner_thickness: Length,
    slope_angle: Angle,
    permeability: Velocity,
    rainfall: Velocity,
    area: Area,
    unit_weight: UnitWeight,
    cohesion: Pressure,
    friction_angle: Angle,
}

impl LandfillInputs {
    /// Validates `params` and converts them into unit-safe quantities.
    ///
    /// # Errors
    ///
    /// Returns the first [`RangeError`] found, checking fields in
    /// [`Field::ALL`] order.
    pub fn new(params: InputParameters) -> Result<Self, RangeError> {
        for field in Field::ALL {
            field.check(params.get(field))?;
        }

        Ok(Self {
            waste_depth: Length::new::<meter>(params.waste_depth),
            liner_thickness: Length::new::<meter>(params.liner_thickness),
            slope_angle: Angle::new::<degree>(params.slope_angle),
            permeability: units::m_per_day(params.permeability),
            rainfall: units::mm_per_day(params.rainfall),
            area: Area::new::<square_meter>(params.area),
            unit_weight: units::unit_weight_from_kn_per_m3(params.unit_weight),
            cohesion: Pressure::new::<kilopascal>(params.cohesion),
            friction_angle: Angle::new::<degree>(params.friction_angle),
        })
    }

    /// Returns the inputs as plain numbers in their quoted units.
    #[must_use]
    pub fn parameters(&self) -> InputParameters {
        InputParameters {
            waste_depth: self.waste_depth.get::<meter>(),
            liner_thickness: self.liner_thickness.get::<meter>(),
            slope_angle: self.slope_angle.get::<degree>(),
            permeability: units::in_m_per_day(self.permeability),
            rainfall: units::in_mm_per_day(self.rainfall),
            area: self.area.get::<square_meter>(),
            unit_weight: units::kn_per_m3(self.unit_weight),
            cohesion: self.cohesion.get::<kilopascal>(),
            friction_angle: self.friction_angle.get::<degree>(),
        }
    }

    #[must_use]
    pub fn waste_depth(&self) -> Length {
        self.waste_depth
    }

    #[must_use]
    pub fn liner_thickness(&self) -> Length {
        self.liner_thickness
    }

    #[must_use]
    pub fn slope_angle(&self) -> Angle {
        self.slope_angle
    }

    #[must_use]
    pub fn permeability(&self) -> Velocity {
        self.permeability
    }

    #[must_use]
    pub fn rainfall(&self) -> Velocity {
        self.rainfall
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn unit_weight(&self) -> UnitWeight {
        self.unit_weight
    }

    #[must_use]
    pub fn cohesion(&self) -> Pressure {
        self.cohesion
    }

    #[must_use]
    pub fn friction_angle(&self) -> Angle {
        self.friction_angle
    }
}

impl TryFrom<InputParameters> for LandfillInputs {
    type Error = RangeError;

    fn try_from(params: InputParameters) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}
