//! Quantity aliases and unit helpers not provided directly by `uom`.
//!
//! Landfill practice quotes several quantities per day (rainfall in mm/day,
//! permeability in m/day, leachate in m³/day) and unit weights in kN/m³.
//! `uom` stores everything in base SI, so these helpers convert at the edges.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length, Pressure, Time, Velocity, Volume, VolumeRate},
        force::kilonewton,
        length::{meter, millimeter},
        pressure::kilopascal,
        time::day,
        volume::cubic_meter,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Unit weight (weight per unit volume), N/m³ in SI.
pub type UnitWeight = Quantity<ISQ<N2, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Settlement per unit of applied stress, m/Pa in SI.
///
/// Relates an applied vertical stress to the resulting settlement with
/// `s = k⋅σ`.
pub type SettlementCoefficient = Quantity<ISQ<P2, N1, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

fn one_day() -> Time {
    Time::new::<day>(1.0)
}

fn one_cubic_meter() -> Volume {
    Volume::new::<cubic_meter>(1.0)
}

/// Creates a [`UnitWeight`] from a value in kN/m³.
#[must_use]
pub fn unit_weight_from_kn_per_m3(value: f64) -> UnitWeight {
    Force::new::<kilonewton>(value) / one_cubic_meter()
}

/// Returns a [`UnitWeight`] in kN/m³.
#[must_use]
pub fn kn_per_m3(unit_weight: UnitWeight) -> f64 {
    (unit_weight * one_cubic_meter()).get::<kilonewton>()
}

/// Creates a [`SettlementCoefficient`] from a value in m/kPa.
#[must_use]
pub fn settlement_coefficient_from_m_per_kpa(value: f64) -> SettlementCoefficient {
    Length::new::<meter>(value) / Pressure::new::<kilopascal>(1.0)
}

/// Returns a [`SettlementCoefficient`] in m/kPa.
#[must_use]
pub fn m_per_kpa(coefficient: SettlementCoefficient) -> f64 {
    (coefficient * Pressure::new::<kilopascal>(1.0)).get::<meter>()
}

/// Creates a [`Velocity`] from a depth in millimeters per day.
#[must_use]
pub fn mm_per_day(value: f64) -> Velocity {
    Length::new::<millimeter>(value) / one_day()
}

/// Creates a [`Velocity`] from a length in meters per day.
#[must_use]
pub fn m_per_day(value: f64) -> Velocity {
    Length::new::<meter>(value) / one_day()
}

/// Returns a [`Velocity`] in millimeters per day.
#[must_use]
pub fn in_mm_per_day(velocity: Velocity) -> f64 {
    (velocity * one_day()).get::<millimeter>()
}

/// Returns a [`Velocity`] in meters per day.
#[must_use]
pub fn in_m_per_day(velocity: Velocity) -> f64 {
    (velocity * one_day()).get::<meter>()
}

/// Returns a [`VolumeRate`] in cubic meters per day.
#[must_use]
pub fn in_m3_per_day(rate: VolumeRate) -> f64 {
    (rate * one_day()).get::<cubic_meter>()
}

/// Creates a [`VolumeRate`] from a value in cubic meters per day.
#[must_use]
pub fn m3_per_day(value: f64) -> VolumeRate {
    Volume::new::<cubic_meter>(value) / one_day()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Area, Velocity},
        area::square_meter,
        velocity::meter_per_second,
    };

    #[test]
    fn unit_weight_conversions() {
        let gamma = unit_weight_from_kn_per_m3(12.0);
        assert_relative_eq!(gamma.value, 12_000.0);
        assert_relative_eq!(kn_per_m3(gamma), 12.0);
    }

    #[test]
    fn unit_weight_times_depth_is_a_pressure() {
        let stress: Pressure = unit_weight_from_kn_per_m3(12.0) * Length::new::<meter>(20.0);
        assert_relative_eq!(stress.get::<kilopascal>(), 240.0);
    }

    #[test]
    fn settlement_coefficient_conversions() {
        let k = settlement_coefficient_from_m_per_kpa(0.02);
        assert_relative_eq!(m_per_kpa(k), 0.02);

        let settlement: Length = k * Pressure::new::<kilopascal>(240.0);
        assert_relative_eq!(settlement.get::<meter>(), 4.8);
    }

    #[test]
    fn daily_rates() {
        let rainfall = mm_per_day(86_400.0);
        assert_relative_eq!(rainfall.get::<meter_per_second>(), 0.001);
        assert_relative_eq!(in_mm_per_day(rainfall), 86_400.0);

        let permeability: Velocity = m_per_day(0.001);
        assert_relative_eq!(in_m_per_day(permeability), 0.001);

        let volume_rate: VolumeRate = mm_per_day(10.0) * Area::new::<square_meter>(10_000.0);
        assert_relative_eq!(in_m3_per_day(volume_rate), 100.0, max_relative = 1e-12);
        assert_relative_eq!(in_m3_per_day(m3_per_day(3.5)), 3.5, max_relative = 1e-12);
    }
}
