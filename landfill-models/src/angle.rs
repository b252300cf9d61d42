use std::f64::consts::FRAC_PI_2;

use uom::si::{angle::radian, f64::Angle};

/// Radians within which an angle counts as sitting on 0° or 90°.
///
/// `tan(π/2)` evaluates to a large finite number in floating point, so the
/// singularity has to be caught before the trig call.
const TOLERANCE: f64 = 1e-9;

/// Returns `true` if `angle` lies strictly inside (0°, 90°).
pub(crate) fn is_acute(angle: Angle) -> bool {
    let theta = angle.get::<radian>();
    theta > TOLERANCE && theta < FRAC_PI_2 - TOLERANCE
}

/// Returns `true` if `angle` lies in [0°, 90°).
pub(crate) fn is_below_right_angle(angle: Angle) -> bool {
    let theta = angle.get::<radian>();
    theta >= 0.0 && theta < FRAC_PI_2 - TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::angle::degree;

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn acute_excludes_both_ends() {
        assert!(!is_acute(deg(0.0)));
        assert!(is_acute(deg(0.001)));
        assert!(is_acute(deg(89.999)));
        assert!(!is_acute(deg(90.0)));
        assert!(!is_acute(deg(-10.0)));
        assert!(!is_acute(deg(f64::NAN)));
    }

    #[test]
    fn below_right_angle_includes_zero() {
        assert!(is_below_right_angle(deg(0.0)));
        assert!(is_below_right_angle(deg(45.0)));
        assert!(!is_below_right_angle(deg(90.0)));
        assert!(!is_below_right_angle(deg(-1.0)));
    }
}
