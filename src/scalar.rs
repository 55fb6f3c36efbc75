//! Scalar helpers.

/// Computes the cotangent of the given angle in radians as `1 / tan(angle)`.
///
/// Near the zeros of `tan` the result grows without bound, and at an exact
/// zero it is infinite. This is not special-cased.
#[inline]
pub fn cotan(angle: f32) -> f32 {
    1.0 / angle.tan()
}

/// Returns `min` if `value < min`, `max` if `value > max` and `value`
/// otherwise.
///
/// The range is not validated. The comparisons are evaluated in the order
/// above, so when `min > max` a value that is not below `min` yields `max`.
/// Unlike [`f32::clamp`] this never panics, and a NaN `value` passes through
/// unchanged.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

    #[test]
    fn cotan_of_special_angles_works() {
        assert_abs_diff_eq!(cotan(FRAC_PI_4), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cotan(FRAC_PI_6), 3.0_f32.sqrt(), epsilon = 1e-5);
        assert_abs_diff_eq!(cotan(FRAC_PI_2), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn cotan_of_zero_is_infinite() {
        assert_eq!(cotan(0.0), f32::INFINITY);
        assert_eq!(cotan(-0.0), f32::NEG_INFINITY);
    }

    #[test]
    fn clamp_inside_range_returns_value() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
    }

    #[test]
    fn clamp_outside_range_returns_bound() {
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(-1.5_f32, -1.0, 1.0), -1.0);
    }

    #[test]
    fn clamp_with_inverted_range_follows_comparison_order() {
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(20, 10, 0), 0);
        assert_eq!(clamp(-5, 10, 0), 10);
    }

    #[test]
    fn clamp_passes_nan_through() {
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
    }
}
