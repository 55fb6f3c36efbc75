//! Angle conversions and units.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    f32::consts::{FRAC_1_PI, PI},
    ops::{Add, Mul, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32;
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

/// Converts an angle in degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 * FRAC_1_PI)
}

impl Angle for Degrees {
    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f32 {
        self.0
    }

    fn radians(self) -> f32 {
        to_radians(self.0)
    }
}

impl Angle for Radians {
    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f32 {
        to_degrees(self.0)
    }

    fn radians(self) -> f32 {
        self.0
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(to_degrees(rad.0))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(to_radians(deg.0))
    }
}

impl<A: Angle> Add<A> for Degrees {
    type Output = Self;
    fn add(self, rhs: A) -> Self {
        Self(self.0 + rhs.degrees())
    }
}

impl<A: Angle> Add<A> for Radians {
    type Output = Self;
    fn add(self, rhs: A) -> Self {
        Self(self.0 + rhs.radians())
    }
}

impl<A: Angle> Sub<A> for Degrees {
    type Output = Self;
    fn sub(self, rhs: A) -> Self {
        Self(self.0 - rhs.degrees())
    }
}

impl<A: Angle> Sub<A> for Radians {
    type Output = Self;
    fn sub(self, rhs: A) -> Self {
        Self(self.0 - rhs.radians())
    }
}

impl Mul<f32> for Degrees {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<f32> for Radians {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl PartialEq<Radians> for Degrees {
    fn eq(&self, rhs: &Radians) -> bool {
        self.0 == rhs.degrees()
    }
}

impl PartialEq<Degrees> for Radians {
    fn eq(&self, rhs: &Degrees) -> bool {
        self.0 == rhs.radians()
    }
}

impl PartialOrd<Radians> for Degrees {
    fn partial_cmp(&self, rhs: &Radians) -> Option<Ordering> {
        self.0.partial_cmp(&rhs.degrees())
    }
}

impl PartialOrd<Degrees> for Radians {
    fn partial_cmp(&self, rhs: &Degrees) -> Option<Ordering> {
        self.0.partial_cmp(&rhs.radians())
    }
}

impl AbsDiffEq for Degrees {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl AbsDiffEq for Radians {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl RelativeEq for Degrees {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.0, &other.0, epsilon, max_relative)
    }
}

impl RelativeEq for Radians {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.0, &other.0, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn converting_special_angles_to_radians_works() {
        assert_abs_diff_eq!(to_radians(0.0), 0.0);
        assert_abs_diff_eq!(to_radians(90.0), PI / 2.0);
        assert_abs_diff_eq!(to_radians(180.0), PI);
        assert_abs_diff_eq!(to_radians(360.0), 2.0 * PI);
        assert_abs_diff_eq!(to_radians(-270.0), -3.0 * PI / 2.0);
    }

    #[test]
    fn converting_special_angles_to_degrees_works() {
        assert_abs_diff_eq!(to_degrees(0.0), 0.0);
        assert_abs_diff_eq!(to_degrees(PI / 2.0), 90.0);
        assert_abs_diff_eq!(to_degrees(PI), 180.0);
        assert_abs_diff_eq!(to_degrees(-2.0 * PI), -360.0, epsilon = 1e-4);
    }

    #[test]
    fn conversions_do_not_wrap_angles() {
        assert_abs_diff_eq!(to_degrees(3.0 * PI), 540.0, epsilon = 1e-4);
        assert_abs_diff_eq!(to_radians(720.0), 4.0 * PI, epsilon = 1e-5);
    }

    #[test]
    fn unit_conversions_agree_with_free_functions() {
        assert_eq!(Degrees(45.0).radians(), to_radians(45.0));
        assert_eq!(Radians(1.0).degrees(), to_degrees(1.0));
        assert_abs_diff_eq!(Degrees(180.0).as_radians(), Radians(PI));
        assert_abs_diff_eq!(Radians(PI).as_degrees(), Degrees(180.0), epsilon = 1e-4);
    }

    #[test]
    fn degree_and_radian_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Radians(1.5) * 2.0, Radians(3.0));
    }

    #[test]
    fn mixed_degree_radian_ops_work() {
        assert_abs_diff_eq!(Degrees(45.0) + Radians(PI / 2.0), Degrees(135.0), epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(PI / 2.0) - Degrees(45.0), Radians(PI / 4.0), epsilon = 1e-6);

        assert_eq!(Degrees(0.0), Radians(0.0));
        assert!(Degrees(42.0) > Radians(0.0));
        assert!(Radians(PI) < Degrees(360.0));
    }
}
