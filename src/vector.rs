//! Vectors.
//!
//! Every vector type owns a single `[f32; N]` array. The named accessors
//! (Cartesian, spherical or color), indexing and [`as_array`](Vector3::as_array)
//! are all views of that one array, so they can never disagree.

use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    components: [f32; 2],
}

/// A 3-dimensional vector.
///
/// Besides the Cartesian `x`, `y` and `z` names, the components can be
/// accessed under the spherical names `radius`, `theta` and `phi`.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    components: [f32; 3],
}

/// A 4-dimensional vector.
///
/// This type is storage only and has no arithmetic. Besides the `x`, `y`,
/// `z` and `w` names, the components can be accessed as the color channels
/// `r`, `g`, `b` and `a`.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    components: [f32; 4],
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { components: [x, y] }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// The components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 2] {
        &self.components
    }

    /// The components as a mutable array.
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [f32; 2] {
        &mut self.components
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the Euclidean norm of the vector.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the square of the Euclidean norm of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Divides the vector by its magnitude. A zero vector is returned
    /// unchanged.
    ///
    /// The magnitude is computed in `f32` from the squared components, so
    /// very large vectors (squared magnitude overflowing to infinity) come
    /// out as zero and very small ones (squared magnitude underflowing to
    /// zero) come out unchanged rather than with unit length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude != 0.0 {
            self.mapped(|component| component / magnitude)
        } else {
            *self
        }
    }

    /// Multiplies each component by the given factor.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        self.mapped(|component| component * factor)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(components: [f32; 2]) -> Self {
        Self { components }
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.components
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x() + b.x(), a.y() + b.y())
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x() - b.x(), a.y() - b.y())
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| { b.scaled(*a) });

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    *a = a.scaled(*b);
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| { val.mapped(|c| -c) });

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl_component_approx!(Vector2);

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// The radial component (same storage as x).
    #[inline]
    pub const fn radius(&self) -> f32 {
        self.components[0]
    }

    /// The polar angle component (same storage as y).
    #[inline]
    pub const fn theta(&self) -> f32 {
        self.components[1]
    }

    /// The azimuthal angle component (same storage as z).
    #[inline]
    pub const fn phi(&self) -> f32 {
        self.components[2]
    }

    /// A mutable reference to the radial component (same storage as x).
    #[inline]
    pub const fn radius_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the polar angle component (same storage as y).
    #[inline]
    pub const fn theta_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the azimuthal angle component (same storage as z).
    #[inline]
    pub const fn phi_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// The components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 3] {
        &self.components
    }

    /// The components as a mutable array.
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [f32; 3] {
        &mut self.components
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Computes the Euclidean norm of the vector.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the square of the Euclidean norm of the vector.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Divides the vector by its magnitude. A zero vector is returned
    /// unchanged.
    ///
    /// The magnitude is computed in `f32` from the squared components, so
    /// very large vectors (squared magnitude overflowing to infinity) come
    /// out as zero and very small ones (squared magnitude underflowing to
    /// zero) come out unchanged rather than with unit length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude != 0.0 {
            self.mapped(|component| component / magnitude)
        } else {
            *self
        }
    }

    /// Multiplies each component by the given factor.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        self.mapped(|component| component * factor)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(components: [f32; 3]) -> Self {
        Self { components }
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.components
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| { a.scaled(*b) });

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b.scaled(*a) });

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    *a = a.scaled(*b);
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| { val.mapped(|c| -c) });

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl_component_approx!(Vector3);

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            components: [x, y, z, w],
        }
    }

    /// Creates a new vector from the given color channels.
    #[inline]
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r, g, b, a)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.components[3]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.components[3]
    }

    /// The red channel (same storage as x).
    #[inline]
    pub const fn r(&self) -> f32 {
        self.components[0]
    }

    /// The green channel (same storage as y).
    #[inline]
    pub const fn g(&self) -> f32 {
        self.components[1]
    }

    /// The blue channel (same storage as z).
    #[inline]
    pub const fn b(&self) -> f32 {
        self.components[2]
    }

    /// The alpha channel (same storage as w).
    #[inline]
    pub const fn a(&self) -> f32 {
        self.components[3]
    }

    /// A mutable reference to the red channel (same storage as x).
    #[inline]
    pub const fn r_mut(&mut self) -> &mut f32 {
        &mut self.components[0]
    }

    /// A mutable reference to the green channel (same storage as y).
    #[inline]
    pub const fn g_mut(&mut self) -> &mut f32 {
        &mut self.components[1]
    }

    /// A mutable reference to the blue channel (same storage as z).
    #[inline]
    pub const fn b_mut(&mut self) -> &mut f32 {
        &mut self.components[2]
    }

    /// A mutable reference to the alpha channel (same storage as w).
    #[inline]
    pub const fn a_mut(&mut self) -> &mut f32 {
        &mut self.components[3]
    }

    /// The components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.components
    }

    /// The components as a mutable array.
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [f32; 4] {
        &mut self.components
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(components: [f32; 4]) -> Self {
        Self { components }
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.components
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl_component_approx!(Vector4);

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}
