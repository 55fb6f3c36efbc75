//! Free functions that work uniformly on [`Vector2`] and [`Vector3`].
//!
//! The implementation is picked at compile time from the static type of the
//! arguments. [`VectorOps`] is sealed, so the set of supported types is
//! exactly the two vector types of this crate.

use crate::vector::{Vector2, Vector3};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Vector2 {}
    impl Sealed for super::Vector3 {}
}

/// Arithmetic shared by the 2- and 3-component vector types.
pub trait VectorOps: sealed::Sealed + Copy {
    /// Component-wise sum of `a` and `b`.
    fn sum(a: Self, b: Self) -> Self;

    /// Component-wise difference `a - b`.
    fn difference(a: Self, b: Self) -> Self;

    /// The vector divided by its magnitude, or unchanged if the magnitude
    /// is zero.
    fn normalized(self) -> Self;

    /// The vector with every component multiplied by `factor`.
    fn scaled(self, factor: f32) -> Self;

    /// The Euclidean norm of the vector.
    fn magnitude(self) -> f32;
}

macro_rules! impl_vector_ops {
    ($t:ty) => {
        impl VectorOps for $t {
            #[inline]
            fn sum(a: Self, b: Self) -> Self {
                a + b
            }

            #[inline]
            fn difference(a: Self, b: Self) -> Self {
                a - b
            }

            #[inline]
            fn normalized(self) -> Self {
                <$t>::normalized(&self)
            }

            #[inline]
            fn scaled(self, factor: f32) -> Self {
                <$t>::scaled(&self, factor)
            }

            #[inline]
            fn magnitude(self) -> f32 {
                <$t>::magnitude(&self)
            }
        }
    };
}

impl_vector_ops!(Vector2);
impl_vector_ops!(Vector3);

/// Adds two vectors component-wise.
#[inline]
pub fn add<V: VectorOps>(a: V, b: V) -> V {
    V::sum(a, b)
}

/// Subtracts `b` from `a` component-wise.
#[inline]
pub fn sub<V: VectorOps>(a: V, b: V) -> V {
    V::difference(a, b)
}

/// Divides the vector by its magnitude.
///
/// A vector with zero magnitude is returned unchanged rather than divided
/// by zero. Callers that need to detect that case should check
/// [`magnitude`] first.
#[inline]
pub fn normalize<V: VectorOps>(v: V) -> V {
    v.normalized()
}

/// Multiplies every component of the vector by `factor`.
#[inline]
pub fn scale<V: VectorOps>(v: V, factor: f32) -> V {
    v.scaled(factor)
}

/// Computes the Euclidean norm of the vector.
#[inline]
pub fn magnitude<V: VectorOps>(v: V) -> f32 {
    v.magnitude()
}

/// Computes the dot product of two 3D vectors.
#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(&b)
}

/// Computes the right-handed cross product of two 3D vectors.
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(&b)
}
