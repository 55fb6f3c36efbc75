//! Small fixed-size vectors, column-major 4x4 matrices and angle helpers.

#[macro_use]
mod macros;

pub mod angle;
pub mod dispatch;
pub mod evaluate;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use angle::{Angle, Degrees, Radians, to_degrees, to_radians};
pub use dispatch::{VectorOps, add, cross, dot, magnitude, normalize, scale, sub};
pub use matrix::Matrix4;
pub use scalar::{clamp, cotan};
pub use vector::{Vector2, Vector3, Vector4};
