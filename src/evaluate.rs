//! Evaluation of kernel operations on flat lists of components, as they
//! arrive from the command line.

use crate::{
    dispatch::{self, VectorOps},
    vector::{Vector2, Vector3},
};
use anyhow::{Result, bail};
use std::fmt;

/// A 2D or 3D vector whose dimensionality was decided by the number of
/// given components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyVector {
    Two(Vector2),
    Three(Vector3),
}

/// Two operands of the same dimensionality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperandPair {
    Two(Vector2, Vector2),
    Three(Vector3, Vector3),
}

/// Binary vector operations that are dispatched on dimensionality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl AnyVector {
    /// Interprets 2 or 3 components as a vector.
    pub fn from_components(components: &[f32]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Self::Two(Vector2::new(x, y))),
            [x, y, z] => Ok(Self::Three(Vector3::new(x, y, z))),
            _ => bail!(
                "Expected 2 or 3 vector components, got {}",
                components.len()
            ),
        }
    }

    /// The components of the vector.
    pub fn components(&self) -> &[f32] {
        match self {
            Self::Two(v) => v.as_array(),
            Self::Three(v) => v.as_array(),
        }
    }

    fn map(
        self,
        f2: impl FnOnce(Vector2) -> Vector2,
        f3: impl FnOnce(Vector3) -> Vector3,
    ) -> Self {
        match self {
            Self::Two(v) => Self::Two(f2(v)),
            Self::Three(v) => Self::Three(f3(v)),
        }
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.components())
    }
}

impl OperandPair {
    /// Splits 4 or 6 components into two vectors of equal dimensionality.
    pub fn from_components(components: &[f32]) -> Result<Self> {
        match *components {
            [ax, ay, bx, by] => Ok(Self::Two(Vector2::new(ax, ay), Vector2::new(bx, by))),
            [ax, ay, az, bx, by, bz] => Ok(Self::Three(
                Vector3::new(ax, ay, az),
                Vector3::new(bx, by, bz),
            )),
            _ => bail!(
                "Expected 4 components (two 2D vectors) or 6 components (two 3D vectors), got {}",
                components.len()
            ),
        }
    }

    /// Splits exactly 6 components into two 3D vectors.
    pub fn three_from_components(components: &[f32]) -> Result<(Vector3, Vector3)> {
        match Self::from_components(components) {
            Ok(Self::Three(a, b)) => Ok((a, b)),
            _ => bail!(
                "Expected 6 components (two 3D vectors), got {}",
                components.len()
            ),
        }
    }
}

impl BinaryOp {
    fn apply<V: VectorOps>(self, a: V, b: V) -> V {
        match self {
            Self::Add => dispatch::add(a, b),
            Self::Sub => dispatch::sub(a, b),
        }
    }
}

/// Adds or subtracts the two vectors given as 4 or 6 components.
pub fn binary(op: BinaryOp, components: &[f32]) -> Result<AnyVector> {
    log::trace!("Evaluating {op:?} on {} components", components.len());
    Ok(match OperandPair::from_components(components)? {
        OperandPair::Two(a, b) => AnyVector::Two(op.apply(a, b)),
        OperandPair::Three(a, b) => AnyVector::Three(op.apply(a, b)),
    })
}

/// Normalizes the vector given as 2 or 3 components.
pub fn normalize(components: &[f32]) -> Result<AnyVector> {
    log::trace!("Normalizing {} components", components.len());
    let vector = AnyVector::from_components(components)?;
    Ok(vector.map(dispatch::normalize, dispatch::normalize))
}

/// Scales the vector given as 2 or 3 components by `factor`.
pub fn scale(components: &[f32], factor: f32) -> Result<AnyVector> {
    log::trace!("Scaling {} components by {factor}", components.len());
    let vector = AnyVector::from_components(components)?;
    Ok(vector.map(
        |v| dispatch::scale(v, factor),
        |v| dispatch::scale(v, factor),
    ))
}

/// Computes the magnitude of the vector given as 2 or 3 components.
pub fn magnitude(components: &[f32]) -> Result<f32> {
    log::trace!("Computing magnitude of {} components", components.len());
    Ok(match AnyVector::from_components(components)? {
        AnyVector::Two(v) => dispatch::magnitude(v),
        AnyVector::Three(v) => dispatch::magnitude(v),
    })
}

/// Computes the dot product of the two 3D vectors given as 6 components.
pub fn dot(components: &[f32]) -> Result<f32> {
    log::trace!("Computing dot product of {} components", components.len());
    let (a, b) = OperandPair::three_from_components(components)?;
    Ok(dispatch::dot(a, b))
}

/// Computes the cross product of the two 3D vectors given as 6 components.
pub fn cross(components: &[f32]) -> Result<Vector3> {
    log::trace!("Computing cross product of {} components", components.len());
    let (a, b) = OperandPair::three_from_components(components)?;
    Ok(dispatch::cross(a, b))
}

/// Writes components separated by single spaces.
pub fn write_components(f: &mut impl fmt::Write, components: &[f32]) -> fmt::Result {
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{component}")?;
    }
    Ok(())
}
