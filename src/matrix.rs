//! Matrices.

use crate::vector::Vector4;
use bytemuck::{Pod, Zeroable};

/// A 4x4 matrix stored as four [`Vector4`] columns.
///
/// The memory layout is 16 tightly packed `f32`s in column-major order, so
/// [`as_array`](Self::as_array) can be handed directly to graphics APIs
/// expecting column-major matrices.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    columns: [Vector4; 4],
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut m = Self::zeros();
        *m.columns[0].x_mut() = diagonal.x();
        *m.columns[1].y_mut() = diagonal.y();
        *m.columns[2].z_mut() = diagonal.z();
        *m.columns[3].w_mut() = diagonal.w();
        m
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self {
            columns: [column_1, column_2, column_3, column_4],
        }
    }

    /// Creates a matrix from 16 elements in column-major order.
    #[inline]
    pub fn from_column_major(elements: [f32; 16]) -> Self {
        bytemuck::cast(elements)
    }

    /// The first column of the matrix.
    #[inline]
    pub const fn column_1(&self) -> &Vector4 {
        &self.columns[0]
    }

    /// The second column of the matrix.
    #[inline]
    pub const fn column_2(&self) -> &Vector4 {
        &self.columns[1]
    }

    /// The third column of the matrix.
    #[inline]
    pub const fn column_3(&self) -> &Vector4 {
        &self.columns[2]
    }

    /// The fourth column of the matrix.
    #[inline]
    pub const fn column_4(&self) -> &Vector4 {
        &self.columns[3]
    }

    /// The column with index `j`.
    ///
    /// # Panics
    /// If `j` is not below 4.
    #[inline]
    pub const fn column(&self, j: usize) -> &Vector4 {
        &self.columns[j]
    }

    /// All four columns, in order.
    #[inline]
    pub const fn columns(&self) -> &[Vector4; 4] {
        &self.columns
    }

    /// All four columns, mutably.
    #[inline]
    pub const fn columns_mut(&mut self) -> &mut [Vector4; 4] {
        &mut self.columns
    }

    /// Sets the first column of the matrix to the given column.
    #[inline]
    pub const fn set_column_1(&mut self, column: Vector4) {
        self.columns[0] = column;
    }

    /// Sets the second column of the matrix to the given column.
    #[inline]
    pub const fn set_column_2(&mut self, column: Vector4) {
        self.columns[1] = column;
    }

    /// Sets the third column of the matrix to the given column.
    #[inline]
    pub const fn set_column_3(&mut self, column: Vector4) {
        self.columns[2] = column;
    }

    /// Sets the fourth column of the matrix to the given column.
    #[inline]
    pub const fn set_column_4(&mut self, column: Vector4) {
        self.columns[3] = column;
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.columns[j][i]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        &mut self.columns[j][i]
    }

    /// The 16 elements in column-major order. This is a view of the matrix
    /// storage, not a copy.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// The 16 elements in column-major order, mutably.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(elements: [f32; 16]) -> Self {
        Self::from_column_major(elements)
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        bytemuck::cast(matrix)
    }
}

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(ca, cb)| approx::AbsDiffEq::abs_diff_eq(ca, cb, epsilon))
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(ca, cb)| approx::RelativeEq::relative_eq(ca, cb, epsilon, max_relative))
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn counting_matrix() -> Matrix4 {
        Matrix4::from_columns(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
            Vector4::new(13.0, 14.0, 15.0, 16.0),
        )
    }

    #[test]
    fn creating_matrix4_identity_gives_identity_matrix() {
        let identity = Matrix4::identity();

        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(identity.element(i, j), expected);
            }
        }
    }

    #[test]
    fn creating_matrix4_zeros_gives_zero_matrix() {
        assert!(Matrix4::zeros().as_array().iter().all(|&e| e == 0.0));
        assert_eq!(Matrix4::zeros(), Matrix4::default());
    }

    #[test]
    fn creating_matrix4_from_diagonal_works() {
        let matrix = Matrix4::from_diagonal(&Vector4::new(2.0, 3.0, 4.0, 5.0));

        assert_eq!(matrix.column_1().x(), 2.0);
        assert_eq!(matrix.column_2().y(), 3.0);
        assert_eq!(matrix.column_3().z(), 4.0);
        assert_eq!(matrix.column_4().w(), 5.0);

        assert_eq!(matrix.column_1().y(), 0.0);
        assert_eq!(matrix.column_4().x(), 0.0);
    }

    #[test]
    fn creating_matrix4_from_columns_works() {
        let matrix = counting_matrix();

        assert_eq!(matrix.column_1(), &Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(matrix.column_2(), &Vector4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(matrix.column_3(), &Vector4::new(9.0, 10.0, 11.0, 12.0));
        assert_eq!(matrix.column_4(), &Vector4::new(13.0, 14.0, 15.0, 16.0));
        assert_eq!(matrix.column(2), matrix.column_3());
    }

    #[test]
    fn flat_view_is_column_major() {
        let matrix = counting_matrix();
        let expected: [f32; 16] = core::array::from_fn(|k| (k + 1) as f32);

        assert_eq!(matrix.as_array(), &expected);
        assert_eq!(Matrix4::from_column_major(expected), matrix);
        assert_eq!(<[f32; 16]>::from(matrix), expected);
    }

    #[test]
    fn element_indexing_is_row_then_column() {
        let matrix = counting_matrix();
        assert_eq!(matrix.element(0, 0), 1.0);
        assert_eq!(matrix.element(1, 0), 2.0);
        assert_eq!(matrix.element(0, 1), 5.0);
        assert_eq!(matrix.element(3, 3), 16.0);
    }

    #[test]
    fn writes_through_any_view_are_visible_in_all_views() {
        let mut matrix = Matrix4::zeros();

        *matrix.element_mut(2, 1) = 7.0;
        assert_eq!(matrix.as_array()[4 + 2], 7.0);
        assert_eq!(matrix.columns()[1].z(), 7.0);

        matrix.as_array_mut()[15] = 3.0;
        assert_eq!(matrix.column_4().w(), 3.0);

        matrix.columns_mut()[0] = Vector4::same(1.0);
        assert_eq!(&matrix.as_array()[..4], &[1.0; 4]);
    }

    #[test]
    fn setting_matrix4_columns_works() {
        let mut matrix = Matrix4::identity();
        let column = Vector4::new(9.0, 8.0, 7.0, 6.0);

        matrix.set_column_1(column);
        matrix.set_column_2(column);
        matrix.set_column_3(column);
        matrix.set_column_4(column);

        assert!(matrix.columns().iter().all(|c| c == &column));
    }

    #[test]
    fn matrix4_is_sixteen_packed_floats() {
        assert_eq!(size_of::<Matrix4>(), 16 * size_of::<f32>());
        assert_eq!(bytemuck::bytes_of(&Matrix4::identity()).len(), 64);
    }

    #[test]
    fn approximate_comparison_works() {
        let mut nearly = counting_matrix();
        *nearly.element_mut(0, 0) += 1e-7;
        assert_abs_diff_eq!(nearly, counting_matrix(), epsilon = 1e-6);
    }
}
