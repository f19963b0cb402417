#[cfg(test)]
#[path = "../../tests/unit/utils/types_test.rs"]
mod types_test;

use nalgebra::{DMatrix, DVector};

/// Alias to a scalar floating type.
pub type Float = f64;

/// A point in the search space.
pub type Point = DVector<Float>;

/// A dense square matrix used for covariance and its decomposition.
pub type Matrix = DMatrix<Float>;

/// Converts a point into a plain vector.
pub fn point_to_vec(point: &Point) -> Vec<Float> {
    point.iter().copied().collect()
}

/// Converts a matrix into a vector of rows.
pub fn matrix_to_rows(matrix: &Matrix) -> Vec<Vec<Float>> {
    matrix.row_iter().map(|row| row.iter().copied().collect()).collect()
}
