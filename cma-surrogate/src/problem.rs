//! An interface of the optimized problem.

use crate::utils::{Float, Point};

/// A problem which is minimized. Calls are expected to be expensive and may be evaluated in
/// parallel.
pub trait Problem: Send + Sync {
    /// Returns true fitness of the point.
    fn fitness(&self, point: &Point) -> Float;

    /// Returns true if the point satisfies all constraints.
    fn is_feasible(&self, point: &Point) -> bool;

    /// Returns the known optimal fitness.
    fn optimum_fitness(&self) -> Float;

    /// Returns constraint violation of the point: zero for feasible points.
    fn penalty(&self, _point: &Point) -> Float {
        0.
    }
}
