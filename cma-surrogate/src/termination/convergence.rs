#[cfg(test)]
#[path = "../../tests/unit/termination/convergence_test.rs"]
mod convergence_test;

use super::*;

/// Stops when best fitness of two consecutive generations differs less than given distance.
pub struct Convergence {
    distance: Float,
    last_best: Option<Float>,
}

impl Convergence {
    /// Creates a new instance of `Convergence`.
    pub fn new(distance: Float) -> Self {
        Self { distance, last_best: None }
    }
}

impl Termination for Convergence {
    fn is_termination(&mut self, _: usize, best_fitness: Float) -> bool {
        match self.last_best.replace(best_fitness) {
            Some(last_best) => (last_best - best_fitness).abs() < self.distance,
            None => false,
        }
    }

    fn estimate(&self, _: usize, _: Float) -> Float {
        0.
    }
}
