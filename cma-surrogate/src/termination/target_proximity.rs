#[cfg(test)]
#[path = "../../tests/unit/termination/target_proximity_test.rs"]
mod target_proximity_test;

use super::*;

/// Provides way to stop algorithm when fitness close enough to the target is found.
pub struct TargetProximity {
    target_fitness: Float,
    accuracy: Float,
}

impl TargetProximity {
    /// Creates a new instance of `TargetProximity`.
    pub fn new(target_fitness: Float, accuracy: Float) -> Self {
        Self { target_fitness, accuracy }
    }
}

impl Termination for TargetProximity {
    fn is_termination(&mut self, _: usize, best_fitness: Float) -> bool {
        (best_fitness - self.target_fitness).abs() < self.accuracy
    }

    fn estimate(&self, _: usize, _: Float) -> Float {
        0.
    }
}
