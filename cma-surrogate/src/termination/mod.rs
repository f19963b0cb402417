//! The termination module contains logic which defines when to stop the optimization.

use crate::utils::{Float, compare_floats_refs};

/// A trait which specifies criteria when optimization should stop searching for improved solution.
pub trait Termination {
    /// Returns true if termination condition is met. Called once per closed generation.
    fn is_termination(&mut self, generation: usize, best_fitness: Float) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, generation: usize, best_fitness: Float) -> Float;
}

mod convergence;
pub use self::convergence::Convergence;

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod target_proximity;
pub use self::target_proximity::TargetProximity;

/// A trait which encapsulates multiple termination criteria.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&mut self, generation: usize, best_fitness: Float) -> bool {
        // NOTE all criteria must observe each generation
        self.terminations.iter_mut().fold(false, |acc, t| t.is_termination(generation, best_fitness) || acc)
    }

    fn estimate(&self, generation: usize, best_fitness: Float) -> Float {
        self.terminations
            .iter()
            .map(|t| t.estimate(generation, best_fitness))
            .max_by(compare_floats_refs)
            .unwrap_or(0.)
    }
}
