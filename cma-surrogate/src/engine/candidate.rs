use crate::utils::{Float, Point};

/// A valid point together with its resolved fitness and constraint violation. Feasibility and
/// classifier predictions travel through the protocol as `(Point, bool)` pairs.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// A point in the search space.
    pub point: Point,
    /// True fitness or its surrogate estimation.
    pub fitness: Option<Float>,
    /// Constraint violation, zero for feasible points.
    pub penalty: Float,
}

impl Candidate {
    /// Creates a candidate with nothing known except its location.
    pub fn new(point: Point) -> Self {
        Self { point, fitness: None, penalty: 0. }
    }

    /// Sets fitness value.
    pub fn with_fitness(mut self, fitness: Float) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Sets constraint violation.
    pub fn with_penalty(mut self, penalty: Float) -> Self {
        self.penalty = penalty;
        self
    }
}
