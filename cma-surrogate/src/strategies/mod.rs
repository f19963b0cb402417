//! Constraint resolution strategies which wrap the CMA-ES engine into an ask/tell protocol.
//!
//! A generation is driven by the following calls:
//! 1. `ask_pending_solutions` / `tell_feasibility` until `tell_feasibility` reports readiness;
//! 2. `ask_valid_solutions` and `tell_fitness` with evaluated valid points;
//! 3. `ask_a_posteriori_solutions` and `tell_a_posteriori_feasibility` which close the generation.
//!
//! Calls out of this order are rejected with `OptimizationError::ContractViolation`.

use crate::algorithms::math::get_mean_iter;
use crate::engine::{Candidate, CmaEs};
use crate::metrics::ConfusionMatrix;
use crate::models::{FeasibilityModel, FitnessModel};
use crate::telemetry::{GenerationRecord, RunConstants};
use crate::utils::*;

mod generation;
pub(crate) use self::generation::{GenerationState, Phase};

mod unconstrained;
pub use self::unconstrained::Unconstrained;

mod rsvc;
pub use self::rsvc::{ClassifierPreFilter, RotationFrame};

mod svr;
pub use self::svr::RegressionSurrogate;

/// A driver interface of an optimization strategy.
pub trait AskTell {
    /// Returns points which need a true feasibility check.
    fn ask_pending_solutions(&mut self) -> OptimizationResult<Vec<Point>>;

    /// Accepts true feasibility of pending points. Returns true when enough valid points are
    /// collected for the generation.
    fn tell_feasibility(&mut self, results: Vec<(Point, bool)>) -> OptimizationResult<bool>;

    /// Returns valid points which need fitness evaluation.
    fn ask_valid_solutions(&self) -> &[Point];

    /// Accepts evaluated valid points, updates the distribution and returns the best point of
    /// the generation.
    fn tell_fitness(&mut self, evaluated: Vec<Candidate>) -> OptimizationResult<(Point, Float)>;

    /// Returns the best true evaluated point of the last updated generation.
    fn ask_best_solution(&self) -> Option<(&Point, Float)>;

    /// Returns points with classifier predictions made during the generation, in order.
    fn ask_a_posteriori_solutions(&self) -> &[(Point, bool)];

    /// Accepts true feasibility of a-posteriori points in the order they were listed and closes
    /// the generation.
    fn tell_a_posteriori_feasibility(&mut self, actual: &[bool]) -> OptimizationResult<ConfusionMatrix>;

    /// Returns the record of the last closed generation.
    fn ask_statistics(&self) -> Option<&GenerationRecord>;

    /// Returns values which stay constant during the run.
    fn run_constants(&self) -> RunConstants;

    /// Returns the underlying engine.
    fn engine(&self) -> &CmaEs;
}

/// A closed set of constraint resolution strategies.
pub enum ResolutionStrategy<C, R>
where
    C: FeasibilityModel,
    R: FitnessModel,
{
    /// Plain CMA-ES with accept/reject feasibility resampling.
    Unconstrained(Unconstrained),
    /// CMA-ES with a feasibility classifier filtering candidates.
    ClassifierPreFilter(ClassifierPreFilter<C>),
    /// CMA-ES with a fitness regression surrogate and penalty.
    RegressionSurrogate(RegressionSurrogate<R>),
}

macro_rules! dispatch {
    ($self:ident, $strategy:ident => $body:expr) => {
        match $self {
            ResolutionStrategy::Unconstrained($strategy) => $body,
            ResolutionStrategy::ClassifierPreFilter($strategy) => $body,
            ResolutionStrategy::RegressionSurrogate($strategy) => $body,
        }
    };
}

impl<C, R> AskTell for ResolutionStrategy<C, R>
where
    C: FeasibilityModel,
    R: FitnessModel,
{
    fn ask_pending_solutions(&mut self) -> OptimizationResult<Vec<Point>> {
        dispatch!(self, strategy => strategy.ask_pending_solutions())
    }

    fn tell_feasibility(&mut self, results: Vec<(Point, bool)>) -> OptimizationResult<bool> {
        dispatch!(self, strategy => strategy.tell_feasibility(results))
    }

    fn ask_valid_solutions(&self) -> &[Point] {
        dispatch!(self, strategy => strategy.ask_valid_solutions())
    }

    fn tell_fitness(&mut self, evaluated: Vec<Candidate>) -> OptimizationResult<(Point, Float)> {
        dispatch!(self, strategy => strategy.tell_fitness(evaluated))
    }

    fn ask_best_solution(&self) -> Option<(&Point, Float)> {
        dispatch!(self, strategy => strategy.ask_best_solution())
    }

    fn ask_a_posteriori_solutions(&self) -> &[(Point, bool)] {
        dispatch!(self, strategy => strategy.ask_a_posteriori_solutions())
    }

    fn tell_a_posteriori_feasibility(&mut self, actual: &[bool]) -> OptimizationResult<ConfusionMatrix> {
        dispatch!(self, strategy => strategy.tell_a_posteriori_feasibility(actual))
    }

    fn ask_statistics(&self) -> Option<&GenerationRecord> {
        dispatch!(self, strategy => strategy.ask_statistics())
    }

    fn run_constants(&self) -> RunConstants {
        dispatch!(self, strategy => strategy.run_constants())
    }

    fn engine(&self) -> &CmaEs {
        dispatch!(self, strategy => strategy.engine())
    }
}

/// Keeps the initial state of the search distribution.
#[derive(Clone, Debug)]
struct InitialState {
    xmean: Point,
    sigma: Float,
}

impl InitialState {
    fn new(engine: &CmaEs) -> Self {
        Self { xmean: engine.distribution().xmean().clone(), sigma: engine.distribution().sigma() }
    }
}

fn create_run_constants(name: &str, engine: &CmaEs, initial: &InitialState, beta: Option<Float>) -> RunConstants {
    RunConstants {
        strategy: name.to_string(),
        initial_xmean: point_to_vec(&initial.xmean),
        initial_sigma: initial.sigma,
        beta,
        mu: engine.constants().mu,
        lambda: engine.constants().lambda,
    }
}
