#[cfg(test)]
#[path = "../../tests/unit/strategies/rsvc_test.rs"]
mod rsvc_test;

use super::*;
use crate::engine::SearchDistribution;

/// Maps points between the standard basis and the basis of the mutation ellipsoid axes.
#[derive(Clone, Debug)]
pub struct RotationFrame {
    basis: Matrix,
    inverse: Matrix,
}

impl RotationFrame {
    /// Creates a frame which keeps points unchanged.
    pub fn identity(dimension: usize) -> Self {
        Self { basis: Matrix::identity(dimension, dimension), inverse: Matrix::identity(dimension, dimension) }
    }

    /// Captures the frame from eigenvectors of the current covariance matrix. The eigenvectors
    /// are orthonormal, so the inverse is the transpose.
    pub fn from_distribution(distribution: &SearchDistribution) -> Self {
        let basis = distribution.eigenvectors().clone();
        let inverse = basis.transpose();

        Self { basis, inverse }
    }

    /// Rotates a point from the standard basis into the ellipsoid basis.
    pub fn reduce(&self, point: &Point) -> Point {
        &self.inverse * point
    }

    /// Rotates a point from the ellipsoid basis back into the standard basis.
    pub fn unreduce(&self, point: &Point) -> Point {
        &self.basis * point
    }
}

/// CMA-ES with a feasibility classifier which filters candidates before the expensive true
/// feasibility check.
///
/// With probability `beta`, and only once the classifier is trained, a candidate is predicted
/// first. Predicted feasible ones are still checked by the true oracle, predicted infeasible ones
/// are withheld (or repaired when the classifier can) and verified only a-posteriori.
pub struct ClassifierPreFilter<M: FeasibilityModel> {
    engine: CmaEs,
    model: M,
    beta: Float,
    model_trained: bool,
    frame: RotationFrame,
    initial: InitialState,
    state: GenerationState,
    predictions: Vec<(Point, bool)>,
}

impl<M: FeasibilityModel> ClassifierPreFilter<M> {
    /// Creates a new instance of `ClassifierPreFilter`.
    pub fn new(engine: CmaEs, model: M, beta: Float, max_attempts: usize) -> GenericResult<Self> {
        if !(0. ..=1.).contains(&beta) {
            return Err(format!("beta should be in [0, 1], got {beta}").into());
        }

        let initial = InitialState::new(&engine);
        let frame = RotationFrame::identity(engine.dimension());
        let state = GenerationState::new(engine.constants().lambda, max_attempts, engine.dimension());

        Ok(Self { engine, model, beta, model_trained: false, frame, initial, state, predictions: vec![] })
    }

    /// Returns the classifier.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the rotation frame used for classifier inputs.
    pub fn frame(&self) -> &RotationFrame {
        &self.frame
    }

    /// Returns true if the classifier reported successful training.
    pub fn is_model_trained(&self) -> bool {
        self.model_trained
    }
}

impl<M: FeasibilityModel> AskTell for ClassifierPreFilter<M> {
    fn ask_pending_solutions(&mut self) -> OptimizationResult<Vec<Point>> {
        self.state.ensure_phase(Phase::Sampling, "ask_pending_solutions")?;

        let needed = self.state.remaining();
        let mut pending = Vec::with_capacity(needed);

        while pending.len() < needed {
            self.state.register_attempt()?;
            let point = self.engine.sample_point();

            if !self.model_trained || !self.engine.random().is_hit(self.beta) {
                pending.push(point);
                continue;
            }

            let reduced = self.frame.reduce(&point);
            if self.model.predict(&reduced) {
                self.predictions.push((point.clone(), true));
                pending.push(point);
            } else {
                self.predictions.push((point, false));

                if let Some(repaired) = self.model.repair(&reduced) {
                    self.state.repaired += 1;
                    pending.push(self.frame.unreduce(&repaired));
                }
            }
        }

        Ok(pending)
    }

    fn tell_feasibility(&mut self, results: Vec<(Point, bool)>) -> OptimizationResult<bool> {
        self.state.ensure_phase(Phase::Sampling, "tell_feasibility")?;
        self.state.ensure_dimension(results.iter().map(|(point, _)| point))?;

        results.into_iter().for_each(|(point, feasible)| {
            if feasible {
                self.state.accept(point);
            } else {
                self.state.infeasible += 1;
                self.model.add_infeasible(self.frame.reduce(&point));
            }
        });

        Ok(self.state.try_complete_sampling())
    }

    fn ask_valid_solutions(&self) -> &[Point] {
        self.state.valid.as_slice()
    }

    fn tell_fitness(&mut self, evaluated: Vec<Candidate>) -> OptimizationResult<(Point, Float)> {
        let ranked = self.state.rank(evaluated, |_, fitness| fitness)?;

        self.model.add_sorted_feasibles(ranked.iter().map(|(point, _)| self.frame.reduce(point)).collect());
        self.model_trained = self.model.train();

        let selected = ranked.iter().take(self.engine.constants().mu).map(|(point, _)| point.clone()).collect::<Vec<_>>();
        self.engine.update(selected.as_slice())?;

        let mean = get_mean_iter(ranked.iter().map(|(_, fitness)| *fitness));
        self.state.complete_evaluation(ranked.as_slice(), selected, mean);

        ranked.into_iter().next().ok_or_else(|| OptimizationError::ContractViolation("no ranked points".to_string()))
    }

    fn ask_best_solution(&self) -> Option<(&Point, Float)> {
        self.state.best()
    }

    fn ask_a_posteriori_solutions(&self) -> &[(Point, bool)] {
        self.predictions.as_slice()
    }

    fn tell_a_posteriori_feasibility(&mut self, actual: &[bool]) -> OptimizationResult<ConfusionMatrix> {
        self.state.ensure_phase(Phase::Closing, "tell_a_posteriori_feasibility")?;

        if actual.len() != self.predictions.len() {
            return Err(OptimizationError::ContractViolation(format!(
                "expected feasibility of {} a-posteriori solutions, got {}",
                self.predictions.len(),
                actual.len()
            )));
        }

        let confusion_matrix =
            ConfusionMatrix::new(self.predictions.iter().map(|(_, predicted)| *predicted).zip(actual.iter().copied()));
        self.predictions.clear();

        self.frame = RotationFrame::from_distribution(self.engine.distribution());
        self.state.close(&self.engine, Some(confusion_matrix));

        Ok(confusion_matrix)
    }

    fn ask_statistics(&self) -> Option<&GenerationRecord> {
        self.state.record()
    }

    fn run_constants(&self) -> RunConstants {
        create_run_constants("cma-es-rsvc", &self.engine, &self.initial, Some(self.beta))
    }

    fn engine(&self) -> &CmaEs {
        &self.engine
    }
}
