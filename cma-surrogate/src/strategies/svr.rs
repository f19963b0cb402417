#[cfg(test)]
#[path = "../../tests/unit/strategies/svr_test.rs"]
mod svr_test;

use super::*;

/// CMA-ES with a fitness regression surrogate and penalty based constraint handling.
///
/// Once the surrogate is trained, `floor(beta * lambda)` candidates of each generation are
/// evaluated on the surrogate only. The rest receive true fitness plus `gamma * penalty` and
/// train the surrogate. Best and worst solutions are taken from true evaluated candidates only.
pub struct RegressionSurrogate<M: FitnessModel> {
    engine: CmaEs,
    model: M,
    beta: Float,
    gamma: Float,
    model_trained: bool,
    initial: InitialState,
    state: GenerationState,
    surrogate_points: Vec<Point>,
}

impl<M: FitnessModel> RegressionSurrogate<M> {
    /// Creates a new instance of `RegressionSurrogate`.
    pub fn new(engine: CmaEs, model: M, beta: Float, gamma: Float, max_attempts: usize) -> GenericResult<Self> {
        if !(0. ..=1.).contains(&beta) {
            return Err(format!("beta should be in [0, 1], got {beta}").into());
        }

        if !gamma.is_finite() || gamma < 0. {
            return Err(format!("gamma should be finite and non-negative, got {gamma}").into());
        }

        let initial = InitialState::new(&engine);
        let state = GenerationState::new(engine.constants().lambda, max_attempts, engine.dimension());

        Ok(Self { engine, model, beta, gamma, model_trained: false, initial, state, surrogate_points: vec![] })
    }

    /// Returns the surrogate model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns amount of candidates per generation evaluated on the surrogate only. At least
    /// one candidate per generation is always truly evaluated.
    pub fn surrogate_size(&self) -> usize {
        if self.model_trained {
            let lambda = self.engine.constants().lambda;
            ((self.beta * lambda as Float).floor() as usize).min(lambda - 1)
        } else {
            0
        }
    }

    fn is_generation_started(&self) -> bool {
        self.state.attempts > 0
    }
}

impl<M: FitnessModel> AskTell for RegressionSurrogate<M> {
    fn ask_pending_solutions(&mut self) -> OptimizationResult<Vec<Point>> {
        self.state.ensure_phase(Phase::Sampling, "ask_pending_solutions")?;

        if !self.is_generation_started() {
            let surrogate_size = self.surrogate_size();
            self.state.target = self.engine.constants().lambda - surrogate_size;
            self.surrogate_points = (0..surrogate_size).map(|_| self.engine.sample_point()).collect();
        }

        (0..self.state.remaining())
            .map(|_| {
                self.state.register_attempt()?;
                Ok(self.engine.sample_point())
            })
            .collect()
    }

    fn tell_feasibility(&mut self, results: Vec<(Point, bool)>) -> OptimizationResult<bool> {
        self.state.ensure_phase(Phase::Sampling, "tell_feasibility")?;
        self.state.ensure_dimension(results.iter().map(|(point, _)| point))?;

        // infeasible points stay in the generation: their constraint violation is penalized
        results.into_iter().for_each(|(point, feasible)| {
            if !feasible {
                self.state.infeasible += 1;
            }
            self.state.accept(point);
        });

        Ok(self.state.try_complete_sampling())
    }

    fn ask_valid_solutions(&self) -> &[Point] {
        self.state.valid.as_slice()
    }

    fn tell_fitness(&mut self, evaluated: Vec<Candidate>) -> OptimizationResult<(Point, Float)> {
        let gamma = self.gamma;
        let ranked = self.state.rank(evaluated, |candidate, fitness| fitness + gamma * candidate.penalty)?;

        let surrogate_evaluated = self
            .surrogate_points
            .drain(..)
            .map(|point| {
                let fitness = self.model.predict(&point);
                (point, fitness)
            })
            .collect::<Vec<_>>();

        self.model.add(ranked.clone());
        self.model_trained = self.model.train();

        let surrogate_size = surrogate_evaluated.len();
        let mut merged = ranked.iter().cloned().chain(surrogate_evaluated).collect::<Vec<_>>();
        rank_by_fitness(merged.as_mut_slice(), |(_, fitness)| *fitness);
        merged.truncate(self.engine.constants().mu);

        let mean = get_mean_iter(merged.iter().map(|(_, fitness)| *fitness));
        let selected = merged.into_iter().map(|(point, _)| point).collect::<Vec<_>>();

        self.engine.update(selected.as_slice())?;

        self.state.surrogate_evaluated = surrogate_size;
        self.state.complete_evaluation(ranked.as_slice(), selected, mean);

        ranked.into_iter().next().ok_or_else(|| OptimizationError::ContractViolation("no ranked points".to_string()))
    }

    fn ask_best_solution(&self) -> Option<(&Point, Float)> {
        self.state.best()
    }

    fn ask_a_posteriori_solutions(&self) -> &[(Point, bool)] {
        &[]
    }

    fn tell_a_posteriori_feasibility(&mut self, actual: &[bool]) -> OptimizationResult<ConfusionMatrix> {
        self.state.ensure_phase(Phase::Closing, "tell_a_posteriori_feasibility")?;

        if !actual.is_empty() {
            return Err(OptimizationError::ContractViolation(format!(
                "no a-posteriori solutions were listed, got {} results",
                actual.len()
            )));
        }

        self.state.close(&self.engine, None);

        Ok(ConfusionMatrix::default())
    }

    fn ask_statistics(&self) -> Option<&GenerationRecord> {
        self.state.record()
    }

    fn run_constants(&self) -> RunConstants {
        create_run_constants("cma-es-svr", &self.engine, &self.initial, Some(self.beta))
    }

    fn engine(&self) -> &CmaEs {
        &self.engine
    }
}
