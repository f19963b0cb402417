#[cfg(test)]
#[path = "../../tests/unit/strategies/unconstrained_test.rs"]
mod unconstrained_test;

use super::*;

/// Plain CMA-ES: infeasible points are rejected and resampled until `lambda` valid points are
/// collected.
pub struct Unconstrained {
    engine: CmaEs,
    initial: InitialState,
    state: GenerationState,
}

impl Unconstrained {
    /// Creates a new instance of `Unconstrained`.
    pub fn new(engine: CmaEs, max_attempts: usize) -> Self {
        let initial = InitialState::new(&engine);
        let state = GenerationState::new(engine.constants().lambda, max_attempts, engine.dimension());

        Self { engine, initial, state }
    }
}

impl AskTell for Unconstrained {
    fn ask_pending_solutions(&mut self) -> OptimizationResult<Vec<Point>> {
        self.state.ensure_phase(Phase::Sampling, "ask_pending_solutions")?;

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

        results.into_iter().for_each(|(point, feasible)| {
            if feasible {
                self.state.accept(point)
            } else {
                self.state.infeasible += 1;
            }
        });

        Ok(self.state.try_complete_sampling())
    }

    fn ask_valid_solutions(&self) -> &[Point] {
        self.state.valid.as_slice()
    }

    fn tell_fitness(&mut self, evaluated: Vec<Candidate>) -> OptimizationResult<(Point, Float)> {
        let ranked = self.state.rank(evaluated, |_, fitness| fitness)?;
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
        create_run_constants("cma-es", &self.engine, &self.initial, None)
    }

    fn engine(&self) -> &CmaEs {
        &self.engine
    }
}
