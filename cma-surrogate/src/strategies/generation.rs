use crate::engine::{Candidate, CmaEs};
use crate::metrics::ConfusionMatrix;
use crate::telemetry::GenerationRecord;
use crate::utils::*;

/// Specifies which protocol call is expected next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Points are sampled and their true feasibility is collected.
    Sampling,
    /// Enough valid points are collected, fitness is expected.
    Evaluating,
    /// Distribution is updated, a-posteriori feasibility is expected.
    Closing,
}

/// Keeps per generation bookkeeping shared by all strategy variants.
pub(crate) struct GenerationState {
    pub phase: Phase,
    pub target: usize,
    pub max_attempts: usize,
    dimension: usize,
    pub valid: Vec<Point>,
    pub attempts: usize,
    pub infeasible: usize,
    pub repaired: usize,
    pub surrogate_evaluated: usize,
    best: Option<(Point, Float)>,
    worst: Float,
    mean: Float,
    selected: Vec<Point>,
    record: Option<GenerationRecord>,
}

impl GenerationState {
    pub fn new(target: usize, max_attempts: usize, dimension: usize) -> Self {
        Self {
            phase: Phase::Sampling,
            target,
            max_attempts,
            dimension,
            valid: Vec::with_capacity(target),
            attempts: 0,
            infeasible: 0,
            repaired: 0,
            surrogate_evaluated: 0,
            best: None,
            worst: 0.,
            mean: 0.,
            selected: vec![],
            record: None,
        }
    }

    pub fn ensure_phase(&self, expected: Phase, operation: &str) -> OptimizationResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(OptimizationError::ContractViolation(format!(
                "{operation} is called in {:?} phase, expected {expected:?}",
                self.phase
            )))
        }
    }

    /// Fails when any told point does not belong to the search space.
    pub fn ensure_dimension<'a, I>(&self, mut points: I) -> OptimizationResult<()>
    where
        I: Iterator<Item = &'a Point>,
    {
        match points.find(|point| point.len() != self.dimension) {
            Some(point) => Err(OptimizationError::ContractViolation(format!(
                "point dimension mismatch: expected {}, got {}",
                self.dimension,
                point.len()
            ))),
            None => Ok(()),
        }
    }

    /// Returns amount of valid points still missing.
    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.valid.len())
    }

    /// Counts one more sampled point or fails when the limit is reached.
    pub fn register_attempt(&mut self) -> OptimizationResult<()> {
        if self.attempts >= self.max_attempts {
            return Err(OptimizationError::ResamplingExhausted { attempts: self.attempts });
        }

        self.attempts += 1;

        Ok(())
    }

    /// Accepts a valid point unless the target is already reached.
    pub fn accept(&mut self, point: Point) {
        if self.valid.len() < self.target {
            self.valid.push(point);
        }
    }

    /// Switches to evaluation when enough valid points are collected.
    pub fn try_complete_sampling(&mut self) -> bool {
        if self.valid.len() >= self.target {
            self.phase = Phase::Evaluating;
            true
        } else {
            false
        }
    }

    /// Ranks evaluated valid points by score in ascending order, keeping evaluation order for ties.
    pub fn rank<F>(&self, evaluated: Vec<Candidate>, score_fn: F) -> OptimizationResult<Vec<(Point, Float)>>
    where
        F: Fn(&Candidate, Float) -> Float,
    {
        self.ensure_phase(Phase::Evaluating, "tell_fitness")?;

        if evaluated.len() != self.valid.len() {
            return Err(OptimizationError::ContractViolation(format!(
                "expected fitness of {} valid points, got {}",
                self.valid.len(),
                evaluated.len()
            )));
        }

        self.ensure_dimension(evaluated.iter().map(|candidate| &candidate.point))?;

        let mut ranked = evaluated
            .into_iter()
            .map(|candidate| match candidate.fitness {
                Some(fitness) => {
                    let score = score_fn(&candidate, fitness);
                    Ok((candidate.point, score))
                }
                None => Err(OptimizationError::ContractViolation("candidate has no fitness".to_string())),
            })
            .collect::<OptimizationResult<Vec<_>>>()?;

        rank_by_fitness(ranked.as_mut_slice(), |(_, fitness)| *fitness);

        Ok(ranked)
    }

    /// Stores summary of true evaluated points and switches to closing.
    pub fn complete_evaluation(&mut self, ranked: &[(Point, Float)], selected: Vec<Point>, mean: Float) {
        self.best = ranked.first().cloned();
        self.worst = ranked.last().map_or(0., |(_, fitness)| *fitness);
        self.mean = mean;
        self.selected = selected;
        self.valid.clear();
        self.phase = Phase::Closing;
    }

    /// Builds generation record and resets per generation counters.
    pub fn close(&mut self, engine: &CmaEs, confusion_matrix: Option<ConfusionMatrix>) {
        let distribution = engine.distribution();
        let (best_point, best_fitness) =
            self.best.as_ref().map_or((vec![], Float::NAN), |(point, fitness)| (point_to_vec(point), *fitness));

        self.record = Some(GenerationRecord {
            generation: engine.generation(),
            best_fitness,
            worst_fitness: self.worst,
            mean_fitness: self.mean,
            best_point,
            selected: self.selected.iter().map(point_to_vec).collect(),
            sigma: distribution.sigma(),
            covariance: matrix_to_rows(distribution.covariance()),
            eigenvectors: matrix_to_rows(distribution.eigenvectors()),
            scaling: point_to_vec(distribution.scaling()),
            confusion_matrix,
            infeasible: self.infeasible,
            repaired: self.repaired,
            surrogate_evaluated: self.surrogate_evaluated,
        });

        self.attempts = 0;
        self.infeasible = 0;
        self.repaired = 0;
        self.surrogate_evaluated = 0;
        self.phase = Phase::Sampling;
    }

    pub fn best(&self) -> Option<(&Point, Float)> {
        self.best.as_ref().map(|(point, fitness)| (point, *fitness))
    }

    pub fn record(&self) -> Option<&GenerationRecord> {
        self.record.as_ref()
    }
}
