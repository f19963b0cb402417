//! A driver which wires a problem to an ask/tell strategy and runs generations until the
//! termination criteria is met.

#[cfg(test)]
#[path = "../tests/unit/simulator_test.rs"]
mod simulator_test;

use crate::config::TerminationConfig;
use crate::engine::Candidate;
use crate::problem::Problem;
use crate::strategies::AskTell;
use crate::telemetry::{StatisticsSink, Telemetry, TelemetryMetrics, TelemetryMode};
use crate::termination::*;
use crate::utils::*;

/// Default limit of generations used when no termination is configured.
pub const DEFAULT_MAX_GENERATIONS: usize = 1000;

/// A result of the simulation.
pub struct SimulationResult {
    /// Best true evaluated point found during the whole run.
    pub best: Option<(Point, Float)>,
    /// Running best fitness after every generation.
    pub history: Vec<Float>,
    /// Amount of closed generations.
    pub generations: usize,
    /// Amount of true feasibility checks made to fill generations.
    pub feasibility_checks: usize,
    /// Amount of true fitness evaluations.
    pub fitness_evaluations: usize,
    /// Amount of true feasibility checks made to verify classifier predictions.
    pub a_posteriori_checks: usize,
    /// Collected telemetry metrics, if requested.
    pub metrics: Option<TelemetryMetrics>,
}

/// An entity which simulates optimization process.
pub struct Simulator<P, S>
where
    P: Problem,
    S: AskTell,
{
    problem: P,
    strategy: S,
    termination: Box<dyn Termination + Send + Sync>,
    telemetry: Telemetry,
    environment: Environment,
}

impl<P, S> Simulator<P, S>
where
    P: Problem,
    S: AskTell,
{
    /// Runs generations until termination. Fails on the first optimization error.
    pub fn run(self) -> GenericResult<SimulationResult> {
        let Self { problem, mut strategy, mut termination, mut telemetry, environment } = self;
        let is_parallel = environment.is_parallel;

        let mut result = SimulationResult {
            best: None,
            history: vec![],
            generations: 0,
            feasibility_checks: 0,
            fitness_evaluations: 0,
            a_posteriori_checks: 0,
            metrics: None,
        };

        telemetry.on_start(&strategy.run_constants())?;

        loop {
            let generation_time = Timer::start();

            loop {
                let pending = strategy.ask_pending_solutions()?;
                let feasibility = maybe_parallel_collect(&pending, is_parallel, |point| problem.is_feasible(point));
                result.feasibility_checks += pending.len();

                if strategy.tell_feasibility(pending.into_iter().zip(feasibility).collect())? {
                    break;
                }
            }

            let evaluated = maybe_parallel_collect(strategy.ask_valid_solutions(), is_parallel, |point| {
                Candidate::new(point.clone()).with_fitness(problem.fitness(point)).with_penalty(problem.penalty(point))
            });
            result.fitness_evaluations += evaluated.len();
            strategy.tell_fitness(evaluated)?;

            let a_posteriori = strategy.ask_a_posteriori_solutions().iter().map(|(point, _)| point.clone()).collect::<Vec<_>>();
            let actual = maybe_parallel_collect(&a_posteriori, is_parallel, |point| problem.is_feasible(point));
            result.a_posteriori_checks += actual.len();
            strategy.tell_a_posteriori_feasibility(actual.as_slice())?;

            if let Some((point, fitness)) = strategy.ask_best_solution() {
                let is_improved = result.best.as_ref().is_none_or(|(_, best_fitness)| fitness < *best_fitness);
                if is_improved {
                    result.best = Some((point.clone(), fitness));
                }
            }

            let best_fitness = result.best.as_ref().map_or(Float::INFINITY, |(_, fitness)| *fitness);
            let generation = strategy.engine().generation();

            result.history.push(best_fitness);
            result.generations = generation;

            let is_terminated = termination.is_termination(generation, best_fitness);

            if let Some(record) = strategy.ask_statistics() {
                telemetry.on_generation(record, termination.estimate(generation, best_fitness), generation_time)?;
            }

            if is_terminated {
                break;
            }
        }

        telemetry.on_result(result.best.as_ref().map(|(point, fitness)| (point, *fitness)));
        if let Some((_, fitness)) = result.best.as_ref() {
            telemetry.log(format!("\tdistance to optimum: {:.6e}", (fitness - problem.optimum_fitness()).abs()).as_str());
        }

        result.metrics = telemetry.take_metrics();

        Ok(result)
    }
}

/// Provides configurable way to build simulator using fluent interface style.
pub struct SimulatorBuilder<P, S>
where
    P: Problem,
    S: AskTell,
{
    problem: Option<P>,
    strategy: Option<S>,
    environment: Environment,
    termination: Option<Box<dyn Termination + Send + Sync>>,
    termination_config: TerminationConfig,
    telemetry_mode: TelemetryMode,
    sinks: Vec<Box<dyn StatisticsSink>>,
}

impl<P, S> Default for SimulatorBuilder<P, S>
where
    P: Problem,
    S: AskTell,
{
    fn default() -> Self {
        Self {
            problem: None,
            strategy: None,
            environment: Environment::default(),
            termination: None,
            termination_config: TerminationConfig::default(),
            telemetry_mode: TelemetryMode::None,
            sinks: vec![],
        }
    }
}

impl<P, S> SimulatorBuilder<P, S>
where
    P: Problem,
    S: AskTell,
{
    /// Sets the optimized problem.
    pub fn with_problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    /// Sets the constraint resolution strategy.
    pub fn with_strategy(mut self, strategy: S) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Sets environment. Default is stdout logger, entropy seeded random and parallel evaluation.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets max generations to be run. Default is 1000 when no other criteria is set.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.termination_config.max_generations = limit;
        self
    }

    /// Sets accuracy of reaching the problem optimum as termination criteria.
    pub fn with_target_accuracy(mut self, accuracy: Option<Float>) -> Self {
        self.termination_config.target_accuracy = accuracy;
        self
    }

    /// Sets minimal change of best fitness between two generations as termination criteria.
    pub fn with_convergence(mut self, distance: Option<Float>) -> Self {
        self.termination_config.convergence = distance;
        self
    }

    /// Sets all termination criteria at once.
    pub fn with_termination_config(mut self, config: TerminationConfig) -> Self {
        self.termination_config = config;
        self
    }

    /// Sets a custom termination which replaces configured criteria.
    pub fn with_termination(mut self, termination: Box<dyn Termination + Send + Sync>) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry_mode(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = mode;
        self
    }

    /// Adds a statistics sink.
    pub fn with_sink(mut self, sink: Box<dyn StatisticsSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    fn get_termination(
        logger: &InfoLogger,
        config: TerminationConfig,
        optimum_fitness: Float,
    ) -> Box<dyn Termination + Send + Sync> {
        let TerminationConfig { max_generations, target_accuracy, convergence } = config;

        let terminations: Vec<Box<dyn Termination + Send + Sync>> = match (max_generations, target_accuracy, convergence) {
            (None, None, None) => {
                (logger)(format!("configured to use default max-generations ({DEFAULT_MAX_GENERATIONS})").as_str());
                vec![Box::new(MaxGeneration::new(DEFAULT_MAX_GENERATIONS))]
            }
            _ => {
                let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![];

                if let Some(limit) = max_generations {
                    (logger)(format!("configured to use max-generations: {limit}").as_str());
                    terminations.push(Box::new(MaxGeneration::new(limit)));
                }

                if let Some(accuracy) = target_accuracy {
                    (logger)(
                        format!("configured to use target fitness: {optimum_fitness}, accuracy: {accuracy}").as_str(),
                    );
                    terminations.push(Box::new(TargetProximity::new(optimum_fitness, accuracy)));
                }

                if let Some(distance) = convergence {
                    (logger)(format!("configured to use convergence distance: {distance}").as_str());
                    terminations.push(Box::new(Convergence::new(distance)));
                }

                terminations
            }
        };

        Box::new(CompositeTermination::new(terminations))
    }

    /// Builds the simulator.
    pub fn build(self) -> GenericResult<Simulator<P, S>> {
        let problem = self.problem.ok_or_else(|| "missing problem".to_string())?;
        let strategy = self.strategy.ok_or_else(|| "missing strategy".to_string())?;
        let logger = self.environment.logger.clone();

        let termination = if let Some(termination) = self.termination {
            (logger)("configured to use a custom termination");
            termination
        } else {
            Self::get_termination(&logger, self.termination_config, problem.optimum_fitness())
        };

        let telemetry = self.sinks.into_iter().fold(Telemetry::new(self.telemetry_mode), |telemetry, sink| telemetry.with_sink(sink));

        Ok(Simulator { problem, strategy, termination, telemetry, environment: self.environment })
    }
}
