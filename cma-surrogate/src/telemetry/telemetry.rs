#[cfg(test)]
#[path = "../../tests/unit/telemetry/telemetry_test.rs"]
mod telemetry_test;

use super::{GenerationRecord, RunConstants, StatisticsSink};
use crate::utils::*;

/// Encapsulates different measurements regarding algorithm evaluation.
pub struct TelemetryMetrics {
    /// Algorithm duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: Float,
    /// Tracked generation records, oldest first.
    pub evolution: Vec<GenerationRecord>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best fitness is logged.
        log_best: usize,
        /// Specifies how often distribution and classifier statistics are logged.
        log_statistics: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often generation record is tracked.
        track_generation: usize,
        /// Specifies how many latest tracked records are kept.
        max_tracked: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best fitness is logged.
        log_best: usize,
        /// Specifies how often distribution and classifier statistics are logged.
        log_statistics: usize,
        /// Specifies how often generation record is tracked.
        track_generation: usize,
        /// Specifies how many latest tracked records are kept.
        max_tracked: usize,
    },
}

/// Provides way to collect metrics, push records to sinks and write information into log.
pub struct Telemetry {
    time: Timer,
    mode: TelemetryMode,
    generations: usize,
    evolution: SlidingWindow<GenerationRecord>,
    sinks: Vec<Box<dyn StatisticsSink>>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        let max_tracked = match &mode {
            TelemetryMode::OnlyMetrics { max_tracked, .. } | TelemetryMode::All { max_tracked, .. } => *max_tracked,
            _ => 0,
        };

        Self { time: Timer::start(), mode, generations: 0, evolution: SlidingWindow::new(max_tracked), sinks: vec![] }
    }

    /// Adds a statistics sink.
    pub fn with_sink(mut self, sink: Box<dyn StatisticsSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Reports run constants.
    pub fn on_start(&mut self, constants: &RunConstants) -> GenericResult<()> {
        self.time = Timer::start();

        self.log(
            format!(
                "[{}s] started {} with mu={}, lambda={}, dimension={}",
                self.time.elapsed_secs(),
                constants.strategy,
                constants.mu,
                constants.lambda,
                constants.initial_xmean.len()
            )
            .as_str(),
        );

        self.sinks.iter_mut().try_for_each(|sink| sink.on_constants(constants))
    }

    /// Reports generation statistics.
    pub fn on_generation(
        &mut self,
        record: &GenerationRecord,
        termination_estimate: Float,
        generation_time: Timer,
    ) -> GenericResult<()> {
        self.generations = record.generation;
        self.sinks.iter_mut().try_for_each(|sink| sink.on_generation(record))?;

        let (log_best, log_statistics, track_generation) = match &self.mode {
            TelemetryMode::None => return Ok(()),
            TelemetryMode::OnlyLogging { log_best, log_statistics, .. } => {
                (Some(*log_best), Some(*log_statistics), None)
            }
            TelemetryMode::OnlyMetrics { track_generation, .. } => (None, None, Some(*track_generation)),
            TelemetryMode::All { log_best, log_statistics, track_generation, .. } => {
                (Some(*log_best), Some(*log_statistics), Some(*track_generation))
            }
        };

        let generation = record.generation;
        let is_hit = |frequency: Option<usize>| frequency.is_some_and(|frequency| generation % frequency.max(1) == 0);

        if is_hit(log_best) {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, best fitness: {:.6e}, progress: {:.0}%",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis(),
                    record.best_fitness,
                    termination_estimate * 100.
                )
                .as_str(),
            );
        }

        if is_hit(log_statistics) {
            self.log_statistics(record);
        }

        if is_hit(track_generation) {
            self.evolution.push(record.clone());
        }

        Ok(())
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, best: Option<(&Point, Float)>) {
        let elapsed = self.time.elapsed_secs();
        let speed = self.speed();

        self.log(format!("[{elapsed}s] total generations: {}, speed: {speed:.2} gen/sec", self.generations).as_str());
        match best {
            Some((point, fitness)) => {
                self.log(format!("\tbest fitness: {fitness:.6e} at ({})", format_point(point)).as_str())
            }
            None => self.log("no solutions found"),
        }
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(TelemetryMetrics {
                duration: self.time.elapsed_secs() as usize,
                generations: self.generations,
                speed: self.speed(),
                evolution: self.evolution.iter().cloned().collect(),
            }),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }

    fn log_statistics(&self, record: &GenerationRecord) {
        self.log(
            format!(
                "\tsigma: {:.3e}, axis ratio: {:.3}, infeasible: {}, repaired: {}, surrogate: {}",
                record.sigma,
                axis_ratio(&record.scaling),
                record.infeasible,
                record.repaired,
                record.surrogate_evaluated
            )
            .as_str(),
        );

        if let Some(matrix) = record.confusion_matrix.as_ref() {
            let mcc = matrix.mcc().map_or("n/a".to_string(), |mcc| format!("{mcc:.3}"));
            self.log(
                format!(
                    "\tclassifier: tp={}, fp={}, tn={}, fn={}, ppa: {:.3}, npa: {:.3}, mcc: {mcc}",
                    matrix.tp,
                    matrix.fp,
                    matrix.tn,
                    matrix.fn_,
                    matrix.positive_prediction_accuracy(),
                    matrix.negative_prediction_accuracy(),
                )
                .as_str(),
            );
        }
    }

    fn speed(&self) -> Float {
        let elapsed = self.time.elapsed_secs_as_float();
        if elapsed > 0. { self.generations as Float / elapsed } else { 0. }
    }
}

fn axis_ratio(scaling: &[Float]) -> Float {
    let (min, max) = scaling.iter().fold((Float::MAX, Float::MIN), |(min, max), &d| (min.min(d), max.max(d)));
    if min > 0. { max / min } else { Float::INFINITY }
}

fn format_point(point: &Point) -> String {
    point.iter().map(|value| format!("{value:.6}")).collect::<Vec<_>>().join(", ")
}
