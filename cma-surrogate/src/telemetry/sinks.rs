#[cfg(test)]
#[path = "../../tests/unit/telemetry/sinks_test.rs"]
mod sinks_test;

use super::{GenerationRecord, RunConstants};
use crate::utils::{GenericResult, InfoLogger};
use serde::Serialize;
use std::io::Write;

/// Receives statistics at the start of a run and at every generation boundary.
pub trait StatisticsSink {
    /// Called once per run before the first generation.
    fn on_constants(&mut self, constants: &RunConstants) -> GenericResult<()>;

    /// Called once per closed generation.
    fn on_generation(&mut self, record: &GenerationRecord) -> GenericResult<()>;
}

/// Writes a short summary of every generation to the logger.
pub struct LoggerSink {
    logger: InfoLogger,
}

impl LoggerSink {
    /// Creates a new instance of `LoggerSink`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }
}

impl StatisticsSink for LoggerSink {
    fn on_constants(&mut self, constants: &RunConstants) -> GenericResult<()> {
        (self.logger)(
            format!(
                "strategy: {}, mu: {}, lambda: {}, initial sigma: {}, beta: {}",
                constants.strategy,
                constants.mu,
                constants.lambda,
                constants.initial_sigma,
                constants.beta.map_or("n/a".to_string(), |beta| beta.to_string())
            )
            .as_str(),
        );

        Ok(())
    }

    fn on_generation(&mut self, record: &GenerationRecord) -> GenericResult<()> {
        let classifier = record.confusion_matrix.as_ref().map_or(String::new(), |matrix| {
            format!(
                ", ppa: {:.3}, npa: {:.3}",
                matrix.positive_prediction_accuracy(),
                matrix.negative_prediction_accuracy()
            )
        });

        (self.logger)(
            format!(
                "generation {}: best: {:.6e}, worst: {:.6e}, mean: {:.6e}, sigma: {:.3e}, infeasible: {}{}",
                record.generation,
                record.best_fitness,
                record.worst_fitness,
                record.mean_fitness,
                record.sigma,
                record.infeasible,
                classifier
            )
            .as_str(),
        );

        Ok(())
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Entry<'a> {
    Constants(&'a RunConstants),
    Generation(&'a GenerationRecord),
}

/// Writes statistics as JSON objects, one per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a new instance of `JsonLinesSink`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, entry: Entry) -> GenericResult<()> {
        serde_json::to_writer(&mut self.writer, &entry)?;
        self.writer.write_all(b"\n")?;

        Ok(())
    }
}

impl<W: Write> StatisticsSink for JsonLinesSink<W> {
    fn on_constants(&mut self, constants: &RunConstants) -> GenericResult<()> {
        self.write_entry(Entry::Constants(constants))
    }

    fn on_generation(&mut self, record: &GenerationRecord) -> GenericResult<()> {
        self.write_entry(Entry::Generation(record))?;
        self.writer.flush()?;

        Ok(())
    }
}
