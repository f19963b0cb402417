//! A module which provides the logic to collect statistics about optimization runs and simple
//! logging.

mod record;
pub use self::record::{GenerationRecord, RunConstants};

mod sinks;
pub use self::sinks::{JsonLinesSink, LoggerSink, StatisticsSink};

#[allow(clippy::module_inception)]
mod telemetry;
pub use self::telemetry::{Telemetry, TelemetryMetrics, TelemetryMode};
