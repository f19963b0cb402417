use super::*;
use crate::helpers::telemetry::*;

struct CountingSink {
    generations: std::sync::Arc<std::sync::Mutex<Vec<usize>>>,
}

impl StatisticsSink for CountingSink {
    fn on_constants(&mut self, _: &RunConstants) -> GenericResult<()> {
        Ok(())
    }

    fn on_generation(&mut self, record: &GenerationRecord) -> GenericResult<()> {
        self.generations.lock().unwrap().push(record.generation);
        Ok(())
    }
}

fn run_generations(telemetry: &mut Telemetry, amount: usize) {
    telemetry.on_start(&create_test_constants()).unwrap();
    (1..=amount).for_each(|generation| {
        telemetry.on_generation(&create_test_record(generation, 1. / generation as Float), 0.5, Timer::start()).unwrap()
    });
}

#[test]
fn can_collect_metrics_with_window() {
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyMetrics { track_generation: 2, max_tracked: 3 });

    run_generations(&mut telemetry, 10);
    let metrics = telemetry.take_metrics().unwrap();

    assert_eq!(metrics.generations, 10);
    assert_eq!(metrics.evolution.iter().map(|record| record.generation).collect::<Vec<_>>(), vec![6, 8, 10]);
}

parameterized_test! {can_take_metrics_depending_on_mode, (mode, expected), {
    let mut telemetry = Telemetry::new(mode);

    run_generations(&mut telemetry, 2);

    assert_eq!(telemetry.take_metrics().is_some(), expected);
}}

can_take_metrics_depending_on_mode! {
    case01_none: (TelemetryMode::None, false),
    case02_only_logging: (TelemetryMode::OnlyLogging { logger: std::sync::Arc::new(|_| {}), log_best: 1, log_statistics: 1 }, false),
    case03_only_metrics: (TelemetryMode::OnlyMetrics { track_generation: 1, max_tracked: 10 }, true),
    case04_all: (TelemetryMode::All {
        logger: std::sync::Arc::new(|_| {}), log_best: 1, log_statistics: 1, track_generation: 1, max_tracked: 10
    }, true),
}

#[test]
fn can_log_with_given_frequency() {
    let (logger, messages) = create_capturing_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 2, log_statistics: 5 });

    run_generations(&mut telemetry, 5);
    telemetry.on_result(None);

    let messages = messages.lock().unwrap();
    assert!(messages[0].contains("started cma-es with mu=2, lambda=4, dimension=2"));
    assert_eq!(messages.iter().filter(|msg| msg.contains("best fitness:")).count(), 2);
    assert_eq!(messages.iter().filter(|msg| msg.contains("axis ratio: 2.000")).count(), 1);
    assert!(messages.iter().any(|msg| msg.contains("total generations: 5")));
    assert_eq!(messages.last().map(String::as_str), Some("no solutions found"));
}

#[test]
fn can_log_classifier_statistics() {
    let (logger, messages) = create_capturing_logger();
    let mut telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_best: 100, log_statistics: 1 });
    let mut record = create_test_record(1, 0.);
    record.confusion_matrix = Some(crate::metrics::ConfusionMatrix { tp: 2, fp: 0, tn: 0, fn_: 0 });

    telemetry.on_generation(&record, 0., Timer::start()).unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg.contains("tp=2, fp=0, tn=0, fn=0") && msg.contains("mcc: n/a")));
}

#[test]
fn can_push_records_to_sinks_regardless_of_mode() {
    let generations = std::sync::Arc::new(std::sync::Mutex::new(vec![]));
    let sink = CountingSink { generations: generations.clone() };
    let mut telemetry = Telemetry::new(TelemetryMode::None).with_sink(Box::new(sink));

    run_generations(&mut telemetry, 3);

    assert_eq!(*generations.lock().unwrap(), vec![1, 2, 3]);
}
