use crate::prelude::*;
use std::sync::{Arc, Mutex};

pub fn create_test_record(generation: usize, best_fitness: Float) -> GenerationRecord {
    GenerationRecord {
        generation,
        best_fitness,
        worst_fitness: best_fitness + 1.,
        mean_fitness: best_fitness + 0.5,
        best_point: vec![0., 0.],
        selected: vec![vec![0., 0.]],
        sigma: 0.5,
        covariance: vec![vec![1., 0.], vec![0., 1.]],
        eigenvectors: vec![vec![1., 0.], vec![0., 1.]],
        scaling: vec![1., 2.],
        confusion_matrix: None,
        infeasible: 0,
        repaired: 0,
        surrogate_evaluated: 0,
    }
}

pub fn create_test_constants() -> RunConstants {
    RunConstants {
        strategy: "cma-es".to_string(),
        initial_xmean: vec![1., 1.],
        initial_sigma: 0.5,
        beta: None,
        mu: 2,
        lambda: 4,
    }
}

/// Creates a logger which keeps all messages.
pub fn create_capturing_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}
