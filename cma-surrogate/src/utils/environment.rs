use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,

    /// Whether oracle calls of one batch can be evaluated in parallel.
    pub is_parallel: bool,
}

impl Environment {
    /// Creates an instance of `Environment` with repeatable random generator and silent logger.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), logger: Arc::new(|_| {}), is_parallel: false }
    }

    /// Creates an instance of `Environment` using given random and logger.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger, is_parallel: bool) -> Self {
        Self { random, logger, is_parallel }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Arc::new(|msg| println!("{msg}")), true)
    }
}
