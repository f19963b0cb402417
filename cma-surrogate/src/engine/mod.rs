//! The CMA-ES core: strategy constants, search distribution and the engine which samples and
//! adapts it once per generation.

mod candidate;
pub use self::candidate::Candidate;

mod constants;
pub use self::constants::StrategyConstants;

mod distribution;
pub use self::distribution::{EvolutionPath, SearchDistribution};

mod cmaes;
pub use self::cmaes::{CmaEs, SampleBatch, DEFAULT_MAX_ATTEMPTS};
