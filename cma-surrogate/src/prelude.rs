//! This module reimports a common used types.

pub use crate::config::{ResolutionConfig, RunConfig, TerminationConfig};

pub use crate::engine::{Candidate, CmaEs};

pub use crate::metrics::ConfusionMatrix;

pub use crate::models::{FeasibilityModel, FitnessModel};

pub use crate::problem::Problem;

pub use crate::simulator::{SimulationResult, Simulator, SimulatorBuilder};

pub use crate::strategies::{AskTell, ClassifierPreFilter, RegressionSurrogate, ResolutionStrategy, Unconstrained};

pub use crate::telemetry::{GenerationRecord, RunConstants, StatisticsSink, TelemetryMode};

pub use crate::termination::Termination;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::{Float, Point};
pub use crate::utils::{GenericError, GenericResult, OptimizationError, OptimizationResult};
pub use crate::utils::{Random, RandomGen};
