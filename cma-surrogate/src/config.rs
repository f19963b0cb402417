//! A run configuration which can be read from experiment files.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::engine::{CmaEs, DEFAULT_MAX_ATTEMPTS};
use crate::models::{FeasibilityModel, FitnessModel};
use crate::strategies::*;
use crate::utils::*;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;

/// Specifies a constraint resolution strategy and its parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ResolutionConfig {
    /// Plain accept/reject resampling.
    #[default]
    Unconstrained,
    /// Feasibility classifier applied to a `beta` share of candidates.
    ClassifierPreFilter {
        /// Probability of consulting the classifier for a candidate.
        beta: Float,
    },
    /// Fitness surrogate for a `beta` share of candidates with `gamma` weighted penalty.
    RegressionSurrogate {
        /// Share of candidates evaluated on the surrogate.
        beta: Float,
        /// Penalty factor.
        gamma: Float,
    },
}

/// Specifies termination criteria. All unset means default max generations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationConfig {
    /// Max amount of generations.
    pub max_generations: Option<usize>,
    /// Stop when best fitness is closer to the problem optimum than the accuracy.
    pub target_accuracy: Option<Float>,
    /// Stop when best fitness changes less than the distance between two generations.
    pub convergence: Option<Float>,
}

/// A configuration of one optimization run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Amount of selected parents.
    pub mu: usize,
    /// Amount of sampled offspring.
    pub lambda: usize,
    /// Initial mean of the search distribution.
    pub xmean: Vec<Float>,
    /// Initial step size.
    pub sigma: Float,
    /// Constraint resolution strategy.
    #[serde(default)]
    pub resolution: ResolutionConfig,
    /// Limit of sampled points per generation.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Termination criteria.
    #[serde(default)]
    pub termination: TerminationConfig,
    /// A seed for repeatable runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl RunConfig {
    /// Reads configuration from json.
    pub fn from_reader<R: Read>(reader: R) -> GenericResult<Self> {
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.validate()?;

        Ok(config)
    }

    /// Checks parameter ranges. All violations are reported at once.
    pub fn validate(&self) -> GenericResult<()> {
        let mut errors: Vec<GenericError> = vec![];

        if self.mu == 0 || self.mu > self.lambda {
            errors.push(format!("mu should be in [1, lambda], got mu={}, lambda={}", self.mu, self.lambda).into());
        }

        if self.xmean.is_empty() {
            errors.push("xmean should not be empty".into());
        }

        if self.max_attempts < self.lambda {
            errors.push(format!("max_attempts should be at least lambda, got {}", self.max_attempts).into());
        }

        let (beta, gamma) = match &self.resolution {
            ResolutionConfig::Unconstrained => (None, None),
            ResolutionConfig::ClassifierPreFilter { beta } => (Some(*beta), None),
            ResolutionConfig::RegressionSurrogate { beta, gamma } => (Some(*beta), Some(*gamma)),
        };

        if let Some(beta) = beta.filter(|beta| !(0. ..=1.).contains(beta)) {
            errors.push(format!("beta should be in [0, 1], got {beta}").into());
        }

        if let Some(gamma) = gamma.filter(|gamma| !gamma.is_finite() || *gamma < 0.) {
            errors.push(format!("gamma should be finite and non-negative, got {gamma}").into());
        }

        if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(errors.as_slice(), "; ").into()) }
    }

    /// Creates an environment: repeatable when seed is set.
    pub fn create_environment(&self, logger: InfoLogger, is_parallel: bool) -> Environment {
        let random: Arc<dyn Random> = match self.seed {
            Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
            None => Arc::new(DefaultRandom::default()),
        };

        Environment::new(random, logger, is_parallel)
    }

    /// Creates the engine.
    pub fn create_engine(&self, environment: &Environment) -> GenericResult<CmaEs> {
        CmaEs::new(self.mu, self.lambda, Point::from_vec(self.xmean.clone()), self.sigma, environment.random.clone())
    }

    /// Creates the configured strategy. The model required by the strategy must be passed.
    pub fn create_strategy<C, R>(
        &self,
        environment: &Environment,
        classifier: Option<C>,
        regressor: Option<R>,
    ) -> GenericResult<ResolutionStrategy<C, R>>
    where
        C: FeasibilityModel,
        R: FitnessModel,
    {
        self.validate()?;

        let engine = self.create_engine(environment)?;
        let logger = &environment.logger;

        Ok(match &self.resolution {
            ResolutionConfig::Unconstrained => {
                (logger)("configured to use unconstrained strategy");
                ResolutionStrategy::Unconstrained(Unconstrained::new(engine, self.max_attempts))
            }
            ResolutionConfig::ClassifierPreFilter { beta } => {
                (logger)(format!("configured to use classifier pre-filter with beta: {beta}").as_str());
                let classifier = classifier.ok_or_else(|| "classifier pre-filter requires a classifier".to_string())?;
                ResolutionStrategy::ClassifierPreFilter(ClassifierPreFilter::new(
                    engine,
                    classifier,
                    *beta,
                    self.max_attempts,
                )?)
            }
            ResolutionConfig::RegressionSurrogate { beta, gamma } => {
                (logger)(format!("configured to use regression surrogate with beta: {beta}, gamma: {gamma}").as_str());
                let regressor = regressor.ok_or_else(|| "regression surrogate requires a regressor".to_string())?;
                ResolutionStrategy::RegressionSurrogate(RegressionSurrogate::new(
                    engine,
                    regressor,
                    *beta,
                    *gamma,
                    self.max_attempts,
                )?)
            }
        })
    }
}
