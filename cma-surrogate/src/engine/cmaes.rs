#[cfg(test)]
#[path = "../../tests/unit/engine/cmaes_test.rs"]
mod cmaes_test;

use super::{EvolutionPath, SearchDistribution, StrategyConstants};
use crate::utils::*;
use std::sync::Arc;

/// Default limit of sampled points per generation before sampling gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// A result of accept/reject sampling.
pub struct SampleBatch {
    /// Accepted points, exactly `lambda` of them.
    pub candidates: Vec<Point>,
    /// Amount of rejected points.
    pub rejected: usize,
}

/// Covariance matrix adaptation evolution strategy engine.
///
/// The engine owns the search distribution exclusively: it is changed only by [`CmaEs::update`]
/// and exposed through read-only accessors.
pub struct CmaEs {
    constants: StrategyConstants,
    distribution: SearchDistribution,
    path: EvolutionPath,
    random: Arc<dyn Random>,
    generation: usize,
}

impl CmaEs {
    /// Creates a new instance of `CmaEs` with identity covariance and zero evolution paths.
    pub fn new(mu: usize, lambda: usize, xmean: Point, sigma: Float, random: Arc<dyn Random>) -> GenericResult<Self> {
        if !sigma.is_finite() || sigma <= 0. {
            return Err(format!("initial sigma should be finite and positive, got {sigma}").into());
        }

        if xmean.iter().any(|value| !value.is_finite()) {
            return Err("initial mean should have only finite values".into());
        }

        let constants = StrategyConstants::new(mu, lambda, xmean.len())?;
        let path = EvolutionPath::new(xmean.len());
        let distribution = SearchDistribution::new(xmean, sigma);

        Ok(Self { constants, distribution, path, random, generation: 0 })
    }

    /// Returns strategy constants.
    pub fn constants(&self) -> &StrategyConstants {
        &self.constants
    }

    /// Returns current search distribution.
    pub fn distribution(&self) -> &SearchDistribution {
        &self.distribution
    }

    /// Returns evolution paths.
    pub fn path(&self) -> &EvolutionPath {
        &self.path
    }

    /// Returns amount of completed updates.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns dimension of the search space.
    pub fn dimension(&self) -> usize {
        self.constants.dimension
    }

    /// Returns a random generator used for sampling.
    pub fn random(&self) -> &dyn Random {
        self.random.as_ref()
    }

    /// Draws one point from the search distribution.
    pub fn sample_point(&self) -> Point {
        let z = Point::from_fn(self.dimension(), |_, _| self.random.standard_normal());

        self.distribution.transform(&z)
    }

    /// Draws points until exactly `lambda` of them pass the feasibility check. Fails when
    /// `max_attempts` points were drawn without collecting enough.
    ///
    /// This is the synchronous entry point for callers which own a cheap feasibility oracle and
    /// drive the engine directly. Strategies use the ask/tell protocol instead, where the oracle
    /// is resolved by the caller between calls.
    pub fn sample<F>(&self, is_feasible: F, max_attempts: usize) -> OptimizationResult<SampleBatch>
    where
        F: Fn(&Point) -> bool,
    {
        let lambda = self.constants.lambda;
        let mut candidates = Vec::with_capacity(lambda);
        let mut attempts = 0;

        while candidates.len() < lambda {
            if attempts >= max_attempts {
                return Err(OptimizationError::ResamplingExhausted { attempts });
            }

            attempts += 1;
            let point = self.sample_point();
            if is_feasible(&point) {
                candidates.push(point);
            }
        }

        Ok(SampleBatch { rejected: attempts - candidates.len(), candidates })
    }

    /// Adapts the distribution using selected points ranked from best to worst. Only the first
    /// `mu` points are used.
    pub fn update(&mut self, selected: &[Point]) -> OptimizationResult<()> {
        let StrategyConstants { mu, dimension, ref weights, mueff, cc, cs, c1, cmu, damps, chi_n, .. } =
            self.constants;

        if selected.len() < mu {
            return Err(OptimizationError::ContractViolation(format!(
                "update needs at least {mu} selected points, got {}",
                selected.len()
            )));
        }

        if let Some(point) = selected.iter().take(mu).find(|point| point.len() != dimension) {
            return Err(OptimizationError::ContractViolation(format!(
                "point dimension mismatch: expected {dimension}, got {}",
                point.len()
            )));
        }

        let selected = &selected[..mu];
        let old_mean = &self.distribution.xmean;
        let sigma = self.distribution.sigma;

        let new_mean = weights.iter().zip(selected.iter()).fold(Point::zeros(dimension), |acc, (w, x)| acc + x * *w);

        let y = &new_mean - old_mean;
        let z = &self.distribution.inv_sqrt_covariance * &y;

        let ps = &self.path.ps * (1. - cs) + z * ((cs * (2. - cs) * mueff).sqrt() / sigma);
        let pc = &self.path.pc * (1. - cc) + &y * ((cc * (2. - cc) * mueff).sqrt() / sigma);

        let rank_one = &pc * pc.transpose() * c1;
        let rank_mu = weights.iter().zip(selected.iter()).fold(Matrix::zeros(dimension, dimension), |acc, (w, x)| {
            let dev = (x - old_mean) / sigma;
            acc + &dev * dev.transpose() * *w
        }) * cmu;

        let new_sigma = sigma * ((cs / damps) * (ps.norm() / chi_n - 1.)).exp();
        if !new_sigma.is_finite() || new_sigma <= 0. {
            return Err(OptimizationError::NumericalInstability(format!("step size degenerated to {new_sigma}")));
        }

        let mut distribution = SearchDistribution {
            xmean: new_mean,
            sigma: new_sigma,
            covariance: &self.distribution.covariance * (1. - c1 - cmu) + rank_one + rank_mu,
            ..self.distribution.clone()
        };
        distribution.refresh_decomposition()?;

        self.distribution = distribution;
        self.path = EvolutionPath { pc, ps };
        self.generation += 1;

        Ok(())
    }
}
