#[cfg(test)]
#[path = "../../tests/unit/engine/constants_test.rs"]
mod constants_test;

use crate::utils::{Float, GenericResult};

/// Keeps strategy parameters which are derived once from `(mu, lambda, N)` and never change
/// during the run.
#[derive(Clone, Debug)]
pub struct StrategyConstants {
    /// Amount of selected parents.
    pub mu: usize,
    /// Amount of sampled offspring.
    pub lambda: usize,
    /// Search space dimension.
    pub dimension: usize,
    /// Recombination weights: positive, non-increasing, sum to one.
    pub weights: Vec<Float>,
    /// Variance effective selection mass.
    pub mueff: Float,
    /// Time constant for cumulation of the covariance path.
    pub cc: Float,
    /// Time constant for cumulation of the step size path.
    pub cs: Float,
    /// Learning rate of the rank-one update.
    pub c1: Float,
    /// Learning rate of the rank-mu update.
    pub cmu: Float,
    /// Damping of the step size adaptation.
    pub damps: Float,
    /// Expected norm of a standard normally distributed vector.
    pub chi_n: Float,
}

impl StrategyConstants {
    /// Derives strategy constants.
    pub fn new(mu: usize, lambda: usize, dimension: usize) -> GenericResult<Self> {
        if mu == 0 || mu > lambda {
            return Err(format!("mu should be in [1, lambda], got mu={mu}, lambda={lambda}").into());
        }

        if dimension == 0 {
            return Err("dimension of the search space should be positive".into());
        }

        let raw_weights = (0..mu).map(|i| (mu as Float + 0.5).ln() - ((i + 1) as Float).ln()).collect::<Vec<_>>();
        let total: Float = raw_weights.iter().sum();
        let weights = raw_weights.into_iter().map(|w| w / total).collect::<Vec<_>>();

        let n = dimension as Float;
        let mueff = 1. / weights.iter().map(|w| w * w).sum::<Float>();

        let cc = (4. + mueff / n) / (n + 4. + 2. * mueff / n);
        let cs = (mueff + 2.) / (n + mueff + 5.);
        let c1 = 2. / ((n + 1.3).powi(2) + mueff);
        let cmu = (1. - c1).min(2. * (mueff - 2. + 1. / mueff) / ((n + 2.).powi(2) + mueff));
        let damps = 2. * mueff / lambda as Float + 0.3 + cs;
        let chi_n = n.sqrt() * (1. - 1. / (4. * n) + 1. / (21. * n * n));

        Ok(Self { mu, lambda, dimension, weights, mueff, cc, cs, c1, cmu, damps, chi_n })
    }
}
