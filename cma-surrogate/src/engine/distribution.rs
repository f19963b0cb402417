#[cfg(test)]
#[path = "../../tests/unit/engine/distribution_test.rs"]
mod distribution_test;

use crate::utils::{Float, Matrix, OptimizationError, OptimizationResult, Point};

/// Bound for QR iterations of the symmetric eigendecomposition.
const MAX_EIGEN_ITERATIONS: usize = 10_000;

/// Specifies the multivariate normal search distribution `N(xmean, sigma^2 * C)`.
#[derive(Clone, Debug)]
pub struct SearchDistribution {
    pub(crate) xmean: Point,
    pub(crate) sigma: Float,
    pub(crate) covariance: Matrix,
    pub(crate) eigenvectors: Matrix,
    pub(crate) scaling: Point,
    pub(crate) inv_sqrt_covariance: Matrix,
}

impl SearchDistribution {
    /// Creates a distribution with identity covariance.
    pub fn new(xmean: Point, sigma: Float) -> Self {
        let dimension = xmean.len();

        Self {
            xmean,
            sigma,
            covariance: Matrix::identity(dimension, dimension),
            eigenvectors: Matrix::identity(dimension, dimension),
            scaling: Point::from_element(dimension, 1.),
            inv_sqrt_covariance: Matrix::identity(dimension, dimension),
        }
    }

    /// Returns current mean.
    pub fn xmean(&self) -> &Point {
        &self.xmean
    }

    /// Returns current step size.
    pub fn sigma(&self) -> Float {
        self.sigma
    }

    /// Returns covariance matrix `C`.
    pub fn covariance(&self) -> &Matrix {
        &self.covariance
    }

    /// Returns eigenvectors `B` of the covariance matrix, one per column.
    pub fn eigenvectors(&self) -> &Matrix {
        &self.eigenvectors
    }

    /// Returns square roots `D` of the covariance eigenvalues.
    pub fn scaling(&self) -> &Point {
        &self.scaling
    }

    /// Returns `C^(-1/2)`.
    pub fn inv_sqrt_covariance(&self) -> &Matrix {
        &self.inv_sqrt_covariance
    }

    /// Maps a standard normal vector into the search space: `xmean + sigma * B * (D .* z)`.
    pub fn transform(&self, z: &Point) -> Point {
        &self.xmean + (&self.eigenvectors * z.component_mul(&self.scaling)) * self.sigma
    }

    /// Symmetrizes `C`, decomposes it and recomposes `C = B * diag(D^2) * B^T`.
    /// Fails when the decomposition does not converge or `C` is not positive definite.
    pub fn refresh_decomposition(&mut self) -> OptimizationResult<()> {
        let symmetric = (&self.covariance + self.covariance.transpose()) * 0.5;

        let eigen = symmetric
            .try_symmetric_eigen(Float::EPSILON, MAX_EIGEN_ITERATIONS)
            .ok_or_else(|| OptimizationError::NumericalInstability("eigendecomposition did not converge".to_string()))?;

        if let Some(value) = eigen.eigenvalues.iter().find(|value| !value.is_finite() || **value <= 0.) {
            return Err(OptimizationError::NumericalInstability(format!(
                "covariance matrix is not positive definite, eigenvalue: {value}"
            )));
        }

        let scaling = eigen.eigenvalues.map(|value| value.sqrt());
        let inv_scaling = scaling.map(|value| 1. / value);
        let basis = eigen.eigenvectors;

        self.inv_sqrt_covariance = &basis * Matrix::from_diagonal(&inv_scaling) * basis.transpose();
        self.covariance = &basis * Matrix::from_diagonal(&eigen.eigenvalues) * basis.transpose();
        self.eigenvectors = basis;
        self.scaling = scaling;

        Ok(())
    }
}

/// Keeps evolution paths used for cumulative adaptation.
#[derive(Clone, Debug)]
pub struct EvolutionPath {
    /// A path of the covariance matrix adaptation.
    pub pc: Point,
    /// A path of the step size adaptation.
    pub ps: Point,
}

impl EvolutionPath {
    /// Creates zero paths of given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { pc: Point::zeros(dimension), ps: Point::zeros(dimension) }
    }
}
