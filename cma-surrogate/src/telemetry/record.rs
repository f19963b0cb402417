use crate::metrics::ConfusionMatrix;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// A fixed record of strategy state taken when a generation is closed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation number, starting from one.
    pub generation: usize,
    /// Best true fitness of the generation.
    pub best_fitness: Float,
    /// Worst true fitness of the generation.
    pub worst_fitness: Float,
    /// Mean fitness of ranked candidates.
    pub mean_fitness: Float,
    /// Point with the best true fitness.
    pub best_point: Vec<Float>,
    /// Points selected for recombination, from best to worst.
    pub selected: Vec<Vec<Float>>,
    /// Step size after the update.
    pub sigma: Float,
    /// Covariance matrix after the update, row by row.
    pub covariance: Vec<Vec<Float>>,
    /// Eigenvectors of the covariance matrix, row by row.
    pub eigenvectors: Vec<Vec<Float>>,
    /// Square roots of the covariance eigenvalues.
    pub scaling: Vec<Float>,
    /// Classifier quality, when predictions were made.
    pub confusion_matrix: Option<ConfusionMatrix>,
    /// Amount of points reported as infeasible by the true oracle.
    pub infeasible: usize,
    /// Amount of points repaired by the classifier.
    pub repaired: usize,
    /// Amount of points evaluated only on the fitness surrogate.
    pub surrogate_evaluated: usize,
}

/// Values which stay constant during the whole run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConstants {
    /// Name of the constraint resolution strategy.
    pub strategy: String,
    /// Initial mean of the search distribution.
    pub initial_xmean: Vec<Float>,
    /// Initial step size.
    pub initial_sigma: Float,
    /// Share of candidates handled by a surrogate model.
    pub beta: Option<Float>,
    /// Amount of selected parents.
    pub mu: usize,
    /// Amount of sampled offspring.
    pub lambda: usize,
}
