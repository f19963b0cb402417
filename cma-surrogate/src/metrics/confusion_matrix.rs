#[cfg(test)]
#[path = "../../tests/unit/metrics/confusion_matrix_test.rs"]
mod confusion_matrix_test;

use crate::utils::{Float, OptimizationError, OptimizationResult};
use serde::{Deserialize, Serialize};

/// Counts agreement between classifier predictions and true feasibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Predicted feasible, actually feasible.
    pub tp: usize,
    /// Predicted feasible, actually infeasible.
    pub fp: usize,
    /// Predicted infeasible, actually infeasible.
    pub tn: usize,
    /// Predicted infeasible, actually feasible.
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Builds confusion matrix from `(predicted, actual)` pairs.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (bool, bool)>,
    {
        pairs.into_iter().fold(Self::default(), |mut acc, pair| {
            match pair {
                (true, true) => acc.tp += 1,
                (true, false) => acc.fp += 1,
                (false, true) => acc.fn_ += 1,
                (false, false) => acc.tn += 1,
            }
            acc
        })
    }

    /// Returns amount of classified pairs.
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// Returns share of correct positive predictions: `tp / (tp + fp)`, zero without positives.
    pub fn positive_prediction_accuracy(&self) -> Float {
        ratio_or_zero(self.tp, self.tp + self.fp)
    }

    /// Returns share of correct negative predictions: `tn / (tn + fn)`, zero without negatives.
    pub fn negative_prediction_accuracy(&self) -> Float {
        ratio_or_zero(self.tn, self.tn + self.fn_)
    }

    /// Returns share of correct predictions.
    pub fn accuracy(&self) -> OptimizationResult<Float> {
        match self.total() {
            0 => Err(OptimizationError::DegenerateRatio("accuracy")),
            total => Ok((self.tp + self.tn) as Float / total as Float),
        }
    }

    /// Returns Matthews correlation coefficient in `[-1, 1]`.
    pub fn mcc(&self) -> OptimizationResult<Float> {
        let (tp, fp, tn, fn_) = (self.tp as Float, self.fp as Float, self.tn as Float, self.fn_ as Float);
        let marginals = [tp + fp, tp + fn_, tn + fp, tn + fn_];

        if marginals.iter().any(|&value| value == 0.) {
            return Err(OptimizationError::DegenerateRatio("mcc"));
        }

        Ok((tp * tn - fp * fn_) / marginals.iter().product::<Float>().sqrt())
    }

    /// Returns counts as `[[tp, fp], [fn, tn]]`.
    pub fn as_matrix(&self) -> [[usize; 2]; 2] {
        [[self.tp, self.fp], [self.fn_, self.tn]]
    }
}

fn ratio_or_zero(numerator: usize, denominator: usize) -> Float {
    if denominator == 0 { 0. } else { numerator as Float / denominator as Float }
}
