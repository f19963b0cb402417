//! Classification quality metrics of the feasibility classifier.

mod confusion_matrix;
pub use self::confusion_matrix::ConfusionMatrix;
