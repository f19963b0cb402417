//! Interfaces of the surrogate models consumed by the constraint handlers. Training algorithms
//! are not part of this crate: any classifier or regressor which accumulates points, trains on
//! them and predicts can be plugged in.

use crate::utils::{Float, Point};

/// A binary classifier which approximates feasibility of points.
///
/// All points passed to the model are expressed in the frame aligned with the mutation
/// ellipsoid, see [`RotationFrame`](crate::strategies::RotationFrame).
pub trait FeasibilityModel {
    /// Predicts whether the point is feasible.
    fn predict(&self, point: &Point) -> bool;

    /// Adds a feasible point to the training pool.
    fn add_feasible(&mut self, point: Point);

    /// Adds an infeasible point to the training pool.
    fn add_infeasible(&mut self, point: Point);

    /// Adds feasible points ranked from best to worst fitness.
    fn add_sorted_feasibles(&mut self, points: Vec<Point>) {
        points.into_iter().for_each(|point| self.add_feasible(point));
    }

    /// Trains the model on accumulated points. Returns true when the model is usable for
    /// predictions afterwards.
    fn train(&mut self) -> bool;

    /// Tries to move a point which is predicted as infeasible into the feasible region.
    fn repair(&self, _point: &Point) -> Option<Point> {
        None
    }
}

/// A regression model which approximates fitness of points.
pub trait FitnessModel {
    /// Predicts fitness of the point.
    fn predict(&self, point: &Point) -> Float;

    /// Adds evaluated points ranked from best to worst fitness.
    fn add(&mut self, evaluations: Vec<(Point, Float)>);

    /// Trains the model on accumulated points. Returns true when the model is usable for
    /// predictions afterwards.
    fn train(&mut self) -> bool;
}
