use crate::prelude::*;
use crate::utils::SlidingWindow;
use std::cell::Cell;

type PredictFn = Box<dyn Fn(&Point) -> bool>;
type RepairFn = Box<dyn Fn(&Point) -> Option<Point>>;

/// A classifier with predefined behavior which records how it is used.
pub struct FakeClassifier {
    predict_fn: PredictFn,
    repair_fn: Option<RepairFn>,
    is_trainable: bool,
    pub feasibles: SlidingWindow<Point>,
    pub infeasibles: SlidingWindow<Point>,
    pub predict_calls: Cell<usize>,
    pub train_calls: usize,
}

impl FakeClassifier {
    pub fn new(predict_fn: impl Fn(&Point) -> bool + 'static) -> Self {
        Self {
            predict_fn: Box::new(predict_fn),
            repair_fn: None,
            is_trainable: true,
            feasibles: SlidingWindow::new(100),
            infeasibles: SlidingWindow::new(100),
            predict_calls: Cell::new(0),
            train_calls: 0,
        }
    }

    pub fn with_repair(mut self, repair_fn: impl Fn(&Point) -> Option<Point> + 'static) -> Self {
        self.repair_fn = Some(Box::new(repair_fn));
        self
    }

    pub fn untrainable(mut self) -> Self {
        self.is_trainable = false;
        self
    }
}

impl FeasibilityModel for FakeClassifier {
    fn predict(&self, point: &Point) -> bool {
        self.predict_calls.set(self.predict_calls.get() + 1);
        (self.predict_fn)(point)
    }

    fn add_feasible(&mut self, point: Point) {
        self.feasibles.push(point);
    }

    fn add_infeasible(&mut self, point: Point) {
        self.infeasibles.push(point);
    }

    fn train(&mut self) -> bool {
        self.train_calls += 1;
        self.is_trainable && !self.feasibles.is_empty()
    }

    fn repair(&self, point: &Point) -> Option<Point> {
        self.repair_fn.as_ref().and_then(|repair_fn| repair_fn(point))
    }
}

/// A regressor with predefined behavior which records how it is used.
pub struct FakeRegressor {
    predict_fn: Box<dyn Fn(&Point) -> Float>,
    pub added: Vec<(Point, Float)>,
    pub predict_calls: Cell<usize>,
    pub train_calls: usize,
}

impl FakeRegressor {
    pub fn new(predict_fn: impl Fn(&Point) -> Float + 'static) -> Self {
        Self { predict_fn: Box::new(predict_fn), added: vec![], predict_calls: Cell::new(0), train_calls: 0 }
    }
}

impl FitnessModel for FakeRegressor {
    fn predict(&self, point: &Point) -> Float {
        self.predict_calls.set(self.predict_calls.get() + 1);
        (self.predict_fn)(point)
    }

    fn add(&mut self, evaluations: Vec<(Point, Float)>) {
        self.added.extend(evaluations);
    }

    fn train(&mut self) -> bool {
        self.train_calls += 1;
        !self.added.is_empty()
    }
}
