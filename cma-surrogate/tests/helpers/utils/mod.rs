
use crate::engine::CmaEs;
use crate::utils::{DefaultRandom, Float, Point, Random};
use std::sync::Arc;

pub fn create_test_random() -> Arc<dyn Random> {
    Arc::new(DefaultRandom::new_repeatable(42))
}

pub fn create_test_engine(mu: usize, lambda: usize, xmean: &[Float], sigma: Float) -> CmaEs {
    CmaEs::new(mu, lambda, Point::from_row_slice(xmean), sigma, create_test_random()).expect("cannot create engine")
}
