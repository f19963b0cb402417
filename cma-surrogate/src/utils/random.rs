#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::Error;
use rand_distr::StandardNormal;
use std::cell::RefCell;
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool {
        if probability <= 0. {
            return false;
        }

        if probability >= 1. {
            return true;
        }

        self.uniform_real(0., 1.) < probability
    }

    /// Produces a standard normally distributed value: zero mean and unit variance.
    fn standard_normal(&self) -> Float {
        self.get_rng().sample(StandardNormal)
    }

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation.
pub struct DefaultRandom {
    rng: RandomGen,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence of values
    /// for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RandomGen::seed_from_u64(seed) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RandomGen::with_rng(Rc::new(RefCell::new(SmallRng::from_entropy()))) }
    }
}

impl Random for DefaultRandom {
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.get_rng().gen_bool(probability.clamp(0., 1.))
    }

    fn get_rng(&self) -> RandomGen {
        self.rng.clone()
    }
}

/// Specifies underlying random generator type. Clones share the same generator state.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Rc<RefCell<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` using given reference to small rng.
    pub fn with_rng(rng: Rc<RefCell<SmallRng>>) -> Self {
        Self { rng }
    }
}

impl SeedableRng for RandomGen {
    type Seed = <SmallRng as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_rng(Rc::new(RefCell::new(SmallRng::from_seed(seed))))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_rng(Rc::new(RefCell::new(SmallRng::seed_from_u64(state))))
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.borrow_mut().try_fill_bytes(dest)
    }
}
