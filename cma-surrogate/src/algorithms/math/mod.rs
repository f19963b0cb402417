//! This module contains some statistic related functionality.

mod statistics;
pub use self::statistics::*;
