//! This module contains generic algorithms used by the strategies.

pub mod math;
