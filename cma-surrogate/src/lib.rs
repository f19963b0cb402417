//! This crate implements the covariance matrix adaptation evolution strategy (CMA-ES) with
//! surrogate assisted constraint handling.
//!
//! The engine is driven through an ask/tell protocol which lets a caller resolve feasibility and
//! fitness of candidates outside of the optimizer. Two surrogate variants are provided:
//! - a classifier pre-filter which predicts feasibility of candidates in a frame aligned with the
//!   mutation ellipsoid and verifies predictions a-posteriori;
//! - a regression surrogate which replaces true fitness evaluation for a share of candidates.
//!
//! A [`Simulator`](simulator::Simulator) wires a [`Problem`](problem::Problem) to any strategy.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod models;
pub mod prelude;
pub mod problem;
pub mod simulator;
pub mod strategies;
pub mod telemetry;
pub mod termination;
pub mod utils;
