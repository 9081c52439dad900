//! Inverse Kinematics module
//!
//! This module contains the planar joint chain and the FABRIK solver.

pub mod chain;
pub mod error;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use error::ChainError;
pub use solver::{FabrikSolver, SolveMode, SolveResult, DEFAULT_ITERATIONS, EPSILON};
