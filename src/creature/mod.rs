//! Multi-legged creature module
//!
//! A shared body point, one FABRIK chain per leg, and the gait policies that
//! decide where each foot should go.

pub mod config;
pub mod coordinator;
pub mod gait;
pub mod leg;
pub mod step;

pub use config::{CreatureConfig, MAX_JOINTS_PER_LEG, MAX_LEGS};
pub use coordinator::Creature;
pub use gait::GaitPolicy;
pub use leg::Leg;
pub use step::{FootStep, StepConfig};
