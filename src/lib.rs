//! # spider-ik
//!
//! Planar inverse kinematics for procedurally animated, multi-legged
//! creatures, built on the FABRIK algorithm.
//!
//! ## Features
//! - FABRIK (Forward And Backward Reaching Inverse Kinematics) solver with a
//!   fixed, configurable number of passes per solve
//! - Anchored and drag-only solve modes
//! - Creature coordinator: one body, many legs, pluggable gait policies
//! - Optional eased stepping arcs when a foot is re-planted
//!
//! ## Example
//! ```rust
//! use spider_ik::creature::{Creature, CreatureConfig};
//! use spider_ik::math::Point;
//!
//! let mut creature = Creature::new(&CreatureConfig::default())?;
//!
//! for frame in 0..60 {
//!     let body = Point::new(300.0 + frame as f32 * 2.0, 250.0);
//!     creature.tick(body);
//! }
//!
//! for leg in creature.legs() {
//!     println!("leg {} tip at {:?}", leg.index(), leg.chain().tip());
//! }
//! # Ok::<(), spider_ik::Error>(())
//! ```

pub mod creature;
pub mod error;
pub mod ik;
pub mod math;

pub use creature::{Creature, CreatureConfig, FootStep, GaitPolicy, Leg, StepConfig};
pub use error::{ConfigError, Error, Result};
pub use ik::{Chain, ChainBuilder, ChainError, FabrikSolver, SolveMode, SolveResult};
pub use math::{distance, segment_lengths, Point};
