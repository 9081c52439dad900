use serde::{Deserialize, Serialize};

use super::gait::GaitPolicy;
use super::step::StepConfig;
use crate::error::ConfigError;
use crate::ik::DEFAULT_ITERATIONS;
use crate::math::Point;

/// Upper bound on `num_legs`.
pub const MAX_LEGS: usize = 1024;

/// Upper bound on `joints_per_leg`.
pub const MAX_JOINTS_PER_LEG: usize = 1024;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_num_legs() -> usize {
    3
}
const fn default_joints_per_leg() -> usize {
    4
}
const fn default_segment_length() -> f32 {
    30.0
}
const fn default_start_position() -> Point {
    Point::new(300.0, 250.0)
}
const fn default_target_offset() -> Point {
    Point::new(0.0, 40.0)
}
const fn default_target_stagger() -> f32 {
    40.0
}
const fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

/// Construction parameters for a [`Creature`](super::Creature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreatureConfig {
    /// Number of legs (>= 1).
    pub num_legs: usize,

    /// Joints per leg including the root (>= 2).
    pub joints_per_leg: usize,

    /// Rest length of every segment in the initial pose.
    pub segment_length: f32,

    /// Body position at creation; every leg is rooted here.
    pub start_position: Point,

    /// Offset from each leg's initial tip to its initial target.
    pub target_offset: Point,

    /// Extra horizontal offset per leg index for the initial targets.
    pub target_stagger: f32,

    /// FABRIK relaxation passes per tick.
    pub iterations: u32,

    pub policy: GaitPolicy,

    pub step: StepConfig,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            num_legs: default_num_legs(),
            joints_per_leg: default_joints_per_leg(),
            segment_length: default_segment_length(),
            start_position: default_start_position(),
            target_offset: default_target_offset(),
            target_stagger: default_target_stagger(),
            iterations: default_iterations(),
            policy: GaitPolicy::default(),
            step: StepConfig::default(),
        }
    }
}

impl CreatureConfig {
    /// Parses and validates a TOML document. Missing fields take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_LEGS).contains(&self.num_legs) {
            return Err(ConfigError::InvalidLegCount(self.num_legs));
        }
        if !(2..=MAX_JOINTS_PER_LEG).contains(&self.joints_per_leg) {
            return Err(ConfigError::InvalidJointCount(self.joints_per_leg));
        }
        if !self.segment_length.is_finite() || self.segment_length <= 0.0 {
            return Err(ConfigError::InvalidSegmentLength(self.segment_length));
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !self.start_position.is_finite() {
            return Err(ConfigError::invalid("start_position", "must be finite"));
        }
        if !self.target_offset.is_finite() || !self.target_stagger.is_finite() {
            return Err(ConfigError::invalid("target_offset", "must be finite"));
        }
        self.policy.validate()?;
        self.step.validate()?;
        Ok(())
    }

    /// Sum of one leg's segment lengths in the initial pose.
    pub fn leg_reach(&self) -> f32 {
        self.joints_per_leg.saturating_sub(1) as f32 * self.segment_length
    }
}
