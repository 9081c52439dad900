use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::Point;

const fn default_threshold() -> f32 {
    90.0
}
const fn default_overshoot() -> f32 {
    1.5
}
const fn default_stagger() -> f32 {
    20.0
}
const fn default_offset() -> f32 {
    -40.0
}
const fn default_spread() -> f32 {
    150.0
}
const fn default_ground_y() -> f32 {
    400.0
}

/// Decides where each leg's target goes, given the body position.
///
/// Policies are pure: the same targets and body always produce the same
/// result, and legs never see each other's targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GaitPolicy {
    /// Leave a target planted until the body drifts `threshold` away from it
    /// horizontally, then swing it `overshoot` times the offset back past the
    /// body. `stagger` shifts each leg's trigger point so legs lift at
    /// different moments.
    ThresholdRecentre {
        #[serde(default = "default_threshold")]
        threshold: f32,
        #[serde(default = "default_overshoot")]
        overshoot: f32,
        #[serde(default = "default_stagger")]
        stagger: f32,
    },
    /// Re-plant every target each tick, spread evenly across `spread` units
    /// starting `offset` from the body, on the ground line `ground_y`.
    FullReassign {
        #[serde(default = "default_offset")]
        offset: f32,
        #[serde(default = "default_spread")]
        spread: f32,
        #[serde(default = "default_ground_y")]
        ground_y: f32,
    },
}

impl Default for GaitPolicy {
    fn default() -> Self {
        Self::threshold_recentre()
    }
}

impl GaitPolicy {
    pub const fn threshold_recentre() -> Self {
        Self::ThresholdRecentre {
            threshold: default_threshold(),
            overshoot: default_overshoot(),
            stagger: default_stagger(),
        }
    }

    pub const fn full_reassign() -> Self {
        Self::FullReassign {
            offset: default_offset(),
            spread: default_spread(),
            ground_y: default_ground_y(),
        }
    }

    /// Where target `index` of `count` should be, given where it is now.
    pub fn next_target(&self, index: usize, count: usize, current: Point, body: Point) -> Point {
        match *self {
            Self::ThresholdRecentre {
                threshold,
                overshoot,
                stagger,
            } => {
                let normalized = index as f32 - count as f32 / 2.0 + 0.5;
                if (current.x + stagger * normalized - body.x).abs() > threshold {
                    let diff = current.x - body.x;
                    Point::new(current.x - diff * overshoot, current.y)
                } else {
                    current
                }
            }
            Self::FullReassign {
                offset,
                spread,
                ground_y,
            } => {
                let normalized = index as f32 / count as f32;
                Point::new(body.x + offset + normalized * spread, ground_y)
            }
        }
    }

    /// Applies the policy to every target in place and returns how many moved.
    pub fn apply(&self, targets: &mut [Point], body: Point) -> usize {
        let count = targets.len();
        let mut moved = 0;
        for (index, target) in targets.iter_mut().enumerate() {
            let next = self.next_target(index, count, *target, body);
            if next != *target {
                *target = next;
                moved += 1;
            }
        }
        moved
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::ThresholdRecentre {
                threshold,
                overshoot,
                stagger,
            } => {
                if !threshold.is_finite() || threshold < 0.0 {
                    return Err(ConfigError::invalid(
                        "policy.threshold",
                        format!("{threshold} (must be finite and >= 0)"),
                    ));
                }
                if !overshoot.is_finite() {
                    return Err(ConfigError::invalid("policy.overshoot", "must be finite"));
                }
                if !stagger.is_finite() {
                    return Err(ConfigError::invalid("policy.stagger", "must be finite"));
                }
            }
            Self::FullReassign {
                offset,
                spread,
                ground_y,
            } => {
                for (field, value) in [
                    ("policy.offset", offset),
                    ("policy.spread", spread),
                    ("policy.ground_y", ground_y),
                ] {
                    if !value.is_finite() {
                        return Err(ConfigError::invalid(field, "must be finite"));
                    }
                }
            }
        }
        Ok(())
    }
}
