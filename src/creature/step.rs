use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::{ease_out_quad, quadratic_bezier_point, Point, Vec2};

const fn default_step_height() -> f32 {
    20.0
}

/// How a foot travels when its target is re-planted.
///
/// `ticks == 0` plants the foot on the new target immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    pub ticks: u32,
    /// Lift at the top of the arc, toward -y.
    pub height: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            ticks: 0,
            height: default_step_height(),
        }
    }
}

impl StepConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.height.is_finite() {
            return Err(ConfigError::invalid("step.height", "must be finite"));
        }
        Ok(())
    }
}

/// The point a leg actually reaches for: its target, or somewhere on the arc
/// between the previous target and the new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootStep {
    from: Point,
    to: Point,
    position: Point,
    elapsed: u32,
    ticks: u32,
    height: f32,
}

impl FootStep {
    pub fn planted(at: Point) -> Self {
        Self {
            from: at,
            to: at,
            position: at,
            elapsed: 0,
            ticks: 0,
            height: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn destination(&self) -> Point {
        self.to
    }

    pub fn is_stepping(&self) -> bool {
        self.elapsed < self.ticks
    }

    /// Starts a step toward `to` from wherever the foot is now. A step
    /// already in flight keeps its schedule and lands on `to` instead.
    pub fn retarget(&mut self, to: Point, config: &StepConfig) {
        if to == self.to {
            return;
        }
        if config.ticks == 0 {
            *self = Self::planted(to);
            return;
        }
        if self.is_stepping() {
            self.to = to;
            return;
        }

        self.from = self.position;
        self.to = to;
        self.elapsed = 0;
        self.ticks = config.ticks;
        self.height = config.height;
    }

    /// Moves one tick along the current step and returns the new position.
    pub fn advance(&mut self) -> Point {
        if self.is_stepping() {
            self.elapsed += 1;
            let t = ease_out_quad(self.elapsed as f32 / self.ticks as f32);
            let apex = (self.from + self.to) * 0.5 - Vec2::Y * self.height;
            self.position = if self.elapsed == self.ticks {
                self.to
            } else {
                quadratic_bezier_point(t, self.from, apex, self.to)
            };
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_steps_plant_immediately() {
        let mut foot = FootStep::planted(Point::ZERO);
        foot.retarget(Point::new(50.0, 400.0), &StepConfig::default());

        assert!(!foot.is_stepping());
        assert_eq!(foot.position(), Point::new(50.0, 400.0));
        assert_eq!(foot.advance(), Point::new(50.0, 400.0));
    }

    #[test]
    fn animated_step_arcs_and_lands() {
        let config = StepConfig {
            ticks: 4,
            height: 30.0,
        };
        let mut foot = FootStep::planted(Point::new(0.0, 400.0));
        foot.retarget(Point::new(100.0, 400.0), &config);

        assert!(foot.is_stepping());
        assert_eq!(foot.position(), Point::new(0.0, 400.0));

        let mut xs = Vec::new();
        for _ in 0..3 {
            let p = foot.advance();
            assert!(p.y < 400.0, "foot should be lifted mid-step, got {:?}", p);
            xs.push(p.x);
        }
        assert!(xs.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(foot.advance(), Point::new(100.0, 400.0));
        assert!(!foot.is_stepping());
        assert_eq!(foot.advance(), Point::new(100.0, 400.0));
    }

    #[test]
    fn retarget_mid_step_keeps_schedule() {
        let config = StepConfig {
            ticks: 10,
            height: 0.0,
        };
        let mut foot = FootStep::planted(Point::ZERO);
        foot.retarget(Point::new(100.0, 0.0), &config);
        foot.advance();
        let mid = foot.position();

        foot.retarget(Point::new(-100.0, 0.0), &config);
        assert_eq!(foot.position(), mid);
        assert_eq!(foot.destination(), Point::new(-100.0, 0.0));
        assert!(foot.advance().x < mid.x);

        for _ in 0..8 {
            foot.advance();
        }
        assert!(!foot.is_stepping());
        assert_eq!(foot.position(), Point::new(-100.0, 0.0));
    }

    #[test]
    fn retarget_every_tick_still_lands() {
        let config = StepConfig {
            ticks: 4,
            height: 10.0,
        };
        let mut foot = FootStep::planted(Point::ZERO);
        let mut landed = 0;
        for tick in 1..=40 {
            let to = Point::new(tick as f32, 0.0);
            foot.retarget(to, &config);
            if foot.advance() == to {
                landed += 1;
            }
        }
        assert!(landed >= 8, "landed {} times in 40 ticks", landed);
    }

    #[test]
    fn same_target_does_not_restart() {
        let config = StepConfig {
            ticks: 3,
            height: 10.0,
        };
        let mut foot = FootStep::planted(Point::ZERO);
        foot.retarget(Point::new(30.0, 0.0), &config);
        foot.advance();
        foot.retarget(Point::new(30.0, 0.0), &config);
        foot.advance();
        foot.advance();
        assert!(!foot.is_stepping());
    }
}
