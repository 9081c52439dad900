use std::f32::consts::PI;

use super::config::CreatureConfig;
use super::gait::GaitPolicy;
use super::leg::Leg;
use super::step::StepConfig;
use crate::error::{Error, Result};
use crate::ik::{Chain, SolveResult, EPSILON};
use crate::math::{distance, Point, Vec2};

/// A body point with several legs hanging off it.
///
/// Every leg keeps its own copy of the root; `move_body` writes the body
/// position into each of them so they never drift apart.
#[derive(Debug, Clone)]
pub struct Creature {
    body: Point,
    legs: Vec<Leg>,
    policy: GaitPolicy,
    step: StepConfig,
}

impl Creature {
    pub fn new(config: &CreatureConfig) -> Result<Self> {
        config.validate()?;

        let body = config.start_position;
        let mut legs = Vec::with_capacity(config.num_legs);

        for i in 0..config.num_legs {
            // Fan the legs out below the body, evenly spaced between the
            // horizontals.
            let angle = PI * (i + 1) as f32 / (config.num_legs + 1) as f32;
            let dir = Vec2::from_angle(angle);

            let chain = Chain::builder()
                .joints(
                    (0..config.joints_per_leg)
                        .map(|j| body + dir * (j as f32 * config.segment_length)),
                )
                .iterations(config.iterations)
                .build()
                .map_err(|source| Error::Leg { leg: i, source })?;

            let target = chain.tip()
                + config.target_offset
                + Vec2::new(i as f32 * config.target_stagger, 0.0);
            if distance(target, chain.root()) < EPSILON {
                return Err(Error::TargetOnRoot { leg: i });
            }

            legs.push(Leg::new(i, chain, target));
        }

        log::info!(
            "created creature at ({:.1}, {:.1}) with {} legs of {} joints",
            body.x,
            body.y,
            config.num_legs,
            config.joints_per_leg
        );

        Ok(Self {
            body,
            legs,
            policy: config.policy,
            step: config.step,
        })
    }

    pub fn body(&self) -> Point {
        self.body
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn leg(&self, index: usize) -> Option<&Leg> {
        self.legs.get(index)
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    pub fn targets(&self) -> impl Iterator<Item = Point> + '_ {
        self.legs.iter().map(Leg::target)
    }

    pub fn policy(&self) -> GaitPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: GaitPolicy) {
        self.policy = policy;
    }

    pub fn step_config(&self) -> StepConfig {
        self.step
    }

    pub fn set_step_config(&mut self, step: StepConfig) {
        self.step = step;
    }

    /// Moves the body and glues every leg's root to it.
    pub fn move_body(&mut self, x: f32, y: f32) {
        self.move_body_to(Point::new(x, y));
    }

    pub fn move_body_to(&mut self, body: Point) {
        self.body = body;
        for leg in &mut self.legs {
            leg.move_root(body);
        }
    }

    /// Overrides one leg's target, bypassing the policy until its next run.
    /// Returns `false` for an unknown leg.
    pub fn set_target(&mut self, index: usize, target: Point) -> bool {
        match self.legs.get_mut(index) {
            Some(leg) => {
                leg.set_target(target, &self.step);
                true
            }
            None => false,
        }
    }

    /// Runs the gait policy over every leg. Returns how many targets moved.
    pub fn update_targets(&mut self) -> usize {
        let count = self.legs.len();
        let mut moved = 0;

        for leg in &mut self.legs {
            let next = self
                .policy
                .next_target(leg.index(), count, leg.target(), self.body);
            if leg.set_target(next, &self.step) {
                log::debug!(
                    "leg {} re-planted at ({:.1}, {:.1})",
                    leg.index(),
                    next.x,
                    next.y
                );
                moved += 1;
            }
        }

        moved
    }

    /// Solves every leg toward its foot position.
    pub fn solve_legs(&mut self) -> Vec<SolveResult> {
        self.legs.iter_mut().map(Leg::solve).collect()
    }

    /// One animation step: move the body, update targets, then solve.
    pub fn tick(&mut self, body: Point) -> Vec<SolveResult> {
        self.move_body_to(body);
        self.update_targets();
        self.solve_legs()
    }
}
