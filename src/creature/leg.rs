use super::step::{FootStep, StepConfig};
use crate::ik::{Chain, SolveResult};
use crate::math::Point;

/// One limb of a creature: its joint chain, its planted target and the foot
/// position the chain is currently reaching for.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    index: usize,
    chain: Chain,
    target: Point,
    foot: FootStep,
}

impl Leg {
    pub fn new(index: usize, chain: Chain, target: Point) -> Self {
        Self {
            index,
            chain,
            target,
            foot: FootStep::planted(target),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn joints(&self) -> &[Point] {
        self.chain.joints()
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn foot(&self) -> Point {
        self.foot.position()
    }

    pub fn is_stepping(&self) -> bool {
        self.foot.is_stepping()
    }

    pub(crate) fn move_root(&mut self, root: Point) {
        self.chain.set_root(root);
    }

    /// Plants a new target. Returns `false` if it is where it already was.
    pub(crate) fn set_target(&mut self, target: Point, step: &StepConfig) -> bool {
        if target == self.target {
            return false;
        }
        self.target = target;
        self.foot.retarget(target, step);
        true
    }

    pub(crate) fn solve(&mut self) -> SolveResult {
        let foot = self.foot.advance();
        self.chain.solve(foot)
    }
}
