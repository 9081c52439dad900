use super::error::ChainError;
use super::solver::{FabrikSolver, SolveResult, DEFAULT_ITERATIONS};
use crate::math::{segment_lengths, Point};

/// A flat joint chain, root first, tip last.
///
/// Segment lengths are measured once from the joint layout handed to the
/// builder and never change afterwards; the solver only ever moves joints.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub(crate) joints: Vec<Point>,
    pub(crate) segment_lengths: Vec<f32>,
    pub(crate) iterations: u32,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Builds a chain from its rest pose with default settings.
    pub fn from_joints(joints: impl IntoIterator<Item = Point>) -> Result<Self, ChainError> {
        ChainBuilder::new().joints(joints).build()
    }

    pub fn joints(&self) -> &[Point] {
        &self.joints
    }

    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    /// Sum of all segment lengths: how far the tip can get from the root.
    pub fn reach(&self) -> f32 {
        self.segment_lengths.iter().sum()
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn root(&self) -> Point {
        self.joints[0]
    }

    pub fn tip(&self) -> Point {
        self.joints[self.joints.len() - 1]
    }

    /// Relocates the root joint only. The rest of the chain catches up on
    /// the next solve.
    pub fn move_root(&mut self, x: f32, y: f32) {
        self.set_root(Point::new(x, y));
    }

    pub fn set_root(&mut self, root: Point) {
        self.joints[0] = root;
    }

    /// Anchored FABRIK toward `target`; the root stays where it is.
    pub fn solve(&mut self, target: Point) -> SolveResult {
        FabrikSolver::solve(self, target)
    }

    /// Drags the tip onto `target`, letting the root follow.
    pub fn drag(&mut self, target: Point) -> SolveResult {
        FabrikSolver::drag(self, target)
    }
}

pub struct ChainBuilder {
    joints: Vec<Point>,
    iterations: u32,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            joints: Vec::new(),
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn add_joint(mut self, position: Point) -> Self {
        self.joints.push(position);
        self
    }

    pub fn joints(mut self, positions: impl IntoIterator<Item = Point>) -> Self {
        self.joints.extend(positions);
        self
    }

    /// Relaxation passes per anchored solve.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn build(self) -> Result<Chain, ChainError> {
        if self.joints.len() < 2 {
            return Err(ChainError::TooFewJoints(self.joints.len()));
        }
        if self.iterations == 0 {
            return Err(ChainError::ZeroIterations);
        }
        if let Some(index) = self.joints.iter().position(|p| !p.is_finite()) {
            return Err(ChainError::NonFinite { index });
        }

        let segment_lengths = segment_lengths(&self.joints);
        if let Some(index) = segment_lengths.iter().position(|&len| len <= 0.0) {
            return Err(ChainError::ZeroLengthSegment { index });
        }

        Ok(Chain {
            joints: self.joints,
            segment_lengths,
            iterations: self.iterations,
        })
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
