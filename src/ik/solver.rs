use super::chain::Chain;
use crate::math::{distance, Point};

/// Relaxation passes per anchored solve unless a chain asks for more.
pub const DEFAULT_ITERATIONS: u32 = 3;

/// Interpolation divisors below this leave the joint where it is.
pub const EPSILON: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMode {
    /// Root pinned in place, forward and backward passes.
    Anchored,
    /// Single forward pass; the root goes wherever the chain pulls it.
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// Whether the target was within the chain's reach of the root.
    pub reachable: bool,
    pub iterations: u32,
    /// Tip-to-target distance after the solve.
    pub final_distance: f32,
}

pub struct FabrikSolver;

impl FabrikSolver {
    pub fn solve(chain: &mut Chain, target: Point) -> SolveResult {
        let iterations = chain.iterations;
        Self::solve_joints(
            &mut chain.joints,
            &chain.segment_lengths,
            target,
            SolveMode::Anchored,
            iterations,
        )
    }

    pub fn drag(chain: &mut Chain, target: Point) -> SolveResult {
        Self::solve_joints(
            &mut chain.joints,
            &chain.segment_lengths,
            target,
            SolveMode::Drag,
            1,
        )
    }

    /// Moves `joints` in place so the last one heads for `target` while each
    /// `joints[i]..joints[i + 1]` keeps length `lengths[i]`.
    ///
    /// Anchored mode always runs exactly `iterations` passes when the target
    /// is reachable; there is no convergence check. If `lengths` does not
    /// have exactly one entry per segment the joints are left untouched.
    pub fn solve_joints(
        joints: &mut [Point],
        lengths: &[f32],
        target: Point,
        mode: SolveMode,
        iterations: u32,
    ) -> SolveResult {
        if lengths.len() + 1 != joints.len() {
            log::warn!(
                "fabrik: {} segment lengths for {} joints, skipping solve",
                lengths.len(),
                joints.len()
            );
            return SolveResult {
                reachable: false,
                iterations: 0,
                final_distance: joints.last().map_or(0.0, |&tip| distance(tip, target)),
            };
        }

        if joints.len() < 2 {
            return SolveResult {
                reachable: true,
                iterations: 0,
                final_distance: 0.0,
            };
        }

        let reach: f32 = lengths.iter().sum();
        let reachable = distance(joints[0], target) <= reach;

        let iterations = match mode {
            SolveMode::Drag => {
                Self::forward_pass(joints, lengths, target);
                1
            }
            SolveMode::Anchored if !reachable => {
                Self::stretch_towards_target(joints, lengths, target);
                1
            }
            SolveMode::Anchored => {
                let base = joints[0];
                for iteration in 0..iterations {
                    Self::forward_pass(joints, lengths, target);
                    Self::backward_pass(joints, lengths, base);

                    log::trace!(
                        "fabrik pass {}: residual {:.4}",
                        iteration,
                        distance(joints[joints.len() - 1], target)
                    );
                }
                iterations
            }
        };

        SolveResult {
            reachable,
            iterations,
            final_distance: distance(joints[joints.len() - 1], target),
        }
    }

    /// Pins the tip to the target and walks toward the root, placing each
    /// joint on the line to its already-placed forward neighbour.
    fn forward_pass(joints: &mut [Point], lengths: &[f32], target: Point) {
        let n = joints.len();

        joints[n - 1] = target;

        for i in (0..n - 1).rev() {
            let next = joints[i + 1];
            let r = distance(next, joints[i]);
            if r < EPSILON {
                log::debug!("forward pass: joint {} coincides with joint {}", i, i + 1);
                continue;
            }
            joints[i] = next.lerp(joints[i], lengths[i] / r);
        }
    }

    /// Pins the root back to `base` and walks toward the tip.
    fn backward_pass(joints: &mut [Point], lengths: &[f32], base: Point) {
        let n = joints.len();

        joints[0] = base;

        for i in 0..n - 1 {
            let prev = joints[i];
            let r = distance(joints[i + 1], prev);
            if r < EPSILON {
                log::debug!("backward pass: joint {} coincides with joint {}", i + 1, i);
                continue;
            }
            joints[i + 1] = prev.lerp(joints[i + 1], lengths[i] / r);
        }
    }

    /// Out of reach: lay every segment along the line toward the target,
    /// re-aiming at the target from each newly placed joint.
    fn stretch_towards_target(joints: &mut [Point], lengths: &[f32], target: Point) {
        for i in 0..joints.len() - 1 {
            let r = distance(target, joints[i]);
            if r < EPSILON {
                log::debug!("stretch: joint {} sits on the target", i);
                continue;
            }
            joints[i + 1] = joints[i].lerp(target, lengths[i] / r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn chain(points: &[(f32, f32)]) -> Chain {
        Chain::from_joints(points.iter().map(|&(x, y)| Point::new(x, y))).unwrap()
    }

    fn leg() -> Chain {
        chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)])
    }

    fn assert_lengths_hold(chain: &Chain) {
        for (i, w) in chain.joints().windows(2).enumerate() {
            let len = distance(w[0], w[1]);
            assert!(
                (len - chain.segment_lengths()[i]).abs() < TOLERANCE,
                "segment {} is {} long, expected {}",
                i,
                len,
                chain.segment_lengths()[i]
            );
        }
    }

    fn assert_finite(chain: &Chain) {
        for (i, p) in chain.joints().iter().enumerate() {
            assert!(p.is_finite(), "joint {} is {:?}", i, p);
        }
    }

    #[test]
    fn reachable_solve_preserves_lengths() {
        let mut chain = leg();
        let result = chain.solve(Point::new(12.0, 15.0));

        assert!(result.reachable);
        assert_eq!(result.iterations, DEFAULT_ITERATIONS);
        assert_lengths_hold(&chain);
    }

    #[test]
    fn reachable_solve_keeps_root_exactly() {
        let mut chain = chain(&[(3.5, -2.25), (13.5, -2.25), (13.5, 7.75)]);
        let root = chain.root();

        chain.solve(Point::new(-5.0, 8.0));

        assert_eq!(chain.root(), root);
    }

    #[test]
    fn tip_converges_over_ticks() {
        let mut chain = leg();
        let target = Point::new(-10.0, 18.0);

        let before = distance(chain.tip(), target);
        let first = chain.solve(target).final_distance;
        assert!(
            first < before * 0.25,
            "one solve left {} of {} residual",
            first,
            before
        );

        let mut last = first;
        for _ in 0..20 {
            last = chain.solve(target).final_distance;
        }

        assert!(last <= first);
        assert!(last < 0.01, "residual {} after 21 solves", last);
        assert_lengths_hold(&chain);
    }

    #[test]
    fn runs_configured_iterations_without_early_exit() {
        let mut chain = Chain::builder()
            .joints([Point::ZERO, Point::new(10.0, 0.0), Point::new(20.0, 0.0)])
            .iterations(7)
            .build()
            .unwrap();

        // Already at the target: still runs every pass.
        let result = chain.solve(Point::new(20.0, 0.0));
        assert_eq!(result.iterations, 7);
        assert!(result.final_distance < TOLERANCE);
    }

    #[test]
    fn unreachable_collinear_chain_is_unchanged() {
        let mut chain = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let result = chain.solve(Point::new(100.0, 0.0));

        assert!(!result.reachable);
        let expected = [Point::ZERO, Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
        for (joint, want) in chain.joints().iter().zip(expected) {
            assert!(joint.distance(want) < TOLERANCE, "{:?} != {:?}", joint, want);
        }
        assert!((result.final_distance - 80.0).abs() < TOLERANCE);
    }

    #[test]
    fn unreachable_chain_points_at_target() {
        let mut chain = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let target = Point::new(100.0, 100.0);
        chain.solve(target);

        let dir = target.normalize();
        for (i, joint) in chain.joints().iter().enumerate().skip(1) {
            // On the ray from the root toward the target.
            assert!(dir.perp_dot(*joint).abs() < TOLERANCE, "joint {} off the ray", i);
            assert!(dir.dot(*joint) > 0.0);
        }
        assert!((distance(chain.joints()[0], chain.joints()[1]) - 10.0).abs() < TOLERANCE);
        assert_lengths_hold(&chain);
        assert_eq!(chain.root(), Point::ZERO);
    }

    #[test]
    fn converged_chain_is_stable() {
        let mut chain = leg();
        let target = Point::new(15.0, 20.0);
        for _ in 0..30 {
            chain.solve(target);
        }
        let settled = chain.joints().to_vec();

        chain.solve(target);

        for (a, b) in settled.iter().zip(chain.joints()) {
            assert!(a.distance(*b) < TOLERANCE, "{:?} moved to {:?}", a, b);
        }
    }

    #[test]
    fn target_on_root_does_not_produce_nan() {
        let mut chain = leg();
        chain.solve(Point::ZERO);
        assert_finite(&chain);
        assert_eq!(chain.root(), Point::ZERO);

        chain.solve(Point::new(10.0, 0.0));
        assert_finite(&chain);
    }

    #[test]
    fn coincident_joints_during_solve_do_not_produce_nan() {
        let mut chain = leg();
        // Fold the chain so that joint 2 lands on joint 1.
        chain.joints[2] = chain.joints[1];
        chain.solve(chain.joints[1]);
        assert_finite(&chain);

        chain.joints[3] = Point::new(200.0, 0.0);
        chain.drag(Point::new(200.0, 0.0));
        assert_finite(&chain);
    }

    #[test]
    fn slice_solve_matches_chain_solve() {
        let mut chain = leg();
        let mut joints = chain.joints().to_vec();
        let lengths = chain.segment_lengths().to_vec();
        let target = Point::new(4.0, -21.0);

        let from_chain = chain.solve(target);
        let from_slice = FabrikSolver::solve_joints(
            &mut joints,
            &lengths,
            target,
            SolveMode::Anchored,
            DEFAULT_ITERATIONS,
        );

        assert_eq!(from_chain, from_slice);
        assert_eq!(chain.joints(), joints.as_slice());
    }

    #[test]
    fn mismatched_lengths_leave_joints_alone() {
        let original = [Point::ZERO, Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
        let mut joints = original;

        let result = FabrikSolver::solve_joints(
            &mut joints,
            &[10.0],
            Point::new(5.0, 5.0),
            SolveMode::Anchored,
            3,
        );

        assert_eq!(joints, original);
        assert_eq!(result.iterations, 0);
        assert!((result.final_distance - distance(original[2], Point::new(5.0, 5.0))).abs() < TOLERANCE);

        let mut empty: [Point; 0] = [];
        let result = FabrikSolver::solve_joints(&mut empty, &[], Point::ZERO, SolveMode::Drag, 1);
        assert_eq!(result.final_distance, 0.0);
    }

    #[test]
    fn drag_moves_root_and_keeps_lengths() {
        let mut chain = leg();
        let result = chain.drag(Point::new(100.0, 40.0));

        assert_eq!(result.iterations, 1);
        assert_eq!(chain.tip(), Point::new(100.0, 40.0));
        assert_ne!(chain.root(), Point::ZERO);
        assert_lengths_hold(&chain);
    }

    #[test]
    fn drag_ignores_reach() {
        let mut chain = leg();
        let result = chain.drag(Point::new(500.0, 0.0));

        assert!(!result.reachable);
        assert_eq!(result.final_distance, 0.0);
        assert!(chain.joints()[2].distance(Point::new(490.0, 0.0)) < TOLERANCE);
    }
}
