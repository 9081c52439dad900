//! Math utilities module
//!
//! Planar geometry helpers and easing curves. Points are `glam::Vec2`.

mod easing;
mod geometry;

pub use easing::{ease_out_quad, lerp, quadratic_bezier, quadratic_bezier_point};
pub use geometry::{distance, segment_lengths, Point};

// Re-export commonly used glam types
pub use glam::Vec2;
