use glam::Vec2;

/// A joint or target position in the creature's plane.
pub type Point = Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

/// Distances between consecutive points, `n - 1` values for `n` points.
pub fn segment_lengths(points: &[Point]) -> Vec<f32> {
    points.windows(2).map(|w| distance(w[0], w[1])).collect()
}
