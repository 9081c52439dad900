use glam::Vec2;

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Decelerating curve on `[0, 1]`: fast start, soft landing.
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic Bézier through control values `p0`, `p1`, `p2` at `t` in `[0, 1]`.
pub fn quadratic_bezier(t: f32, p0: f32, p1: f32, p2: f32) -> f32 {
    (1.0 - t) * ((1.0 - t) * p0 + t * p1) + t * ((1.0 - t) * p1 + t * p2)
}

pub fn quadratic_bezier_point(t: f32, p0: Vec2, p1: Vec2, p2: Vec2) -> Vec2 {
    Vec2::new(
        quadratic_bezier(t, p0.x, p1.x, p2.x),
        quadratic_bezier(t, p0.y, p1.y, p2.y),
    )
}
