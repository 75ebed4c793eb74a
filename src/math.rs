//! Geometry helpers shared by spawning and collision detection.

use glam::Vec2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Signed gap between two circles: center distance minus the radius sum.
///
/// Negative means the circles overlap (or touch, at exactly zero). Both the
/// spawner's placement check and the per-frame collision scan key off this.
#[inline]
pub fn gap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> f32 {
    distance(a, b) - (a_radius + b_radius)
}

/// Rotate a vector by `angle` radians (counter-clockwise, standard 2D
/// rotation matrix). Pure function.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
