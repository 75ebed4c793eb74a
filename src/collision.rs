//! Elastic collision resolution between two circular particles.
//!
//! The 2D problem is reduced to 1D by rotating both velocities into a frame
//! whose x axis lies along the line connecting the two centers (the collision
//! normal). The 1D elastic collision equations are applied on that axis, the
//! tangential component passes through untouched, and the results are rotated
//! back.

use glam::Vec2;

use crate::math::rotate;
use crate::particle::Particle;

/// Resolve an elastic collision between two overlapping particles, mutating
/// both velocities in place.
///
/// Pairs that are already separating are left alone. Without that check an
/// overlap persisting across frames would get a fresh collision response
/// every frame, re-reversing the velocities and trapping the pair inside
/// each other.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) {
    let velocity_diff = a.velocity - b.velocity;
    let position_diff = b.position - a.position;

    // Negative: relative motion points away from the other center.
    if velocity_diff.dot(position_diff) < 0.0 {
        return;
    }

    // Angle that maps the line of centers onto the x axis.
    let angle = -position_diff.y.atan2(position_diff.x);

    let m1 = a.mass;
    let m2 = b.mass;

    // Velocities in the rotated frame, before the collision.
    let u1 = rotate(a.velocity, angle);
    let u2 = rotate(b.velocity, angle);

    // 1D elastic collision along the normal axis. Conserves momentum and
    // kinetic energy for arbitrary masses; for equal masses it reduces to an
    // exact swap of the normal components.
    let v1 = Vec2::new(
        u1.x * (m1 - m2) / (m1 + m2) + u2.x * 2.0 * m2 / (m1 + m2),
        u1.y,
    );
    let v2 = Vec2::new(
        u2.x * (m2 - m1) / (m1 + m2) + u1.x * 2.0 * m1 / (m1 + m2),
        u2.y,
    );

    a.velocity = rotate(v1, -angle);
    b.velocity = rotate(v2, -angle);
}
