//! The particle entity and its per-frame update steps.
//!
//! A particle is a filled circle with a solid outline. It moves at constant
//! velocity, reflects off the viewport edges, and glows (its fill opacity
//! rises) while the pointer is nearby. Physics is split into small steps so
//! [`crate::field::ParticleField::tick`] can sequence them without any
//! knowledge of the rendering backend.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::math::distance;

/// Proximity-glow tuning.
///
/// `rise` and `fall` are deliberately asymmetric: the glow builds over ten
/// frames but snaps off in one. Both are exposed rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    /// Pointer distance under which the glow builds, in pixels.
    pub radius: f32,
    /// Opacity gained per frame near the pointer.
    pub rise: f32,
    /// Opacity lost per frame away from the pointer.
    pub fall: f32,
    /// Upper opacity bound for the circle fill.
    pub max_opacity: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            radius: 120.0,
            rise: 0.02,
            fall: 0.2,
            max_opacity: 0.2,
        }
    }
}

/// A single circular particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Center position in pixels, origin at the top-left of the viewport.
    pub position: Vec2,
    /// Displacement applied per frame.
    pub velocity: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    /// Collision mass. Spawned at 1, carried through the resolver so heavier
    /// particles behave correctly if a caller ever sets one.
    pub mass: f32,
    /// Fill and outline color, RGB in 0..1.
    pub color: Vec3,
    /// Current fill opacity, 0 (invisible fill) to `FadeConfig::max_opacity`.
    pub opacity: f32,
}

impl Particle {
    /// Reflect velocity components whose circle edge has crossed a viewport
    /// boundary. Each axis is checked independently.
    pub fn bounce(&mut self, bounds: Vec2) {
        if self.position.x + self.radius > bounds.x || self.position.x - self.radius < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y + self.radius > bounds.y || self.position.y - self.radius < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Advance the proximity glow one frame.
    ///
    /// `pointer` is `None` until the pointer has moved at least once; that
    /// counts as infinitely far away and the glow only decays.
    pub fn fade(&mut self, pointer: Option<Vec2>, fade: &FadeConfig) {
        let near = pointer
            .map(|p| distance(p, self.position) < fade.radius)
            .unwrap_or(false);

        if near && self.opacity < fade.max_opacity {
            self.opacity = (self.opacity + fade.rise).min(fade.max_opacity);
        } else if self.opacity > 0.0 {
            self.opacity = (self.opacity - fade.fall).max(0.0);
        }
    }

    /// Advance position by one velocity step (explicit Euler, the frame is
    /// the time unit).
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Snapshot this particle for the instanced render pipeline.
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            radius: self.radius,
            opacity: self.opacity,
            color: self.color.to_array(),
            _padding: 0.0,
        }
    }
}

/// Per-instance vertex data, one per particle per frame.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub radius: f32,
    pub opacity: f32,
    pub color: [f32; 3],
    pub _padding: f32,
}
