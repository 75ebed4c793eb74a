//! The particle field: the flat collection of particles and the per-frame
//! physics step.
//!
//! `tick` is deliberately host-independent: it takes the pointer position as
//! an explicit input and touches nothing but particle state, so the physics
//! can be driven (and tested) without a window or a GPU.

use glam::Vec2;

use crate::collision::resolve_collision;
use crate::error::SpawnError;
use crate::math::gap;
use crate::particle::{FadeConfig, Particle, ParticleInstance};
use crate::spawn::{spawn_particles, SpawnConfig, SpawnContext};

/// An ordered collection of particles inside a rectangular viewport.
///
/// Order carries no meaning; it only fixes the pairwise iteration. The
/// particle set is fixed between spawns and replaced wholesale on resize.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Spawn a fresh field of `count` non-overlapping particles.
    pub fn spawn(
        count: usize,
        bounds: Vec2,
        config: &SpawnConfig,
        ctx: &mut SpawnContext,
    ) -> Result<Self, SpawnError> {
        let particles = spawn_particles(count, bounds, config, ctx)?;
        Ok(Self { particles, bounds })
    }

    /// Build a field from explicit particles. Mostly useful in tests and for
    /// callers that want full control over the initial state.
    pub fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self { particles, bounds }
    }

    /// Advance the whole field one frame.
    ///
    /// Collision detection scans every ordered pair, O(n²) per frame. That
    /// is intentional: the field is small and a spatial structure is out of
    /// scope. Each overlapping pair is visited from both sides; the
    /// resolver's separating-pair check makes the second visit a no-op, so
    /// a collision gets exactly one response per frame.
    pub fn tick(&mut self, pointer: Option<Vec2>, fade: &FadeConfig) {
        for i in 0..self.particles.len() {
            for j in 0..self.particles.len() {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.particles, i, j);
                if gap(a.position, a.radius, b.position, b.radius) < 0.0 {
                    resolve_collision(a, b);
                }
            }
        }

        for p in &mut self.particles {
            p.bounce(self.bounds);
            p.fade(pointer, fade);
            p.integrate();
        }
    }

    /// Render snapshot of the current frame.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles.iter().map(Particle::instance).collect()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Mutable references to two distinct elements of a slice.
fn pair_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = slice.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = slice.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn particle(pos: (f32, f32), vel: (f32, f32)) -> Particle {
        Particle {
            position: Vec2::new(pos.0, pos.1),
            velocity: Vec2::new(vel.0, vel.1),
            radius: 20.0,
            mass: 1.0,
            color: Vec3::ONE,
            opacity: 0.0,
        }
    }

    #[test]
    fn test_pair_mut_returns_distinct_elements() {
        let mut values = [1, 2, 3, 4];
        {
            let (a, b) = pair_mut(&mut values, 0, 3);
            assert_eq!((*a, *b), (1, 4));
            *a = 10;
            *b = 40;
        }
        let (a, b) = pair_mut(&mut values, 2, 1);
        assert_eq!((*a, *b), (3, 2));
    }

    #[test]
    fn test_overlapping_pair_resolved_once_per_tick() {
        // Head-on overlap; a double response would swap the velocities back.
        let a = particle((100.0, 100.0), (5.0, 0.0));
        let b = particle((130.0, 100.0), (-5.0, 0.0));
        let mut field = ParticleField::from_particles(vec![a, b], BOUNDS);

        field.tick(None, &FadeConfig::default());

        let p = field.particles();
        assert!((p[0].velocity.x - (-5.0)).abs() < 0.001);
        assert!((p[1].velocity.x - 5.0).abs() < 0.001);
        // Positions advanced by the post-collision velocities.
        assert!((p[0].position.x - 95.0).abs() < 0.001);
        assert!((p[1].position.x - 135.0).abs() < 0.001);
    }

    #[test]
    fn test_clear_pairs_are_untouched() {
        let a = particle((100.0, 100.0), (5.0, 0.0));
        let b = particle((300.0, 100.0), (-5.0, 0.0));
        let mut field = ParticleField::from_particles(vec![a, b], BOUNDS);

        field.tick(None, &FadeConfig::default());

        let p = field.particles();
        assert_eq!(p[0].velocity, Vec2::new(5.0, 0.0));
        assert_eq!(p[1].velocity, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_opacity_stays_bounded_over_many_ticks() {
        let fade = FadeConfig::default();
        let mut ctx = SpawnContext::seeded(11);
        let mut field =
            ParticleField::spawn(20, BOUNDS, &SpawnConfig::default(), &mut ctx).unwrap();

        // Pointer parked mid-viewport so some particles glow and others decay.
        let pointer = Some(Vec2::new(400.0, 300.0));
        for _ in 0..200 {
            field.tick(pointer, &fade);
            for p in field.particles() {
                assert!(p.opacity >= 0.0);
                assert!(p.opacity <= fade.max_opacity);
            }
        }
    }

    #[test]
    fn test_no_pointer_means_no_glow() {
        let mut ctx = SpawnContext::seeded(13);
        let mut field =
            ParticleField::spawn(15, BOUNDS, &SpawnConfig::default(), &mut ctx).unwrap();

        for _ in 0..100 {
            field.tick(None, &FadeConfig::default());
            for p in field.particles() {
                assert_eq!(p.opacity, 0.0);
            }
        }
    }

    #[test]
    fn test_field_stays_inside_viewport() {
        let mut ctx = SpawnContext::seeded(17);
        let mut field =
            ParticleField::spawn(10, BOUNDS, &SpawnConfig::default(), &mut ctx).unwrap();

        for _ in 0..2000 {
            field.tick(None, &FadeConfig::default());
        }
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= BOUNDS.x);
            assert!(p.position.y >= 0.0 && p.position.y <= BOUNDS.y);
        }
    }

    #[test]
    fn test_tick_conserves_momentum_with_unit_masses() {
        // No boundary contact for a single tick away from the walls, so the
        // only velocity changes come from collisions, which conserve the
        // total.
        let a = particle((200.0, 200.0), (4.0, 1.0));
        let b = particle((230.0, 200.0), (-3.0, 2.0));
        let c = particle((215.0, 230.0), (0.0, -4.0));
        let mut field = ParticleField::from_particles(vec![a, b, c], BOUNDS);

        let before: Vec2 = field.particles().iter().map(|p| p.velocity).sum();
        field.tick(None, &FadeConfig::default());
        let after: Vec2 = field.particles().iter().map(|p| p.velocity).sum();

        assert!((after - before).length() < 0.001);
    }

    #[test]
    fn test_instances_mirror_particles() {
        let mut ctx = SpawnContext::seeded(19);
        let field =
            ParticleField::spawn(5, BOUNDS, &SpawnConfig::default(), &mut ctx).unwrap();

        let instances = field.instances();
        assert_eq!(instances.len(), field.len());
        for (inst, p) in instances.iter().zip(field.particles()) {
            assert_eq!(inst.position, p.position.to_array());
            assert_eq!(inst.radius, p.radius);
            assert_eq!(inst.opacity, p.opacity);
            assert_eq!(inst.color, p.color.to_array());
        }
    }
}
