//! Particle spawning: randomization helpers and non-overlapping placement.
//!
//! Placement uses rejection sampling: candidates are generated uniformly
//! inside the viewport (inset by the particle radius) and discarded whenever
//! they overlap an already-accepted particle. Retries are bounded so a
//! viewport too dense for the requested count fails with an error instead of
//! looping forever.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SpawnError;
use crate::math::gap;
use crate::particle::Particle;

/// Candidate regenerations allowed per particle before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Static spawn parameters.
#[derive(Debug, Clone)]
pub struct SpawnConfig {
    /// Radius of every spawned particle, in pixels.
    pub radius: f32,
    /// Velocity components are uniform integers in `[-max_speed, max_speed]`.
    pub max_speed: i32,
    /// Colors are drawn from this palette when set, otherwise each RGB
    /// channel is independently uniform.
    pub palette: Option<Vec<Vec3>>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            max_speed: 5,
            palette: None,
        }
    }
}

/// RNG wrapper with helpers for the spawn patterns this crate uses.
///
/// Entropy-seeded by default; [`SpawnContext::seeded`] gives deterministic
/// sequences for tests.
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a context with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    #[inline]
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// Random RGB color, each channel an independent uniform byte.
    pub fn random_color(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(0..=255u8) as f32 / 255.0,
            self.rng.gen_range(0..=255u8) as f32 / 255.0,
            self.rng.gen_range(0..=255u8) as f32 / 255.0,
        )
    }

    /// Uniform pick from a palette. Falls back to [`Self::random_color`]
    /// when the palette is empty.
    pub fn palette_color(&mut self, palette: &[Vec3]) -> Vec3 {
        if palette.is_empty() {
            return self.random_color();
        }
        palette[self.rng.gen_range(0..palette.len())]
    }

    /// One random candidate: position inset by the radius from every edge,
    /// integer velocity components, mass 1, fully transparent fill.
    fn candidate(&mut self, bounds: Vec2, config: &SpawnConfig) -> Particle {
        let r = config.radius;
        let x = self.random_int(r as i32, (bounds.x - r) as i32) as f32;
        let y = self.random_int(r as i32, (bounds.y - r) as i32) as f32;
        let dx = self.random_int(-config.max_speed, config.max_speed) as f32;
        let dy = self.random_int(-config.max_speed, config.max_speed) as f32;
        let color = match &config.palette {
            Some(palette) => self.palette_color(palette),
            None => self.random_color(),
        };

        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(dx, dy),
            radius: r,
            mass: 1.0,
            color,
            opacity: 0.0,
        }
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate `count` non-overlapping particles inside `bounds`.
///
/// Every accepted particle clears all previously accepted ones by at least
/// touching distance. Candidates that overlap are regenerated, up to
/// [`MAX_PLACEMENT_ATTEMPTS`] times per particle.
pub fn spawn_particles(
    count: usize,
    bounds: Vec2,
    config: &SpawnConfig,
    ctx: &mut SpawnContext,
) -> Result<Vec<Particle>, SpawnError> {
    if bounds.x < config.radius * 2.0 || bounds.y < config.radius * 2.0 {
        return Err(SpawnError::ViewportTooSmall {
            width: bounds.x,
            height: bounds.y,
            radius: config.radius,
        });
    }

    let mut particles: Vec<Particle> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = ctx.candidate(bounds, config);
            let clear = particles
                .iter()
                .all(|p| gap(candidate.position, candidate.radius, p.position, p.radius) >= 0.0);
            if clear {
                particles.push(candidate);
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(SpawnError::PlacementExhausted {
                placed: particles.len(),
                requested: count,
                attempts: MAX_PLACEMENT_ATTEMPTS,
            });
        }
    }

    Ok(particles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_single_particle_in_bounds() {
        let config = SpawnConfig::default();
        let bounds = Vec2::new(800.0, 600.0);

        for seed in 0..20 {
            let mut ctx = SpawnContext::seeded(seed);
            let particles = spawn_particles(1, bounds, &config, &mut ctx).unwrap();
            assert_eq!(particles.len(), 1);
            let p = &particles[0];
            assert_eq!(p.radius, 20.0);
            assert_eq!(p.mass, 1.0);
            assert_eq!(p.opacity, 0.0);
            assert!(p.position.x >= 20.0 && p.position.x <= 780.0);
            assert!(p.position.y >= 20.0 && p.position.y <= 580.0);
        }
    }

    #[test]
    fn test_spawned_particles_never_overlap() {
        let mut ctx = SpawnContext::seeded(42);
        let config = SpawnConfig::default();
        let particles =
            spawn_particles(30, Vec2::new(800.0, 600.0), &config, &mut ctx).unwrap();

        assert_eq!(particles.len(), 30);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let a = &particles[i];
                let b = &particles[j];
                assert!(gap(a.position, a.radius, b.position, b.radius) >= 0.0);
            }
        }
    }

    #[test]
    fn test_velocity_components_within_speed_range() {
        let mut ctx = SpawnContext::seeded(3);
        let config = SpawnConfig::default();
        let particles =
            spawn_particles(50, Vec2::new(2000.0, 2000.0), &config, &mut ctx).unwrap();

        for p in &particles {
            assert!(p.velocity.x >= -5.0 && p.velocity.x <= 5.0);
            assert!(p.velocity.y >= -5.0 && p.velocity.y <= 5.0);
            assert_eq!(p.velocity.x, p.velocity.x.trunc());
            assert_eq!(p.velocity.y, p.velocity.y.trunc());
        }
    }

    #[test]
    fn test_palette_colors_are_used() {
        let palette = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)];
        let config = SpawnConfig {
            palette: Some(palette.clone()),
            ..SpawnConfig::default()
        };
        let mut ctx = SpawnContext::seeded(5);
        let particles =
            spawn_particles(20, Vec2::new(2000.0, 2000.0), &config, &mut ctx).unwrap();

        for p in &particles {
            assert!(palette.contains(&p.color));
        }
    }

    #[test]
    fn test_dense_viewport_errors_instead_of_hanging() {
        // At most one radius-20 circle fits in 50x50; asking for five must
        // exhaust the retry budget.
        let mut ctx = SpawnContext::seeded(1);
        let config = SpawnConfig::default();
        let result = spawn_particles(5, Vec2::new(50.0, 50.0), &config, &mut ctx);

        match result {
            Err(SpawnError::PlacementExhausted { placed, requested, .. }) => {
                assert!(placed < requested);
            }
            Err(other) => panic!("expected PlacementExhausted, got {other}"),
            Ok(_) => panic!("expected PlacementExhausted, got Ok"),
        }
    }

    #[test]
    fn test_undersized_viewport_is_rejected() {
        let mut ctx = SpawnContext::seeded(1);
        let config = SpawnConfig::default();
        let result = spawn_particles(1, Vec2::new(30.0, 600.0), &config, &mut ctx);
        assert!(matches!(result, Err(SpawnError::ViewportTooSmall { .. })));
    }

    #[test]
    fn test_random_int_is_inclusive() {
        let mut ctx = SpawnContext::seeded(9);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..1000 {
            let v = ctx.random_int(-2, 2);
            assert!((-2..=2).contains(&v));
            saw_min |= v == -2;
            saw_max |= v == 2;
        }
        assert!(saw_min && saw_max);
    }
}
