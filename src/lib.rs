//! # Orbfield
//!
//! An interactive 2D particle field: circular particles drift at constant
//! velocity, bounce off the window edges, collide elastically with each
//! other, and glow while the pointer is nearby.
//!
//! ## Quick Start
//!
//! ```ignore
//! use orbfield::Simulation;
//!
//! fn main() -> Result<(), orbfield::SimulationError> {
//!     Simulation::new()
//!         .with_particle_count(150)
//!         .with_resize_count(10)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the flat list of [`Particle`]s and advances them
//! one frame at a time via `tick`. Collision detection is a brute-force
//! pairwise scan; each overlapping pair gets an elastic collision response
//! ([`resolve_collision`]) along the line of centers.
//!
//! `tick` takes the pointer position as an explicit argument and knows
//! nothing about windows or GPUs, so the whole physics model runs headless
//! in tests.
//!
//! ### Spawning
//!
//! Fields are populated by rejection sampling ([`spawn::spawn_particles`]):
//! random candidates are discarded until they overlap nothing already
//! placed. Retries are bounded; an impossibly dense request fails with
//! [`SpawnError`] instead of hanging.
//!
//! ### The loop
//!
//! [`Simulation`] owns the winit event loop: it spawns the initial field,
//! re-requests a redraw every frame, respawns a small field when the window
//! is resized, and feeds pointer movement into the proximity glow.

pub mod collision;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod math;
pub mod particle;
mod shader;
mod simulation;
pub mod spawn;
pub mod time;

pub use collision::resolve_collision;
pub use error::{GpuError, SimulationError, SpawnError};
pub use field::ParticleField;
pub use glam::{Vec2, Vec3};
pub use particle::{FadeConfig, Particle, ParticleInstance};
pub use simulation::Simulation;
pub use spawn::{SpawnConfig, SpawnContext};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use orbfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collision::resolve_collision;
    pub use crate::error::{GpuError, SimulationError, SpawnError};
    pub use crate::field::ParticleField;
    pub use crate::input::Input;
    pub use crate::particle::{FadeConfig, Particle};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::{SpawnConfig, SpawnContext};
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3};
}
