//! WGSL source for the particle render pipeline.
//!
//! Each particle is drawn as an instanced screen-space quad. The vertex
//! stage places the quad around the particle center in pixel coordinates and
//! maps to clip space using the surface resolution; the fragment stage cuts
//! the circle out of the quad and composites a translucent fill under a
//! solid one-pixel outline in the particle's color.

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");
