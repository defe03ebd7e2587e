//! CPU-side geometry generation.
//!
//! Every generator is a pure function returning owned, immutable arrays that
//! are uploaded once at scene initialization:
//! - `create_cube`: flat-shaded box, 24 vertices / 36 indices
//! - `create_sphere`: latitude/longitude sphere with radial normals
//! - `create_particles`: volumetrically uniform particle start state
//! - `FULLSCREEN_QUAD`: clip-space quad for flat (2D) programs

mod cube;
mod mesh;
mod particles;
mod quad;
mod random;
mod sphere;

pub use cube::create_cube;
pub use mesh::Geometry;
pub use particles::{
    DEFAULT_PARTICLE_SEED, PARTICLE_FIELD_RADIUS, ParticleField, create_particles,
    create_particles_seeded,
};
pub use quad::{FULLSCREEN_QUAD, FULLSCREEN_QUAD_VERTICES};
pub use random::HashRng;
pub use sphere::create_sphere;
