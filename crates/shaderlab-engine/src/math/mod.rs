//! Matrix/vector kernel.
//!
//! Pure value types: nothing here holds state or reports errors. Matrices are
//! column-major to match GLSL `mat4` uploads without transposition.

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
