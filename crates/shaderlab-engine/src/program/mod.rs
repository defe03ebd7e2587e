//! Shader program construction and uniform binding.

mod builder;
mod uniforms;

pub use builder::{LinkedProgram, build_program, compile_shader, link_program};
pub use uniforms::{SCENE_UNIFORM_NAMES, SceneUniforms};
