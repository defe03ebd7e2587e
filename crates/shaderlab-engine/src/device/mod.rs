//! Graphics device seam.
//!
//! This module is responsible for:
//! - the `GraphicsApi` trait: the WebGL 1 subset the scene layer issues
//! - the `glow` implementation of that trait
//! - canvas traits for context acquisition and drawing-buffer sizing
//! - `SceneError`, the initialization failure taxonomy

mod api;
mod canvas;
mod error;
mod glow_backend;

pub use api::{BlendFactor, BufferTarget, Capability, DrawMode, GraphicsApi, ShaderStage};
pub use canvas::{DrawingBuffer, GraphicsCanvas};
pub use error::SceneError;
