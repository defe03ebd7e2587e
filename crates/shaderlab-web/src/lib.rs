//! Shaderlab web crate.
//!
//! Mounts catalog examples on page canvases. `host` is target-independent
//! and drives any `GraphicsCanvas`; the wasm32 build adds the `<canvas>`
//! binding and the `ShaderView` JS API on top.

pub mod host;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{ShaderView, WebCanvas};
