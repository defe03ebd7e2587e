//! Shaderlab engine crate.
//!
//! WebGL bootstrap and 3D scene utilities for the shader gallery: program
//! building, canvas resolution sync, CPU-side geometry and a small matrix
//! kernel. All GPU access goes through the `device::GraphicsApi` seam, so
//! the same code drives `glow` in the browser and `mock::MockGl` in tests.

pub mod coords;
pub mod device;
pub mod flat;
pub mod geometry;
pub mod logging;
pub mod math;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod program;
pub mod render;
pub mod scene;
pub mod time;

#[cfg(test)]
mod fixtures;
