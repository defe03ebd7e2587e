//! Per-frame rendering.
//!
//! This module is responsible for:
//! - keeping the drawing buffer at client size × device pixel ratio
//! - computing the model/view/projection matrices for a frame
//! - `RenderContext::render`, the single-draw frame driver

mod frame;
mod resize;
mod transforms;

pub use resize::sync_drawing_buffer;
pub use transforms::{FrameTransforms, aspect_ratio};
