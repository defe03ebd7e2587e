//! Shaderlab catalog crate.
//!
//! The gallery's built-in examples and the metadata the host needs to present
//! them. Each example carries opaque GLSL sources and a `SceneSetup` telling
//! the engine whether to draw a flat quad or a spatial scene.

mod catalog;
mod entries;
mod example;
mod level;
mod preview;

pub use catalog::{Catalog, CatalogEntry, Collection};
pub use example::{SceneSetup, ShaderExample, format_shader_code};
pub use level::{ParseLevelError, ShaderLevel};
pub use preview::{PreviewPalette, hsv_to_rgb, preview_palette};
