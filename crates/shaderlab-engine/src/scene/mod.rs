//! Spatial scenes.
//!
//! A scene is one linked program plus exactly one body (cube, sphere or
//! particle field) uploaded to the GPU, together with the uniform table the
//! frame renderer writes each tick.

mod config;
mod context;
mod kind;
mod lifecycle;

pub(crate) use context::{acquire, create_buffer};

pub use config::{CameraConfig, SceneConfig, SphereDetail, SpinRates};
pub use context::{RenderContext, SceneBody, SceneBuffers};
pub use kind::{GeometryKind, ParseGeometryKindError};
pub use lifecycle::{Renderable, SceneLifecycle};
