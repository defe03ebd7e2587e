//! Host-facing coordinate types.
//!
//! - `DisplayMetrics`: canvas client size + device pixel ratio
//! - `Pointer`: mouse position forwarded to `u_mouse`

mod display;
mod pointer;

pub use display::DisplayMetrics;
pub use pointer::Pointer;
pub use winit::dpi::{LogicalSize, PhysicalSize};
