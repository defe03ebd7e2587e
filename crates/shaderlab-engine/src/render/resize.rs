use winit::dpi::PhysicalSize;

use crate::coords::DisplayMetrics;
use crate::device::{DrawingBuffer, GraphicsApi};

/// Matches the drawing buffer to `metrics` and returns its size.
///
/// When the target differs from the current backing size the buffer is
/// reallocated and the viewport reset; otherwise nothing is issued.
pub fn sync_drawing_buffer<G, S>(
    gl: &G,
    surface: &mut S,
    metrics: &DisplayMetrics,
) -> PhysicalSize<u32>
where
    G: GraphicsApi,
    S: DrawingBuffer + ?Sized,
{
    let target = metrics.physical_size();

    if surface.drawing_buffer_size() != target {
        log::debug!("drawing buffer resized to {}x{}", target.width, target.height);
        surface.set_drawing_buffer_size(target);
        gl.viewport(0, 0, target.width as i32, target.height as i32);
    }

    target
}
