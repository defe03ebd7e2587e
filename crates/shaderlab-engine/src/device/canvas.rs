use winit::dpi::PhysicalSize;

use super::GraphicsApi;

/// Backing store of a canvas: the pixel size the graphics context renders
/// into, independent of the element's CSS size.
pub trait DrawingBuffer {
    fn drawing_buffer_size(&self) -> PhysicalSize<u32>;
    fn set_drawing_buffer_size(&mut self, size: PhysicalSize<u32>);
}

/// A canvas that can hand out a graphics context.
pub trait GraphicsCanvas: DrawingBuffer {
    type Api: GraphicsApi;

    /// Returns `None` when the host cannot provide a context (no WebGL
    /// support, context lost, wrong context type already bound).
    fn acquire_context(&self) -> Option<Self::Api>;
}
