use crate::coords::{DisplayMetrics, Pointer};
use crate::device::{DrawMode, DrawingBuffer, GraphicsApi};
use crate::scene::{RenderContext, SceneBody};

use super::{FrameTransforms, aspect_ratio, sync_drawing_buffer};

impl<G: GraphicsApi> RenderContext<G> {
    /// Draws one frame at `time` seconds.
    ///
    /// Order is fixed: resize, clear, matrices, uniforms, draw. Particle
    /// bodies draw as points, meshes as indexed triangles.
    pub fn render<S>(&mut self, surface: &mut S, metrics: DisplayMetrics, time: f32, mouse: Pointer)
    where
        S: DrawingBuffer + ?Sized,
    {
        let size = sync_drawing_buffer(&self.gl, surface, &metrics);

        let [r, g, b, a] = self.config.clear_color;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(true);

        let transforms =
            FrameTransforms::at(time, aspect_ratio(size.width, size.height), &self.config);

        self.uniforms.upload(
            &self.gl,
            &transforms,
            time,
            (size.width as f32, size.height as f32),
            (mouse.x, mouse.y),
        );

        match &self.body {
            SceneBody::Particles(field) => {
                self.gl.draw_arrays(DrawMode::Points, 0, field.count as i32)
            }
            SceneBody::Mesh(geometry) => self.gl.draw_elements_u16(geometry.vertex_count as i32),
        }
    }
}
