use std::collections::HashMap;

use crate::coords::{DisplayMetrics, Pointer};
use crate::device::{
    BufferTarget, DrawMode, DrawingBuffer, GraphicsApi, GraphicsCanvas, SceneError,
};
use crate::geometry::{FULLSCREEN_QUAD, FULLSCREEN_QUAD_VERTICES};
use crate::program::{LinkedProgram, build_program};
use crate::render::sync_drawing_buffer;
use crate::scene::{Renderable, acquire, create_buffer};

/// A 2D program drawn over a full-screen quad.
///
/// Uniform locations are looked up by the names the caller declares; only
/// `u_time`, `u_resolution` and `u_mouse` are written per frame.
pub struct FlatContext<G: GraphicsApi> {
    gl: G,
    program: LinkedProgram<G>,
    quad: Option<G::Buffer>,
    uniforms: HashMap<String, Option<G::UniformLocation>>,
}

impl<G: GraphicsApi> FlatContext<G> {
    /// Builds the program, uploads the quad to `a_position` and activates
    /// the program.
    pub fn init<C, S>(
        canvas: &C,
        vertex_source: &str,
        fragment_source: &str,
        uniform_names: &[S],
    ) -> Result<Self, SceneError>
    where
        C: GraphicsCanvas<Api = G>,
        S: AsRef<str>,
    {
        let gl = acquire(canvas)?;
        let program = build_program(&gl, vertex_source, fragment_source)?;

        let uniforms = uniform_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), gl.uniform_location(program.program, name))
            })
            .collect();

        let mut ctx = Self {
            gl,
            program,
            quad: None,
            uniforms,
        };

        let quad = create_buffer(&ctx.gl)?;
        ctx.quad = Some(quad);
        ctx.gl.bind_buffer(BufferTarget::Array, Some(quad));
        ctx.gl
            .buffer_data(BufferTarget::Array, bytemuck::cast_slice(&FULLSCREEN_QUAD));

        if let Some(index) = ctx.gl.attrib_location(ctx.program.program, "a_position") {
            ctx.gl.enable_vertex_attrib_array(index);
            ctx.gl.vertex_attrib_pointer_f32(index, 2);
        }

        ctx.gl.use_program(Some(ctx.program.program));

        log::info!(
            "flat program ready: {} of {} uniforms resolved",
            ctx.uniforms.values().filter(|l| l.is_some()).count(),
            ctx.uniforms.len()
        );

        Ok(ctx)
    }

    /// Location of a declared uniform; `None` when undeclared or unresolved.
    pub fn uniform(&self, name: &str) -> Option<&G::UniformLocation> {
        self.uniforms.get(name).and_then(Option::as_ref)
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Draws one frame: resize check, standard uniforms, one 4-vertex strip.
    pub fn render<S>(&mut self, surface: &mut S, metrics: DisplayMetrics, time: f32, mouse: Pointer)
    where
        S: DrawingBuffer + ?Sized,
    {
        let size = sync_drawing_buffer(&self.gl, surface, &metrics);

        if let Some(location) = self.uniform("u_time") {
            self.gl.uniform_1f(location, time);
        }
        if let Some(location) = self.uniform("u_resolution") {
            self.gl.uniform_2f(location, size.width as f32, size.height as f32);
        }
        if let Some(location) = self.uniform("u_mouse") {
            self.gl.uniform_2f(location, mouse.x, mouse.y);
        }

        self.gl
            .draw_arrays(DrawMode::TriangleStrip, 0, FULLSCREEN_QUAD_VERTICES as i32);
    }
}

impl<G: GraphicsApi> Renderable for FlatContext<G> {
    fn render_frame<S>(
        &mut self,
        surface: &mut S,
        metrics: DisplayMetrics,
        time: f32,
        mouse: Pointer,
    ) where
        S: DrawingBuffer + ?Sized,
    {
        self.render(surface, metrics, time, mouse);
    }
}

impl<G: GraphicsApi> Drop for FlatContext<G> {
    fn drop(&mut self) {
        self.gl.use_program(None);
        if let Some(quad) = self.quad.take() {
            self.gl.delete_buffer(quad);
        }
        self.program.delete(&self.gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FLAT_FS, FLAT_VS};
    use crate::mock::{GlCall, MockCanvas};

    const NAMES: [&str; 3] = ["u_time", "u_resolution", "u_mouse"];

    #[test]
    fn uploads_quad_and_activates_program() {
        let canvas = MockCanvas::new(300, 150);
        let recorder = canvas.recorder();
        let _ctx = FlatContext::init(&canvas, FLAT_VS, FLAT_FS, &NAMES).unwrap();

        let calls = recorder.calls();
        assert!(calls.contains(&GlCall::BufferData {
            target: BufferTarget::Array,
            bytes: 8 * 4
        }));
        assert!(calls.contains(&GlCall::VertexAttribPointer { index: 0, components: 2 }));
        assert!(matches!(calls.last(), Some(GlCall::UseProgram(Some(_)))));
    }

    #[test]
    fn undeclared_names_resolve_to_none() {
        let canvas = MockCanvas::new(300, 150);
        let ctx = FlatContext::init(&canvas, FLAT_VS, FLAT_FS, &NAMES).unwrap();
        assert!(ctx.uniform("u_time").is_some());
        assert!(ctx.uniform("u_resolution").is_some());
        assert!(ctx.uniform("u_mouse").is_none());
        assert!(ctx.uniform("u_never_declared").is_none());
    }

    #[test]
    fn render_draws_strip_and_skips_missing_uniforms() {
        let mut canvas = MockCanvas::new(300, 150);
        let recorder = canvas.recorder();
        let mut ctx = FlatContext::init(&canvas, FLAT_VS, FLAT_FS, &NAMES).unwrap();
        let metrics = DisplayMetrics::new(300.0, 150.0, 1.0);
        ctx.render(&mut canvas, metrics, 1.5, Pointer::new(0.1, 0.2));

        assert_eq!(
            recorder.draw_calls(),
            vec![GlCall::DrawArrays {
                mode: DrawMode::TriangleStrip,
                first: 0,
                count: 4
            }]
        );
        assert!(recorder.calls().contains(&GlCall::Uniform1f { name: "u_time".into(), x: 1.5 }));
        assert!(recorder.wrote_uniform("u_resolution"));
        assert!(!recorder.wrote_uniform("u_mouse"));
        assert_eq!(recorder.viewport_calls(), 0);
    }

    #[test]
    fn only_catalog_names_are_written() {
        // u_time is declared by the shader but not requested.
        let mut canvas = MockCanvas::new(300, 150);
        let recorder = canvas.recorder();
        let mut ctx = FlatContext::init(&canvas, FLAT_VS, FLAT_FS, &["u_resolution"]).unwrap();
        ctx.render(&mut canvas, DisplayMetrics::new(300.0, 150.0, 1.0), 1.0, Pointer::default());
        assert!(!recorder.wrote_uniform("u_time"));
    }

    #[test]
    fn link_failure_leaves_nothing() {
        let canvas = MockCanvas::new(300, 150);
        let recorder = canvas.recorder();
        let fs = "
precision mediump float;
varying vec2 v_uv;
void main() { gl_FragColor = vec4(v_uv, 0.0, 1.0); }";
        let result = FlatContext::init(&canvas, FLAT_VS, fs, &NAMES);
        assert!(matches!(result, Err(SceneError::Link { .. })));
        assert_eq!(recorder.live_objects(), 0);
    }

    #[test]
    fn drop_releases_everything() {
        let canvas = MockCanvas::new(300, 150);
        let recorder = canvas.recorder();
        let ctx = FlatContext::init(&canvas, FLAT_VS, FLAT_FS, &NAMES).unwrap();
        assert_eq!(recorder.live_objects(), 4);
        drop(ctx);
        assert_eq!(recorder.live_objects(), 0);
    }
}
