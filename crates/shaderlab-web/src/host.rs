use anyhow::{Context, Result, anyhow};

use shaderlab_catalog::{Catalog, SceneSetup, ShaderExample};
use shaderlab_engine::coords::{DisplayMetrics, Pointer};
use shaderlab_engine::device::{DrawingBuffer, GraphicsApi, GraphicsCanvas, SceneError};
use shaderlab_engine::flat::FlatContext;
use shaderlab_engine::scene::{RenderContext, Renderable, SceneLifecycle};
use shaderlab_engine::time::FrameClock;

/// The context a mounted example draws with.
pub enum ActiveScene<G: GraphicsApi> {
    Spatial(RenderContext<G>),
    Flat(FlatContext<G>),
}

impl<G: GraphicsApi> ActiveScene<G> {
    /// Builds the context `example.setup` asks for.
    pub fn build<C>(canvas: &C, example: &ShaderExample) -> Result<Self, SceneError>
    where
        C: GraphicsCanvas<Api = G>,
    {
        let (vertex, fragment) = (example.vertex_shader, example.fragment_shader);
        Ok(match example.setup {
            SceneSetup::Spatial {
                geometry,
                particle_count,
            } => ActiveScene::Spatial(RenderContext::init(
                canvas,
                vertex,
                fragment,
                geometry,
                particle_count,
            )?),
            SceneSetup::Flat { uniforms } => {
                ActiveScene::Flat(FlatContext::init(canvas, vertex, fragment, uniforms)?)
            }
        })
    }
}

impl<G: GraphicsApi> Renderable for ActiveScene<G> {
    fn render_frame<S>(
        &mut self,
        surface: &mut S,
        metrics: DisplayMetrics,
        time: f32,
        mouse: Pointer,
    ) where
        S: DrawingBuffer + ?Sized,
    {
        match self {
            ActiveScene::Spatial(ctx) => ctx.render(surface, metrics, time, mouse),
            ActiveScene::Flat(ctx) => ctx.render(surface, metrics, time, mouse),
        }
    }
}

/// One live preview: a canvas, the example mounted on it and its clock.
///
/// A preview whose scene failed to build stays mounted but never draws.
pub struct Preview<C: GraphicsCanvas> {
    canvas: C,
    example_id: &'static str,
    scene: SceneLifecycle<ActiveScene<C::Api>>,
    clock: FrameClock,
}

impl<C: GraphicsCanvas> Preview<C> {
    /// Looks `example_id` up in `catalog` and mounts it on `canvas`.
    ///
    /// Only an unknown id is an error here; a scene that fails to build
    /// leaves the preview in its failed state, reported by [`Self::status`].
    pub fn mount(canvas: C, catalog: &Catalog, example_id: &str) -> Result<Self> {
        let entry = catalog
            .find(example_id)
            .ok_or_else(|| anyhow!("no example with id `{example_id}`"))?;
        let example = entry.example();

        let mut scene = SceneLifecycle::new();
        scene.initialize(|| ActiveScene::build(&canvas, example));
        if scene.is_ready() {
            log::info!("mounted `{example_id}`");
        }

        Ok(Self {
            canvas,
            example_id: example.id,
            scene,
            clock: FrameClock::new(),
        })
    }

    /// `Err` with the build failure when the scene could not be built.
    pub fn status(&self) -> Result<()> {
        match self.scene.error() {
            Some(err) => {
                Err(err.clone()).with_context(|| format!("mounting `{}`", self.example_id))
            }
            None => Ok(()),
        }
    }

    /// Renders one frame; returns whether anything was drawn.
    ///
    /// `now` is the host timestamp in seconds; the first frame renders at
    /// `t = 0`. `mouse` is in canvas client pixels with a top-left origin.
    pub fn frame(&mut self, now: f64, metrics: DisplayMetrics, mouse: (f64, f64)) -> bool {
        if !self.scene.is_ready() {
            return false;
        }
        let time = self.clock.tick(now);
        let pointer = Pointer::normalized(
            mouse.0,
            mouse.1,
            metrics.client_size.width,
            metrics.client_size.height,
        );
        self.scene.render(&mut self.canvas, metrics, time.elapsed, pointer)
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn scene(&self) -> &SceneLifecycle<ActiveScene<C::Api>> {
        &self.scene
    }
}
