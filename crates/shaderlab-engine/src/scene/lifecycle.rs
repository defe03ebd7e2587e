use crate::coords::{DisplayMetrics, Pointer};
use crate::device::{DrawingBuffer, GraphicsApi, SceneError};

use super::RenderContext;

/// A built context that draws one frame per call.
pub trait Renderable {
    fn render_frame<S>(
        &mut self,
        surface: &mut S,
        metrics: DisplayMetrics,
        time: f32,
        mouse: Pointer,
    ) where
        S: DrawingBuffer + ?Sized;
}

impl<G: GraphicsApi> Renderable for RenderContext<G> {
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

/// State of one preview's scene.
///
/// `Uninitialized` moves to `Ready` or `Failed` exactly once; `Failed` is
/// terminal. Only `Ready` draws.
pub enum SceneLifecycle<T> {
    Uninitialized,
    Ready(T),
    Failed(SceneError),
}

impl<T> Default for SceneLifecycle<T> {
    fn default() -> Self {
        SceneLifecycle::Uninitialized
    }
}

impl<T: Renderable> SceneLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `init` if initialization has not run yet.
    ///
    /// Later calls leave a `Ready` or `Failed` state untouched and never
    /// invoke `init`.
    pub fn initialize<F>(&mut self, init: F) -> &Self
    where
        F: FnOnce() -> Result<T, SceneError>,
    {
        if matches!(self, SceneLifecycle::Uninitialized) {
            *self = match init() {
                Ok(scene) => SceneLifecycle::Ready(scene),
                Err(err) => {
                    log::warn!("scene initialization failed: {err}");
                    SceneLifecycle::Failed(err)
                }
            };
        }
        self
    }

    /// Draws one frame when `Ready`; returns whether anything was drawn.
    pub fn render<S>(
        &mut self,
        surface: &mut S,
        metrics: DisplayMetrics,
        time: f32,
        mouse: Pointer,
    ) -> bool
    where
        S: DrawingBuffer + ?Sized,
    {
        match self {
            SceneLifecycle::Ready(scene) => {
                scene.render_frame(surface, metrics, time, mouse);
                true
            }
            _ => false,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SceneLifecycle::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SceneLifecycle::Ready(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SceneError> {
        match self {
            SceneLifecycle::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FLAT_FS, FLAT_VS, MESH_FS, MESH_VS};
    use crate::flat::FlatContext;
    use crate::mock::{MockCanvas, MockGl};
    use crate::scene::GeometryKind;

    fn cube(canvas: &MockCanvas, fragment: &str) -> Result<RenderContext<MockGl>, SceneError> {
        RenderContext::init(canvas, MESH_VS, fragment, GeometryKind::Cube, None)
    }

    #[test]
    fn uninitialized_does_not_draw() {
        let mut canvas = MockCanvas::new(300, 150);
        let mut scene = SceneLifecycle::<RenderContext<MockGl>>::new();
        let metrics = DisplayMetrics::new(300.0, 150.0, 1.0);
        assert!(!scene.render(&mut canvas, metrics, 0.0, Pointer::default()));
        assert!(canvas.recorder().draw_calls().is_empty());
    }

    #[test]
    fn ready_draws() {
        let mut canvas = MockCanvas::new(300, 150);
        let mut scene = SceneLifecycle::new();
        scene.initialize(|| cube(&canvas, MESH_FS));
        assert!(scene.is_ready());
        let metrics = DisplayMetrics::new(300.0, 150.0, 1.0);
        assert!(scene.render(&mut canvas, metrics, 0.5, Pointer::default()));
        assert_eq!(canvas.recorder().draw_calls().len(), 1);
    }

    #[test]
    fn flat_programs_share_the_lifecycle() {
        let mut canvas = MockCanvas::new(300, 150);
        let mut scene = SceneLifecycle::new();
        scene.initialize(|| FlatContext::init(&canvas, FLAT_VS, FLAT_FS, &["u_time"]));
        assert!(scene.render(&mut canvas, DisplayMetrics::default(), 0.0, Pointer::default()));
        assert_eq!(canvas.recorder().draw_calls().len(), 1);
    }

    #[test]
    fn failure_is_terminal() {
        let mut canvas = MockCanvas::new(300, 150);
        let mut scene = SceneLifecycle::new();
        scene.initialize(|| cube(&canvas, "broken"));
        assert!(matches!(scene.error(), Some(SceneError::Compile { .. })));

        // A second attempt with valid sources does not revive it.
        let mut retried = false;
        scene.initialize(|| {
            retried = true;
            cube(&canvas, MESH_FS)
        });
        assert!(!retried);
        assert!(!scene.is_ready());
        assert!(!scene.render(&mut canvas, DisplayMetrics::default(), 1.0, Pointer::default()));
        assert!(canvas.recorder().draw_calls().is_empty());
    }

    #[test]
    fn initialize_runs_once() {
        let canvas = MockCanvas::new(300, 150);
        let recorder = canvas.recorder();
        let mut scene = SceneLifecycle::new();
        scene.initialize(|| cube(&canvas, MESH_FS));
        let programs = recorder.live_programs();
        scene.initialize(|| {
            RenderContext::init(&canvas, MESH_VS, MESH_FS, GeometryKind::Sphere, None)
        });
        assert_eq!(recorder.live_programs(), programs);
        assert_eq!(scene.ready().map(|c| c.vertex_count()), Some(36));
    }
}
