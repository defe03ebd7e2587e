use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use shaderlab_catalog::Catalog;
use shaderlab_engine::coords::{DisplayMetrics, PhysicalSize};
use shaderlab_engine::device::{DrawingBuffer, GraphicsCanvas};
use shaderlab_engine::logging::{LoggingConfig, init_logging};

use crate::host::Preview;

/// `<canvas>` element driven through WebGL 1.
pub struct WebCanvas {
    element: HtmlCanvasElement,
}

impl WebCanvas {
    pub fn new(element: HtmlCanvasElement) -> Self {
        Self { element }
    }

    /// Client size and `devicePixelRatio`, sampled now.
    pub fn metrics(&self) -> DisplayMetrics {
        let ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        DisplayMetrics::new(
            self.element.client_width() as f64,
            self.element.client_height() as f64,
            ratio,
        )
    }
}

impl DrawingBuffer for WebCanvas {
    fn drawing_buffer_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.element.width(), self.element.height())
    }

    fn set_drawing_buffer_size(&mut self, size: PhysicalSize<u32>) {
        self.element.set_width(size.width);
        self.element.set_height(size.height);
    }
}

impl GraphicsCanvas for WebCanvas {
    type Api = glow::Context;

    fn acquire_context(&self) -> Option<glow::Context> {
        let context = self
            .element
            .get_context("webgl")
            .ok()
            .flatten()?
            .dyn_into::<WebGlRenderingContext>()
            .ok()?;
        Some(glow::Context::from_webgl1_context(context))
    }
}

/// A catalog example running on a page canvas.
///
/// The page owns the animation loop and calls `frame` from its
/// `requestAnimationFrame` callback.
#[wasm_bindgen]
pub struct ShaderView {
    preview: Preview<WebCanvas>,
}

#[wasm_bindgen]
impl ShaderView {
    /// Mounts `example_id` from the built-in catalog on `canvas`.
    pub fn mount(canvas: HtmlCanvasElement, example_id: &str) -> Result<ShaderView, JsValue> {
        let catalog = Catalog::builtin();
        Preview::mount(WebCanvas::new(canvas), &catalog, example_id)
            .and_then(|preview| preview.status().map(|()| ShaderView { preview }))
            .map_err(|err| {
                log::error!("{err:#}");
                JsValue::from_str(&format!("{err:#}"))
            })
    }

    /// Draws one frame. `time_seconds` is the host clock; mouse coordinates
    /// are canvas client pixels.
    pub fn frame(&mut self, time_seconds: f64, mouse_x: f64, mouse_y: f64) {
        let metrics = self.preview.canvas().metrics();
        self.preview.frame(time_seconds, metrics, (mouse_x, mouse_y));
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging(LoggingConfig::default());
}
