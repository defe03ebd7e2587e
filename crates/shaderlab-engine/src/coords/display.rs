use winit::dpi::{LogicalSize, PhysicalSize};

/// Host display measurements for one canvas, sampled once per frame.
///
/// `client_size` is the CSS (logical) size of the canvas element and
/// `scale_factor` is the device pixel ratio. The renderer receives this
/// explicitly instead of reading window globals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayMetrics {
    pub client_size: LogicalSize<f64>,
    pub scale_factor: f64,
}

impl DisplayMetrics {
    /// Builds metrics, falling back to a scale of 1.0 when the reported ratio
    /// is zero, negative or non-finite.
    pub fn new(client_width: f64, client_height: f64, scale_factor: f64) -> Self {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };

        Self {
            client_size: LogicalSize::new(client_width.max(0.0), client_height.max(0.0)),
            scale_factor,
        }
    }

    /// Backing-store size in device pixels (`client × ratio`, rounded).
    #[inline]
    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.client_size.to_physical(self.scale_factor)
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
