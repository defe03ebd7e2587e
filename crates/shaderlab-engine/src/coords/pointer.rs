/// Mouse position handed to shaders as `u_mouse`.
///
/// The renderer forwards the components untouched; whether they are pixels or
/// normalized units is a contract between the host and the shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalizes a client-space position (top-left origin) to `[0, 1]²`
    /// with +Y up, the convention gallery shaders expect.
    ///
    /// A zero-sized client area maps everything to the center.
    pub fn normalized(client_x: f64, client_y: f64, client_width: f64, client_height: f64) -> Self {
        if client_width <= 0.0 || client_height <= 0.0 {
            return Self::new(0.5, 0.5);
        }

        let x = (client_x / client_width).clamp(0.0, 1.0);
        let y = 1.0 - (client_y / client_height).clamp(0.0, 1.0);
        Self::new(x as f32, y as f32)
    }
}
