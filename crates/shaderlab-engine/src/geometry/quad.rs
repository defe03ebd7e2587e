/// Full-screen quad in clip space, ordered for `TRIANGLE_STRIP`.
pub const FULLSCREEN_QUAD: [f32; 8] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    -1.0, 1.0, //
    1.0, 1.0,
];

/// Vertices drawn for [`FULLSCREEN_QUAD`].
pub const FULLSCREEN_QUAD_VERTICES: usize = FULLSCREEN_QUAD.len() / 2;
