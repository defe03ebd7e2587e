use crate::math::Mat4;
use crate::scene::SceneConfig;

/// Matrices for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    /// `projection · view · model`.
    pub model_view_projection: Mat4,
}

impl FrameTransforms {
    /// Computes the frame matrices at `time` seconds.
    ///
    /// A pure function of its arguments: equal inputs give bit-identical
    /// matrices.
    pub fn at(time: f32, aspect: f32, config: &SceneConfig) -> Self {
        let camera = &config.camera;

        let projection = Mat4::perspective(camera.fov_y, aspect, camera.near, camera.far);
        let view = Mat4::look_at(camera.eye, camera.target, camera.up);
        let model =
            Mat4::rotate_y(time * config.spin.y).multiply(&Mat4::rotate_x(time * config.spin.x));
        let model_view_projection = projection.multiply(&view.multiply(&model));

        Self {
            model,
            view,
            projection,
            model_view_projection,
        }
    }
}

/// `width / height` with the height floored at one pixel.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}
