use crate::device::GraphicsApi;
use crate::render::FrameTransforms;

/// The fixed set of uniform names a spatial scene looks up.
pub const SCENE_UNIFORM_NAMES: [&str; 8] = [
    "u_modelMatrix",
    "u_viewMatrix",
    "u_projectionMatrix",
    "u_modelViewProjection",
    "u_time",
    "u_resolution",
    "u_mouse",
    "u_model",
];

/// Resolved uniform locations of a spatial scene program.
///
/// A field is `None` when the program does not declare (or the driver
/// optimized away) that uniform. Writes to `None` entries are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneUniforms<L> {
    pub model_matrix: Option<L>,
    pub view_matrix: Option<L>,
    pub projection_matrix: Option<L>,
    pub model_view_projection: Option<L>,
    pub time: Option<L>,
    pub resolution: Option<L>,
    pub mouse: Option<L>,
    /// Alias of `model_matrix` used by some programs.
    pub model: Option<L>,
}

impl<L> Default for SceneUniforms<L> {
    fn default() -> Self {
        Self {
            model_matrix: None,
            view_matrix: None,
            projection_matrix: None,
            model_view_projection: None,
            time: None,
            resolution: None,
            mouse: None,
            model: None,
        }
    }
}

impl<L: Clone> SceneUniforms<L> {
    /// Looks up every name in [`SCENE_UNIFORM_NAMES`] on `program`.
    pub fn resolve<G>(gl: &G, program: G::Program) -> Self
    where
        G: GraphicsApi<UniformLocation = L>,
    {
        let [
            model_matrix,
            view_matrix,
            projection_matrix,
            model_view_projection,
            time,
            resolution,
            mouse,
            model,
        ] = SCENE_UNIFORM_NAMES.map(|name| gl.uniform_location(program, name));
        Self {
            model_matrix,
            view_matrix,
            projection_matrix,
            model_view_projection,
            time,
            resolution,
            mouse,
            model,
        }
    }

    /// Locations in [`SCENE_UNIFORM_NAMES`] order.
    fn slots(&self) -> [&Option<L>; SCENE_UNIFORM_NAMES.len()] {
        [
            &self.model_matrix,
            &self.view_matrix,
            &self.projection_matrix,
            &self.model_view_projection,
            &self.time,
            &self.resolution,
            &self.mouse,
            &self.model,
        ]
    }

    /// Location of a scene uniform by its GLSL name.
    pub fn location(&self, name: &str) -> Option<&L> {
        let slot = SCENE_UNIFORM_NAMES.iter().position(|&n| n == name)?;
        self.slots()[slot].as_ref()
    }

    /// Number of names that resolved.
    pub fn resolved_count(&self) -> usize {
        self.slots().iter().filter(|l| l.is_some()).count()
    }

    /// Writes one frame's values to every resolved location.
    ///
    /// `u_modelMatrix` and `u_model` both receive the model matrix.
    pub fn upload<G>(
        &self,
        gl: &G,
        transforms: &FrameTransforms,
        time: f32,
        resolution: (f32, f32),
        mouse: (f32, f32),
    ) where
        G: GraphicsApi<UniformLocation = L>,
    {
        let matrices = [
            (&self.model_matrix, &transforms.model),
            (&self.model, &transforms.model),
            (&self.view_matrix, &transforms.view),
            (&self.projection_matrix, &transforms.projection),
            (&self.model_view_projection, &transforms.model_view_projection),
        ];
        for (location, matrix) in matrices {
            if let Some(location) = location {
                gl.uniform_matrix4(location, &matrix.0);
            }
        }

        if let Some(location) = &self.time {
            gl.uniform_1f(location, time);
        }
        if let Some(location) = &self.resolution {
            gl.uniform_2f(location, resolution.0, resolution.1);
        }
        if let Some(location) = &self.mouse {
            gl.uniform_2f(location, mouse.0, mouse.1);
        }
    }
}
