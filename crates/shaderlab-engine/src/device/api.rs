use std::fmt;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Buffer binding point.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    /// Per-vertex attribute data.
    Array,
    /// Index data.
    ElementArray,
}

/// Fixed-function toggles the layer uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Capability {
    DepthTest,
    Blend,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendFactor {
    SrcAlpha,
    OneMinusSrcAlpha,
}

/// Primitive assembly for non-indexed draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawMode {
    Points,
    TriangleStrip,
}

/// The slice of WebGL 1 this layer talks to.
///
/// Keeping the seam this narrow lets the same scene code drive a real
/// `glow::Context` in the browser or on desktop, and a recording mock in
/// tests. Methods mirror their GL namesakes; handles are plain copyable keys
/// owned by whoever created them.
pub trait GraphicsApi {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type UniformLocation: Clone;

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    /// `None` when the program has no active uniform with this name.
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;

    /// `None` when the attribute is not active in the linked program.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;

    // ── buffers & attributes ──────────────────────────────────────────────

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    /// Uploads with `STATIC_DRAW` usage.
    fn buffer_data(&self, target: BufferTarget, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Tightly packed `FLOAT` components read from the bound array buffer.
    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32);

    // ── fixed function ────────────────────────────────────────────────────

    fn enable(&self, capability: Capability);
    fn blend_func(&self, src: BlendFactor, dst: BlendFactor);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// Clears color, and depth when `depth` is set.
    fn clear(&self, depth: bool);

    // ── uniforms ──────────────────────────────────────────────────────────

    fn uniform_matrix4(&self, location: &Self::UniformLocation, columns: &[f32; 16]);
    fn uniform_1f(&self, location: &Self::UniformLocation, x: f32);
    fn uniform_2f(&self, location: &Self::UniformLocation, x: f32, y: f32);

    // ── draws ─────────────────────────────────────────────────────────────

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32);
    /// Indexed `TRIANGLES` with `UNSIGNED_SHORT` indices from the bound
    /// element buffer.
    fn draw_elements_u16(&self, count: i32);
}
