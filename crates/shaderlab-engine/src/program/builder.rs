use crate::device::{GraphicsApi, SceneError, ShaderStage};

/// A linked program and the two shader objects it was built from.
///
/// The shaders stay alive alongside the program so teardown can release all
/// three explicitly.
pub struct LinkedProgram<G: GraphicsApi> {
    pub program: G::Program,
    pub vertex: G::Shader,
    pub fragment: G::Shader,
}

impl<G: GraphicsApi> LinkedProgram<G> {
    /// Deletes the program, then both shaders.
    pub fn delete(&self, gl: &G) {
        gl.delete_program(self.program);
        gl.delete_shader(self.vertex);
        gl.delete_shader(self.fragment);
    }
}

/// Creates and compiles one shader stage.
///
/// On a compile failure the info log is logged and returned, and the shader
/// object is deleted before returning.
pub fn compile_shader<G: GraphicsApi>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, SceneError> {
    let shader = gl.create_shader(stage).map_err(|reason| {
        log::error!("could not create {stage} shader: {reason}");
        SceneError::ShaderCreation { stage, reason }
    })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let info = gl.shader_info_log(shader);
        log::error!("{stage} shader compile error: {info}");
        gl.delete_shader(shader);
        return Err(SceneError::Compile { stage, log: info });
    }

    Ok(shader)
}

/// Links `vertex` and `fragment` into a new program.
///
/// On failure the program object is deleted; the shaders are left to the
/// caller.
pub fn link_program<G: GraphicsApi>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, SceneError> {
    let program = gl.create_program().map_err(|reason| {
        log::error!("could not create program: {reason}");
        SceneError::ProgramCreation(reason)
    })?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    if !gl.program_link_status(program) {
        let info = gl.program_info_log(program);
        log::error!("program link error: {info}");
        gl.delete_program(program);
        return Err(SceneError::Link { log: info });
    }

    Ok(program)
}

/// Compiles both stages and links them.
///
/// Any object created before a failing step is deleted, so an `Err` leaves
/// nothing behind on the context.
pub fn build_program<G: GraphicsApi>(
    gl: &G,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<LinkedProgram<G>, SceneError> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;

    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(vertex);
            return Err(err);
        }
    };

    match link_program(gl, vertex, fragment) {
        Ok(program) => {
            log::debug!("shader program linked");
            Ok(LinkedProgram {
                program,
                vertex,
                fragment,
            })
        }
        Err(err) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            Err(err)
        }
    }
}
