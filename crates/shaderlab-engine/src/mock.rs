//! Mock graphics backend for testing
//!
//! Provides `MockGl`, a `GraphicsApi` that records every call for test
//! assertions, and `MockCanvas`, a `GraphicsCanvas` handing it out. No GPU
//! or browser is needed.
//!
//! The mock reads GLSL declarations to behave like a driver would:
//! - a shader compiles when it has a `main` and balanced delimiters
//! - a program links when every fragment `varying` is declared by the vertex
//!   stage
//! - declared `uniform`s and `attribute`s resolve to locations, everything
//!   else resolves to `None`

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use winit::dpi::PhysicalSize;

use crate::device::{
    BlendFactor, BufferTarget, Capability, DrawMode, DrawingBuffer, GraphicsApi, GraphicsCanvas,
    ShaderStage,
};

/// Record of a state-changing call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader { shader: u32, stage: ShaderStage },
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindBuffer { target: BufferTarget, buffer: Option<u32> },
    BufferData { target: BufferTarget, bytes: usize },
    DeleteBuffer(u32),
    EnableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, components: i32 },
    Enable(Capability),
    BlendFunc(BlendFactor, BlendFactor),
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    ClearColor([f32; 4]),
    Clear { depth: bool },
    UniformMatrix4 { name: String, columns: [f32; 16] },
    Uniform1f { name: String, x: f32 },
    Uniform2f { name: String, x: f32, y: f32 },
    DrawArrays { mode: DrawMode, first: i32, count: i32 },
    DrawElements { count: i32 },
}

/// Uniform location handed out by the mock: the owning program and the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockUniformLocation {
    pub program: u32,
    pub name: String,
}

#[derive(Debug)]
struct MockShader {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Debug, Default)]
struct MockProgram {
    attached: Vec<u32>,
    linked: bool,
    log: String,
    uniforms: Vec<String>,
    attributes: Vec<String>,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u32,
    shaders: HashMap<u32, MockShader>,
    programs: HashMap<u32, MockProgram>,
    buffers: HashSet<u32>,
    fail_buffers: bool,
}

impl MockState {
    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
struct Shared {
    calls: RefCell<Vec<GlCall>>,
    state: RefCell<MockState>,
}

/// Recording `GraphicsApi`.
///
/// Clones share the same call log and object tables, so a test can keep a
/// [`MockRecorder`] after the context itself has been moved into a scene.
#[derive(Debug, Clone, Default)]
pub struct MockGl {
    shared: Rc<Shared>,
}

impl MockGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `create_buffer` fail.
    pub fn fail_buffer_creation(&self) {
        self.shared.state.borrow_mut().fail_buffers = true;
    }

    /// Read-only view of what this context has recorded.
    pub fn recorder(&self) -> MockRecorder {
        MockRecorder {
            shared: Rc::clone(&self.shared),
        }
    }

    fn record(&self, call: GlCall) {
        self.shared.calls.borrow_mut().push(call);
    }
}

impl GraphicsApi for MockGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = MockUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut state = self.shared.state.borrow_mut();
        let shader = state.alloc();
        state.shaders.insert(
            shader,
            MockShader {
                stage,
                source: String::new(),
                compiled: false,
                log: String::new(),
            },
        );
        drop(state);
        self.record(GlCall::CreateShader { shader, stage });
        Ok(shader)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(s) = self.shared.state.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(s) = self.shared.state.borrow_mut().shaders.get_mut(&shader) {
            match check_compiles(&s.source) {
                Ok(()) => {
                    s.compiled = true;
                    s.log.clear();
                }
                Err(log) => {
                    s.compiled = false;
                    s.log = log;
                }
            }
        }
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.shared
            .state
            .borrow()
            .shaders
            .get(&shader)
            .is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.shared
            .state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.shared.state.borrow_mut().shaders.remove(&shader);
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.shared.state.borrow_mut();
        let program = state.alloc();
        state.programs.insert(program, MockProgram::default());
        drop(state);
        self.record(GlCall::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let Some(p) = self.shared.state.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
        self.record(GlCall::AttachShader { program, shader });
    }

    fn link_program(&self, program: u32) {
        {
            let mut state = self.shared.state.borrow_mut();
            let MockState {
                shaders, programs, ..
            } = &mut *state;

            if let Some(p) = programs.get_mut(&program) {
                let stage_source = |stage: ShaderStage| {
                    p.attached
                        .iter()
                        .filter_map(|id| shaders.get(id))
                        .find(|s| s.stage == stage && s.compiled)
                        .map(|s| s.source.as_str())
                };

                match (stage_source(ShaderStage::Vertex), stage_source(ShaderStage::Fragment)) {
                    (Some(vs), Some(fs)) => match check_links(vs, fs) {
                        Ok(()) => {
                            let mut uniforms = declarations(vs, "uniform");
                            for name in declarations(fs, "uniform") {
                                if !uniforms.contains(&name) {
                                    uniforms.push(name);
                                }
                            }
                            p.uniforms = uniforms;
                            p.attributes = declarations(vs, "attribute");
                            p.linked = true;
                            p.log.clear();
                        }
                        Err(log) => {
                            p.linked = false;
                            p.log = log;
                        }
                    },
                    _ => {
                        p.linked = false;
                        p.log = "missing compiled vertex or fragment shader".to_string();
                    }
                }
            }
        }
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.shared
            .state
            .borrow()
            .programs
            .get(&program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.shared
            .state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.shared.state.borrow_mut().programs.remove(&program);
        self.record(GlCall::DeleteProgram(program));
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<MockUniformLocation> {
        let state = self.shared.state.borrow();
        let p = state.programs.get(&program)?;
        (p.linked && p.uniforms.iter().any(|u| u == name)).then(|| MockUniformLocation {
            program,
            name: name.to_string(),
        })
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        let state = self.shared.state.borrow();
        let p = state.programs.get(&program)?;
        if !p.linked {
            return None;
        }
        p.attributes.iter().position(|a| a == name).map(|i| i as u32)
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut state = self.shared.state.borrow_mut();
        if state.fail_buffers {
            return Err("out of memory".to_string());
        }
        let buffer = state.alloc();
        state.buffers.insert(buffer);
        drop(state);
        self.record(GlCall::CreateBuffer(buffer));
        Ok(buffer)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer { target, buffer });
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.record(GlCall::BufferData {
            target,
            bytes: data.len(),
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.shared.state.borrow_mut().buffers.remove(&buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32) {
        self.record(GlCall::VertexAttribPointer { index, components });
    }

    fn enable(&self, capability: Capability) {
        self.record(GlCall::Enable(capability));
    }

    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.record(GlCall::BlendFunc(src, dst));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear(&self, depth: bool) {
        self.record(GlCall::Clear { depth });
    }

    fn uniform_matrix4(&self, location: &MockUniformLocation, columns: &[f32; 16]) {
        self.record(GlCall::UniformMatrix4 {
            name: location.name.clone(),
            columns: *columns,
        });
    }

    fn uniform_1f(&self, location: &MockUniformLocation, x: f32) {
        self.record(GlCall::Uniform1f {
            name: location.name.clone(),
            x,
        });
    }

    fn uniform_2f(&self, location: &MockUniformLocation, x: f32, y: f32) {
        self.record(GlCall::Uniform2f {
            name: location.name.clone(),
            x,
            y,
        });
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn draw_elements_u16(&self, count: i32) {
        self.record(GlCall::DrawElements { count });
    }
}

/// Assertion helpers over a [`MockGl`]'s recorded state.
#[derive(Debug, Clone)]
pub struct MockRecorder {
    shared: Rc<Shared>,
}

impl MockRecorder {
    /// Snapshot of every recorded call.
    pub fn calls(&self) -> Vec<GlCall> {
        self.shared.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.shared.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.shared.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn viewport_calls(&self) -> usize {
        self.count(|c| matches!(c, GlCall::Viewport { .. }))
    }

    pub fn draw_calls(&self) -> Vec<GlCall> {
        self.shared
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, GlCall::DrawArrays { .. } | GlCall::DrawElements { .. }))
            .cloned()
            .collect()
    }

    /// Every matrix written to `name`, oldest first.
    pub fn matrix_writes(&self, name: &str) -> Vec<[f32; 16]> {
        self.shared
            .calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                GlCall::UniformMatrix4 { name: n, columns } if n == name => Some(*columns),
                _ => None,
            })
            .collect()
    }

    /// Whether any uniform write targeted `name`.
    pub fn wrote_uniform(&self, name: &str) -> bool {
        self.shared.calls.borrow().iter().any(|c| match c {
            GlCall::UniformMatrix4 { name: n, .. }
            | GlCall::Uniform1f { name: n, .. }
            | GlCall::Uniform2f { name: n, .. } => n == name,
            _ => false,
        })
    }

    pub fn live_shaders(&self) -> usize {
        self.shared.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.shared.state.borrow().programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.shared.state.borrow().buffers.len()
    }

    /// Live shader, program and buffer objects combined.
    pub fn live_objects(&self) -> usize {
        self.live_shaders() + self.live_programs() + self.live_buffers()
    }
}

/// In-memory canvas whose drawing buffer and context availability are set by
/// the test.
#[derive(Debug, Clone)]
pub struct MockCanvas {
    gl: MockGl,
    size: PhysicalSize<u32>,
    context_available: bool,
    resizes: usize,
}

impl MockCanvas {
    /// Canvas with a `width × height` drawing buffer (the HTML default is
    /// 300 × 150).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            gl: MockGl::new(),
            size: PhysicalSize::new(width, height),
            context_available: true,
            resizes: 0,
        }
    }

    /// Canvas that refuses to provide a graphics context.
    pub fn without_context() -> Self {
        Self {
            context_available: false,
            ..Self::new(300, 150)
        }
    }

    pub fn gl(&self) -> &MockGl {
        &self.gl
    }

    pub fn recorder(&self) -> MockRecorder {
        self.gl.recorder()
    }

    /// Number of drawing-buffer reallocations so far.
    pub fn resizes(&self) -> usize {
        self.resizes
    }
}

impl DrawingBuffer for MockCanvas {
    fn drawing_buffer_size(&self) -> PhysicalSize<u32> {
        self.size
    }

    fn set_drawing_buffer_size(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
        self.resizes += 1;
    }
}

impl GraphicsCanvas for MockCanvas {
    type Api = MockGl;

    fn acquire_context(&self) -> Option<MockGl> {
        self.context_available.then(|| self.gl.clone())
    }
}

// ── GLSL inspection ───────────────────────────────────────────────────────

fn strip_line_comments(source: &str) -> String {
    source
        .lines()
        .map(|line| line.split("//").next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Names declared with `qualifier` (`uniform`, `attribute`, `varying`), in
/// source order. Array suffixes are dropped.
fn declarations(source: &str, qualifier: &str) -> Vec<String> {
    let code = strip_line_comments(source);
    let mut names = Vec::new();

    for statement in code.split([';', '{', '}']) {
        let tokens: Vec<&str> = statement.split_whitespace().collect();
        if tokens.first() != Some(&qualifier) || tokens.len() < 3 {
            continue;
        }
        if let Some(last) = tokens.last() {
            let name = last.split('[').next().unwrap_or(last).to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    names
}

fn check_compiles(source: &str) -> Result<(), String> {
    let code = strip_line_comments(source);

    if !code.contains("void main") {
        return Err("ERROR: 0:0: 'main' : function not defined".to_string());
    }

    let mut depth = 0i32;
    let mut parens = 0i32;
    for (line_no, line) in code.lines().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                '(' => parens += 1,
                ')' => parens -= 1,
                _ => {}
            }
            if depth < 0 || parens < 0 {
                return Err(format!(
                    "ERROR: 0:{}: syntax error: unexpected closing delimiter",
                    line_no + 1
                ));
            }
        }
    }

    if depth != 0 || parens != 0 {
        return Err("ERROR: 0:0: syntax error: unexpected end of file".to_string());
    }

    Ok(())
}

fn check_links(vertex: &str, fragment: &str) -> Result<(), String> {
    let produced = declarations(vertex, "varying");
    for name in declarations(fragment, "varying") {
        if !produced.contains(&name) {
            return Err(format!("Varying `{name}` is not declared in the vertex shader"));
        }
    }
    Ok(())
}
