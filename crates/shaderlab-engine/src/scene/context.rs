use crate::device::{
    BlendFactor, BufferTarget, Capability, GraphicsApi, GraphicsCanvas, SceneError,
};
use crate::geometry::{
    Geometry, ParticleField, create_cube, create_particles_seeded, create_sphere,
};
use crate::program::{LinkedProgram, SceneUniforms, build_program};

use super::{GeometryKind, SceneConfig};

/// GPU buffers owned by a scene.
///
/// Slots fill in upload order; teardown deletes whichever are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneBuffers<B> {
    pub position: Option<B>,
    /// Normals for meshes, velocities for particles.
    pub normal: Option<B>,
    /// UVs for meshes, per-particle params for particles.
    pub uv: Option<B>,
    /// Meshes only.
    pub index: Option<B>,
}

impl<B> Default for SceneBuffers<B> {
    fn default() -> Self {
        Self {
            position: None,
            normal: None,
            uv: None,
            index: None,
        }
    }
}

impl<B: Copy> SceneBuffers<B> {
    fn present(&self) -> impl Iterator<Item = B> {
        [self.position, self.normal, self.uv, self.index]
            .into_iter()
            .flatten()
    }
}

/// The single body a scene draws.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneBody {
    Mesh(Geometry),
    Particles(ParticleField),
}

impl SceneBody {
    fn generate(kind: GeometryKind, particle_count: Option<usize>, config: &SceneConfig) -> Self {
        match kind {
            GeometryKind::Cube => SceneBody::Mesh(create_cube(config.cube_size)),
            GeometryKind::Sphere => SceneBody::Mesh(create_sphere(
                config.sphere.radius,
                config.sphere.segments,
                config.sphere.rings,
            )),
            GeometryKind::Particles => SceneBody::Particles(create_particles_seeded(
                particle_count.unwrap_or(config.default_particle_count),
                config.particle_seed,
            )),
        }
    }
}

/// Everything needed to draw one spatial scene.
///
/// Owns the graphics handle and every object created on it. Dropping the
/// context deletes its buffers, program and shaders.
pub struct RenderContext<G: GraphicsApi> {
    pub(crate) gl: G,
    pub(crate) program: LinkedProgram<G>,
    pub(crate) uniforms: SceneUniforms<G::UniformLocation>,
    pub(crate) buffers: SceneBuffers<G::Buffer>,
    pub(crate) body: SceneBody,
    pub(crate) config: SceneConfig,
}

/// Acquires a context from `canvas`, logging when the host refuses.
pub(crate) fn acquire<C: GraphicsCanvas>(canvas: &C) -> Result<C::Api, SceneError> {
    canvas.acquire_context().ok_or_else(|| {
        log::error!("graphics context unavailable");
        SceneError::ContextUnavailable
    })
}

impl<G: GraphicsApi> RenderContext<G> {
    /// Builds a scene with [`SceneConfig::default`].
    ///
    /// `particle_count` overrides the configured count for
    /// [`GeometryKind::Particles`] and is ignored otherwise.
    pub fn init<C>(
        canvas: &C,
        vertex_source: &str,
        fragment_source: &str,
        kind: GeometryKind,
        particle_count: Option<usize>,
    ) -> Result<Self, SceneError>
    where
        C: GraphicsCanvas<Api = G>,
    {
        Self::init_with_config(
            canvas,
            vertex_source,
            fragment_source,
            kind,
            particle_count,
            SceneConfig::default(),
        )
    }

    /// Builds a scene: context, render state, program, uniforms, body and
    /// buffers, in that order.
    ///
    /// Returns a fully bound context, or an error with every object created
    /// along the way already released.
    pub fn init_with_config<C>(
        canvas: &C,
        vertex_source: &str,
        fragment_source: &str,
        kind: GeometryKind,
        particle_count: Option<usize>,
        config: SceneConfig,
    ) -> Result<Self, SceneError>
    where
        C: GraphicsCanvas<Api = G>,
    {
        let gl = acquire(canvas)?;

        gl.enable(Capability::DepthTest);
        gl.enable(Capability::Blend);
        gl.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);

        let program = build_program(&gl, vertex_source, fragment_source)?;
        gl.use_program(Some(program.program));

        let uniforms = SceneUniforms::resolve(&gl, program.program);
        let body = SceneBody::generate(kind, particle_count, &config);

        let mut ctx = Self {
            gl,
            program,
            uniforms,
            buffers: SceneBuffers::default(),
            body,
            config,
        };
        // An error here drops `ctx`, which releases the partial upload.
        ctx.upload_body()?;

        log::info!(
            "{kind} scene ready: {} vertices, {} uniforms bound",
            ctx.vertex_count(),
            ctx.uniforms.resolved_count()
        );

        Ok(ctx)
    }

    /// `true` when the body is a particle field (drawn as points).
    #[inline]
    pub fn is_particle_system(&self) -> bool {
        matches!(self.body, SceneBody::Particles(_))
    }

    /// Index count for meshes, particle count for particle fields.
    pub fn vertex_count(&self) -> usize {
        match &self.body {
            SceneBody::Mesh(geometry) => geometry.vertex_count,
            SceneBody::Particles(field) => field.count,
        }
    }

    pub fn body(&self) -> &SceneBody {
        &self.body
    }

    pub fn uniforms(&self) -> &SceneUniforms<G::UniformLocation> {
        &self.uniforms
    }

    pub fn buffers(&self) -> &SceneBuffers<G::Buffer> {
        &self.buffers
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    fn upload_body(&mut self) -> Result<(), SceneError> {
        match &self.body {
            SceneBody::Mesh(geometry) => {
                let position = self.upload_attribute(&geometry.positions, "a_position", 3)?;
                self.buffers.position = Some(position);
                let normal = self.upload_attribute(&geometry.normals, "a_normal", 3)?;
                self.buffers.normal = Some(normal);
                let uv = self.upload_attribute(&geometry.uvs, "a_uv", 2)?;
                self.buffers.uv = Some(uv);

                let index = create_buffer(&self.gl)?;
                self.buffers.index = Some(index);
                self.gl.bind_buffer(BufferTarget::ElementArray, Some(index));
                let bytes = bytemuck::cast_slice(&geometry.indices);
                self.gl.buffer_data(BufferTarget::ElementArray, bytes);
            }
            SceneBody::Particles(field) => {
                let position = self.upload_attribute(&field.positions, "a_position", 3)?;
                self.buffers.position = Some(position);
                let velocity = self.upload_attribute(&field.velocities, "a_velocity", 3)?;
                self.buffers.normal = Some(velocity);
                let params = self.upload_attribute(&field.params, "a_params", 2)?;
                self.buffers.uv = Some(params);
            }
        }
        Ok(())
    }

    /// Creates and fills an array buffer, and points `attribute` at it when
    /// the program declares it.
    fn upload_attribute(
        &self,
        data: &[f32],
        attribute: &str,
        components: i32,
    ) -> Result<G::Buffer, SceneError> {
        let buffer = create_buffer(&self.gl)?;
        self.gl.bind_buffer(BufferTarget::Array, Some(buffer));
        self.gl.buffer_data(BufferTarget::Array, bytemuck::cast_slice(data));

        if let Some(index) = self.gl.attrib_location(self.program.program, attribute) {
            self.gl.enable_vertex_attrib_array(index);
            self.gl.vertex_attrib_pointer_f32(index, components);
        } else {
            log::trace!("attribute {attribute} not active, buffer left unbound");
        }

        Ok(buffer)
    }
}

pub(crate) fn create_buffer<G: GraphicsApi>(gl: &G) -> Result<G::Buffer, SceneError> {
    gl.create_buffer().map_err(|reason| {
        log::error!("could not create buffer: {reason}");
        SceneError::BufferCreation(reason)
    })
}

impl<G: GraphicsApi> Drop for RenderContext<G> {
    fn drop(&mut self) {
        self.gl.use_program(None);
        for buffer in self.buffers.present() {
            self.gl.delete_buffer(buffer);
        }
        self.program.delete(&self.gl);
        log::debug!("scene released");
    }
}
