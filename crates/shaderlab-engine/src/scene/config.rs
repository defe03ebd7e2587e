use std::f32::consts::FRAC_PI_4;

use crate::geometry::DEFAULT_PARTICLE_SEED;
use crate::math::Vec3;

/// Perspective camera parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view, in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            eye: Vec3::new(0.0, 0.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::UNIT_Y,
        }
    }
}

/// Model rotation rates in radians per second.
///
/// The model matrix at time `t` is `rotate_y(t * y) * rotate_x(t * x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinRates {
    pub y: f32,
    pub x: f32,
}

impl Default for SpinRates {
    fn default() -> Self {
        Self { y: 0.5, x: 0.3 }
    }
}

/// UV-sphere tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDetail {
    pub radius: f32,
    pub segments: u32,
    pub rings: u32,
}

impl Default for SphereDetail {
    fn default() -> Self {
        Self {
            radius: 1.2,
            segments: 64,
            rings: 48,
        }
    }
}

/// Initialization and per-frame parameters for a spatial scene.
///
/// Defaults reproduce the gallery's stock scene. Override individual fields
/// with struct update syntax:
///
/// ```
/// use shaderlab_engine::scene::SceneConfig;
///
/// let config = SceneConfig {
///     default_particle_count: 500,
///     ..SceneConfig::default()
/// };
/// assert_eq!(config.cube_size, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// RGBA clear colour applied at the start of each frame.
    pub clear_color: [f32; 4],
    pub camera: CameraConfig,
    pub spin: SpinRates,
    /// Edge length of the cube body.
    pub cube_size: f32,
    pub sphere: SphereDetail,
    /// Particle count used when `init` receives no override.
    pub default_particle_count: usize,
    pub particle_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.05, 0.05, 0.08, 1.0],
            camera: CameraConfig::default(),
            spin: SpinRates::default(),
            cube_size: 1.5,
            sphere: SphereDetail::default(),
            default_particle_count: 2000,
            particle_seed: DEFAULT_PARTICLE_SEED,
        }
    }
}
