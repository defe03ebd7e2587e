use shaderlab_engine::scene::GeometryKind;

use crate::{SceneSetup, ShaderExample, ShaderLevel};

pub(super) const CUBE_3D: ShaderExample = ShaderExample {
    id: "cube-3d",
    title: "Breathing Cube",
    description: "Vertex-stage deformation of a lit cube, with MVP transforms and normals.",
    level: ShaderLevel::Advanced,
    tags: &["3d", "vertex animation", "mvp", "normals"],
    vertex_shader: r#"
attribute vec3 a_position;
attribute vec3 a_normal;

uniform mat4 u_modelMatrix;
uniform mat4 u_viewMatrix;
uniform mat4 u_projectionMatrix;
uniform float u_time;

varying vec3 v_normal;
varying vec3 v_worldPosition;
varying vec3 v_localPosition;

void main() {
    v_localPosition = a_position;

    vec3 pos = a_position;
    float swell = sin(u_time * 2.0 + pos.x * 3.0) * 0.1
                + sin(u_time * 2.5 + pos.y * 3.0) * 0.08
                + sin(u_time * 1.8 + pos.z * 3.0) * 0.06;
    pos += a_normal * swell;
    pos *= 1.0 + sin(u_time * 1.5) * 0.05;

    vec4 world = u_modelMatrix * vec4(pos, 1.0);
    v_worldPosition = world.xyz;
    v_normal = mat3(u_modelMatrix) * a_normal;
    gl_Position = u_projectionMatrix * u_viewMatrix * world;
}"#,
    fragment_shader: r#"
precision highp float;

varying vec3 v_normal;
varying vec3 v_worldPosition;
varying vec3 v_localPosition;
uniform float u_time;

void main() {
    vec3 n = normalize(v_normal);
    vec3 v = normalize(vec3(0.0, 0.0, 4.0) - v_worldPosition);
    vec3 key = normalize(vec3(sin(u_time) * 3.0, cos(u_time * 0.7) * 2.0, 3.0) - v_worldPosition);
    vec3 fill = normalize(vec3(-2.0, -1.0, 2.0) - v_worldPosition);

    float diffuse = max(dot(n, key), 0.0) * 0.7 + max(dot(n, fill), 0.0) * 0.3;
    float specular = pow(max(dot(n, normalize(key + v)), 0.0), 64.0);
    float rim = pow(1.0 - max(dot(n, v), 0.0), 3.0);

    vec3 base = mix(0.5 + 0.5 * v_localPosition, vec3(0.0, 0.8, 0.8), 0.3 + 0.2 * sin(u_time));
    vec3 color = base * (0.15 + diffuse) + vec3(specular * 0.8) + vec3(0.3, 0.6, 1.0) * rim * 0.6;

    color = color / (color + vec3(1.0));
    gl_FragColor = vec4(pow(color, vec3(1.0 / 2.2)), 1.0);
}"#,
    explanation: r#"
## Breathing Cube

Every vertex goes through three transforms:

- **model**: local space to world space (here, a slow spin)
- **view**: world space to camera space
- **projection**: camera space to clip space

The vertex shader pushes each vertex along its normal by a sum of sines before
transforming, so the faces ripple and the whole cube breathes. The fragment
shader lights the result with Blinn-Phong (ambient, diffuse, specular) plus a
Fresnel rim, then tone-maps and gamma-corrects.
"#,
    setup: SceneSetup::Spatial {
        geometry: GeometryKind::Cube,
        particle_count: None,
    },
};

pub(super) const SPHERE_DEFORM: ShaderExample = ShaderExample {
    id: "sphere-deform",
    title: "Noise-Deformed Sphere",
    description: "A UV sphere displaced along its normals by animated 3D value noise.",
    level: ShaderLevel::Advanced,
    tags: &["3d", "noise", "displacement", "sphere"],
    vertex_shader: r#"
attribute vec3 a_position;
attribute vec3 a_normal;
attribute vec2 a_uv;

uniform mat4 u_modelMatrix;
uniform mat4 u_viewMatrix;
uniform mat4 u_projectionMatrix;
uniform float u_time;

varying vec3 v_normal;
varying vec2 v_uv;
varying float v_displacement;

float hash(vec3 p) {
    return fract(sin(dot(p, vec3(127.1, 311.7, 74.7))) * 43758.5453);
}

float noise(vec3 p) {
    vec3 i = floor(p);
    vec3 f = fract(p);
    f = f * f * (3.0 - 2.0 * f);
    float a = mix(hash(i), hash(i + vec3(1.0, 0.0, 0.0)), f.x);
    float b = mix(hash(i + vec3(0.0, 1.0, 0.0)), hash(i + vec3(1.0, 1.0, 0.0)), f.x);
    float c = mix(hash(i + vec3(0.0, 0.0, 1.0)), hash(i + vec3(1.0, 0.0, 1.0)), f.x);
    float d = mix(hash(i + vec3(0.0, 1.0, 1.0)), hash(i + vec3(1.0, 1.0, 1.0)), f.x);
    return mix(mix(a, b, f.y), mix(c, d, f.y), f.z);
}

void main() {
    float n = noise(a_position * 1.5 + u_time * 0.4) * 0.6
            + noise(a_position * 3.0 - u_time * 0.7) * 0.3;
    v_displacement = n;
    v_uv = a_uv;
    v_normal = mat3(u_modelMatrix) * a_normal;

    vec3 pos = a_position + a_normal * (n - 0.45) * 0.5;
    gl_Position = u_projectionMatrix * u_viewMatrix * u_modelMatrix * vec4(pos, 1.0);
}"#,
    fragment_shader: r#"
precision mediump float;

varying vec3 v_normal;
varying vec2 v_uv;
varying float v_displacement;
uniform float u_time;

void main() {
    vec3 n = normalize(v_normal);
    float light = max(dot(n, normalize(vec3(1.0, 1.0, 2.0))), 0.0);
    vec3 low = vec3(0.1, 0.05, 0.3);
    vec3 high = vec3(1.0, 0.4, 0.6);
    vec3 color = mix(low, high, v_displacement);
    color += 0.05 * sin(v_uv.y * 40.0 + u_time);
    gl_FragColor = vec4(color * (0.25 + light), 1.0);
}"#,
    explanation: r#"
## Noise-Deformed Sphere

A sphere's normal is its position divided by the radius, so moving a vertex
along `a_normal` grows or shrinks the surface locally. Sampling smooth 3D
noise at the vertex position, and scrolling the sample point with `u_time`,
gives an organic, slowly boiling surface. The displacement is forwarded as a
varying and reused for colouring.
"#,
    setup: SceneSetup::Spatial {
        geometry: GeometryKind::Sphere,
        particle_count: None,
    },
};

pub(super) const PARTICLES_3D: ShaderExample = ShaderExample {
    id: "particles-3d",
    title: "GPU Particles",
    description: "Stateless particle motion replayed in the vertex stage, \
                  with a mouse-driven vortex.",
    level: ShaderLevel::Advanced,
    tags: &["3d", "particles", "gpu", "force field"],
    vertex_shader: r#"
attribute vec3 a_position;
attribute vec3 a_velocity;
attribute vec2 a_params;

uniform mat4 u_viewMatrix;
uniform mat4 u_projectionMatrix;
uniform float u_time;
uniform vec2 u_mouse;

varying vec3 v_color;
varying float v_alpha;

void main() {
    float lifetime = 4.0;
    float age = mod(u_time + a_params.x * lifetime, lifetime);
    float life = age / lifetime;

    vec3 center = vec3((u_mouse.x - 0.5) * 4.0, (u_mouse.y - 0.5) * 4.0, 0.0);
    vec3 offset = a_position - center;
    vec3 tangent = normalize(cross(offset, vec3(0.0, 1.0, 0.0)) + vec3(0.0001));
    vec3 swirl = tangent * 2.0 / (length(offset) + 0.5);

    vec3 accel = vec3(0.0, -0.5, 0.0) + swirl - a_position * 0.1;
    vec3 pos = a_position + (a_velocity + accel * age) * age * 0.25;

    v_color = mix(vec3(1.0, 0.8, 0.3), vec3(0.9, 0.2, 0.4), life);
    v_alpha = sin(life * 3.14159);

    gl_Position = u_projectionMatrix * u_viewMatrix * vec4(pos, 1.0);
    gl_PointSize = a_params.y * 6.0 * (1.0 - life * 0.5);
}"#,
    fragment_shader: r#"
precision mediump float;

varying vec3 v_color;
varying float v_alpha;

void main() {
    vec2 c = gl_PointCoord - 0.5;
    float d = length(c);
    if (d > 0.5) discard;
    gl_FragColor = vec4(v_color, v_alpha * smoothstep(0.5, 0.1, d));
}"#,
    explanation: r#"
## GPU Particles

Particle start state (position, velocity, phase, size) is uploaded once and
never changes. Each frame the vertex shader computes a particle's age from
`u_time` and its phase, then evaluates the closed-form motion for that age:
gravity, a pull back to the centre and a vortex around the mouse.

Because nothing is integrated on the CPU, every frame is a pure function of
time, and thousands of particles cost one draw call of `POINTS`.
"#,
    setup: SceneSetup::Spatial {
        geometry: GeometryKind::Particles,
        particle_count: Some(2000),
    },
};
