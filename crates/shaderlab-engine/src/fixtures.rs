//! GLSL sources shared by the unit tests.

pub const MESH_VS: &str = "
attribute vec3 a_position;
attribute vec3 a_normal;
attribute vec2 a_uv;
uniform mat4 u_modelViewProjection;
uniform mat4 u_modelMatrix;
uniform mat4 u_viewMatrix;
uniform mat4 u_projectionMatrix;
varying vec3 v_normal;
varying vec2 v_uv;
void main() {
    v_normal = (u_modelMatrix * vec4(a_normal, 0.0)).xyz;
    v_uv = a_uv;
    gl_Position = u_modelViewProjection * vec4(a_position, 1.0);
}";

pub const MESH_FS: &str = "
precision mediump float;
uniform float u_time;
uniform vec2 u_resolution;
uniform vec2 u_mouse;
varying vec3 v_normal;
varying vec2 v_uv;
void main() {
    vec2 st = gl_FragCoord.xy / u_resolution;
    gl_FragColor = vec4(v_uv * st, abs(v_normal.z) + 0.1 * sin(u_time) + u_mouse.x * 0.0, 1.0);
}";

pub const PARTICLE_VS: &str = "
attribute vec3 a_position;
attribute vec3 a_velocity;
attribute vec2 a_params;
uniform mat4 u_modelViewProjection;
uniform float u_time;
void main() {
    float life = fract(u_time * 0.2 + a_params.x);
    gl_Position = u_modelViewProjection * vec4(a_position + a_velocity * life, 1.0);
    gl_PointSize = 4.0 * a_params.y;
}";

pub const PARTICLE_FS: &str = "
precision mediump float;
void main() { gl_FragColor = vec4(1.0, 0.6, 0.2, 0.8); }";

pub const FLAT_VS: &str = "
attribute vec2 a_position;
void main() { gl_Position = vec4(a_position, 0.0, 1.0); }";

pub const FLAT_FS: &str = "
precision mediump float;
uniform float u_time;
uniform vec2 u_resolution;
void main() {
    vec2 st = gl_FragCoord.xy / u_resolution;
    gl_FragColor = vec4(st, 0.5 + 0.5 * sin(u_time), 1.0);
}";
