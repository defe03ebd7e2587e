use crate::{SceneSetup, ShaderExample, ShaderLevel};

use super::flat::QUAD_UV_VS;

pub(super) const ANIMATED_WAVE: ShaderExample = ShaderExample {
    id: "animated-wave",
    title: "Animated Wave",
    description: "Two travelling sine waves driven by `u_time`.",
    level: ShaderLevel::Intermediate,
    tags: &["sin", "animation", "u_time"],
    vertex_shader: QUAD_UV_VS,
    fragment_shader: r#"
precision mediump float;
varying vec2 v_uv;
uniform float u_time;

void main() {
    float a = sin(v_uv.x * 10.0 + u_time * 2.0) * 0.5 + 0.5;
    float b = sin(v_uv.x * 15.0 - u_time * 3.0) * 0.5 + 0.5;
    float crest = (a + b) * 0.5 * 0.3 + 0.35;

    vec3 water = mix(vec3(0.0, 0.96, 0.88), vec3(0.0, 0.62, 0.85), v_uv.y);
    vec3 sky = vec3(0.02, 0.02, 0.05);
    gl_FragColor = vec4(mix(sky, water, step(v_uv.y, crest)), 1.0);
}"#,
    explanation: r#"
## Animated Wave

`u_time` is the number of seconds since the preview started. Adding it to the
phase of a sine makes the wave travel; subtracting it makes a second wave move
the other way. Their average is the crest height, and `step(y, crest)` turns
"below the crest" into a 0/1 mask used to pick between water and sky.
"#,
    setup: SceneSetup::Flat {
        uniforms: &["u_time"],
    },
};
