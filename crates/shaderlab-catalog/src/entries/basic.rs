use crate::{SceneSetup, ShaderExample, ShaderLevel};

use super::flat::QUAD_UV_VS;

pub(super) const SOLID_COLOR: ShaderExample = ShaderExample {
    id: "solid-color",
    title: "Solid Color",
    description: "The smallest possible shader: every fragment gets the same colour.",
    level: ShaderLevel::Basic,
    tags: &["intro", "gl_FragColor", "vec4"],
    vertex_shader: r#"
attribute vec2 a_position;

void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}"#,
    fragment_shader: r#"
precision mediump float;

void main() {
    gl_FragColor = vec4(0.0, 0.96, 0.88, 1.0);
}"#,
    explanation: r#"
## Solid Color

A WebGL program is two small GPU functions:

1. the **vertex shader** places each vertex in clip space
2. the **fragment shader** picks a colour for each covered pixel

Here the vertex shader forwards the quad's 2D corner as `vec4(x, y, 0, 1)` and
the fragment shader writes a constant to `gl_FragColor`. Colour channels are
floats in `[0, 1]`, not bytes.
"#,
    setup: SceneSetup::Flat { uniforms: &[] },
};

pub(super) const LINEAR_GRADIENT: ShaderExample = ShaderExample {
    id: "linear-gradient",
    title: "Linear Gradient",
    description: "Blend two colours across the screen using interpolated UV coordinates.",
    level: ShaderLevel::Basic,
    tags: &["uv", "varying", "mix"],
    vertex_shader: QUAD_UV_VS,
    fragment_shader: r#"
precision mediump float;
varying vec2 v_uv;

void main() {
    vec3 cyan = vec3(0.0, 0.96, 0.88);
    vec3 violet = vec3(0.616, 0.306, 0.867);
    gl_FragColor = vec4(mix(cyan, violet, v_uv.x), 1.0);
}"#,
    explanation: r#"
## Linear Gradient

`v_uv` is a **varying**: written per vertex, interpolated across the triangle
and read per fragment. Mapping the quad from `[-1, 1]` to `[0, 1]` gives a
horizontal coordinate that runs from 0 on the left edge to 1 on the right.

`mix(a, b, t)` is `a * (1 - t) + b * t`, so feeding it `v_uv.x` produces the
gradient.
"#,
    setup: SceneSetup::Flat { uniforms: &[] },
};
