use crate::{SceneSetup, ShaderExample, ShaderLevel};

pub(super) const COORDINATE_SPACES: ShaderExample = ShaderExample {
    id: "coordinate-spaces",
    title: "Coordinate Spaces",
    description: "Pixel, normalized and aspect-corrected coordinates side by side.",
    level: ShaderLevel::Intermediate,
    tags: &["tutorial", "gl_FragCoord", "u_resolution", "aspect ratio"],
    vertex_shader: r#"
attribute vec2 a_position;

void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}"#,
    fragment_shader: r#"
precision mediump float;
uniform float u_time;
uniform vec2 u_resolution;

float grid(vec2 p, float spacing) {
    vec2 g = abs(fract(p / spacing - 0.5) - 0.5) * spacing;
    return 1.0 - smoothstep(0.0, 0.02, min(g.x, g.y));
}

void main() {
    // window space, pixels from the bottom-left corner
    vec2 frag = gl_FragCoord.xy;
    // normalized [0, 1]
    vec2 st = frag / u_resolution;
    // centred, aspect-corrected; y spans [-1, 1]
    vec2 p = (2.0 * frag - u_resolution) / u_resolution.y;

    vec3 color = vec3(st, 0.5 + 0.5 * sin(u_time));
    color = mix(color, vec3(1.0), grid(p, 0.25) * 0.35);

    float ring = abs(length(p) - 0.6 - 0.1 * sin(u_time * 2.0));
    color = mix(color, vec3(0.0, 0.96, 0.88), 1.0 - smoothstep(0.0, 0.015, ring));

    gl_FragColor = vec4(color, 1.0);
}"#,
    explanation: r#"
## Coordinate Spaces

A fragment shader sees the same pixel in several coordinate systems:

| space | expression | range |
|-------|------------|-------|
| window | `gl_FragCoord.xy` | `[0, width] × [0, height]` |
| normalized | `gl_FragCoord.xy / u_resolution` | `[0, 1]²` |
| centred | `(2.0 * frag - u_resolution) / u_resolution.y` | y in `[-1, 1]` |

Dividing by the height alone keeps circles round on a wide canvas. The grid
and ring are drawn in the centred space, the background in normalized space.
"#,
    setup: SceneSetup::Flat {
        uniforms: &["u_time", "u_resolution"],
    },
};
