/// Pass-through vertex stage shared by flat examples that need `v_uv`.
pub(super) const QUAD_UV_VS: &str = r#"
attribute vec2 a_position;
varying vec2 v_uv;

void main() {
    // clip space [-1, 1] -> uv [0, 1]
    v_uv = a_position * 0.5 + 0.5;
    gl_Position = vec4(a_position, 0.0, 1.0);
}"#;
