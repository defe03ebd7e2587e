use shaderlab_engine::scene::GeometryKind;

use crate::ShaderLevel;

/// How an example is put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneSetup {
    /// Full-screen quad; `uniforms` are the names written each frame.
    Flat { uniforms: &'static [&'static str] },
    /// 3D body with the fixed scene uniform set.
    Spatial {
        geometry: GeometryKind,
        /// Only meaningful for particle bodies.
        particle_count: Option<usize>,
    },
}

/// One gallery entry.
///
/// The renderer only reads the two sources and `setup`; the rest is
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderExample {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: ShaderLevel,
    pub tags: &'static [&'static str],
    pub vertex_shader: &'static str,
    pub fragment_shader: &'static str,
    /// Markdown.
    pub explanation: &'static str,
    pub setup: SceneSetup,
}

/// Trims leading and trailing blank space from shader source for display.
/// Inner indentation is kept.
pub fn format_shader_code(code: &str) -> &str {
    code.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_keeps_inner_indentation() {
        let src = "\n\nvoid main() {\n    gl_FragColor = vec4(1.0);\n}\n  \n";
        assert_eq!(format_shader_code(src), "void main() {\n    gl_FragColor = vec4(1.0);\n}");
    }
}
