use super::ShaderStage;

/// Why a scene or flat program could not be initialized.
///
/// Every variant is fatal to initialization and has already been logged at
/// the point of failure. No partially built context survives one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("graphics context unavailable for canvas")]
    ContextUnavailable,

    #[error("failed to create {stage} shader object: {reason}")]
    ShaderCreation { stage: ShaderStage, reason: String },

    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("failed to create program object: {0}")]
    ProgramCreation(String),

    #[error("program failed to link: {log}")]
    Link { log: String },

    #[error("failed to create buffer: {0}")]
    BufferCreation(String),
}
