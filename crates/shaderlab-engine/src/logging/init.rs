use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "shaderlab_engine=debug") and only applies natively. `level` is the
/// fallback when no filter is given and `RUST_LOG` is unset, and the only
/// knob on wasm32, where records go to the browser console.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub level: log::Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: log::Level::Info,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. A logger installed by someone
/// else first is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if install(config).is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.level.to_level_filter());
    }

    builder.try_init()
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) -> Result<(), log::SetLoggerError> {
    console_log::init_with_level(config.level)
}
