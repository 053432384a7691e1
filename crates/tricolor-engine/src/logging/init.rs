use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tricolor_engine=debug,wgpu=warn"). On wasm32 only its default level is
/// honored.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    #[cfg(not(target_arch = "wasm32"))]
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            #[cfg(not(target_arch = "wasm32"))]
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        // wgpu is chatty at info.
        builder
            .filter_level(config.default_level)
            .filter_module("wgpu_core", log::LevelFilter::Warn)
            .filter_module("wgpu_hal", log::LevelFilter::Warn);
    }

    builder.write_style(config.write_style);

    // Another logger may already be installed by the host; keep it.
    if builder.try_init().is_err() {
        log::debug!("global logger already set; keeping existing one");
    }
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    console_error_panic_hook::set_once();

    let level = config.default_level.to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_err() {
        log::debug!("global logger already set; keeping existing one");
    }
}
