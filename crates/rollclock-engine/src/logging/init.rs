use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`.
/// Filters follow `env_logger` syntax (e.g. "info,rollclock_core=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    /// Caps wgpu / naga output at `warn` unless a filter names them.
    pub quiet_gpu: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            quiet_gpu: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

const GPU_MODULES: [&str; 4] = ["wgpu_core", "wgpu_hal", "wgpu", "naga"];

static INIT: Once = Once::new();

/// Initializes the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.default_level);

        if config.quiet_gpu {
            for module in GPU_MODULES {
                builder.filter_module(module, LevelFilter::Warn);
            }
        }

        // Parsed last so explicit directives override the defaults above.
        let filter = config.env_filter.or_else(|| std::env::var("RUST_LOG").ok());
        if let Some(filter) = filter {
            builder.parse_filters(&filter);
        }

        builder.write_style(config.write_style);
        builder.format_timestamp_millis();

        if builder.try_init().is_err() {
            // Another logger was installed first (e.g. by a test harness).
            return;
        }
        log::debug!("logging initialized");
    });
}
