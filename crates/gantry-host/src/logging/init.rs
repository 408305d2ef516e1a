use std::sync::Once;

/// Logger configuration.
///
/// `filter` uses `env_logger` directive syntax, e.g. `"info"` or
/// `"gantry_host=debug,wgpu_core=warn"`. When unset, `RUST_LOG` is honored,
/// then a conservative default applies.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

static INSTALL: Once = Once::new();

/// Installs the global logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init_logging(config: LoggingConfig) {
    INSTALL.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // Default: host at info, GPU internals only when they complain.
            builder.filter_level(log::LevelFilter::Info);
            builder.filter_module("wgpu_core", log::LevelFilter::Warn);
            builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
            builder.filter_module("naga", log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging installed");
    });
}
