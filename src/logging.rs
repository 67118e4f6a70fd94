//! Logger setup. Everything else logs through the `log` facade.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax (e.g. "debug",
/// "render_shell=trace"). When unset, `RUST_LOG` is consulted, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.write_style(config.write_style);

        // A test harness may already have installed a logger
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
