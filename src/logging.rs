//! `env_logger` setup for the demo binary.
//!
//! Library code only uses the `log` macros; nothing is printed until a
//! binary calls [`init_logging`].

use std::sync::OnceLock;

use log::LevelFilter;

/// Module whose `trace!` output is the step-by-step clipping log.
pub const CLIP_TRACE_TARGET: &str = "rasterlab::clip";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for everything without a more specific directive.
    pub level: LevelFilter,
    /// Show each Cohen–Sutherland iteration (outcodes and intersections).
    pub clip_trace: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            clip_trace: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter in `env_logger` directive syntax, e.g.
    /// `info,rasterlab::clip=trace`.
    pub fn directives(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        if self.clip_trace {
            format!("{level},{CLIP_TRACE_TARGET}=trace")
        } else {
            level
        }
    }
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the global logger. `RUST_LOG` directives are applied after the
/// configured ones and win on conflicts.
///
/// Returns whether a logger from this crate is active. Only the first call
/// does any work; `false` means another logger was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&config.directives())
            .write_style(config.write_style);
        if let Ok(env) = std::env::var("RUST_LOG") {
            builder.parse_filters(&env);
        }

        let installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logger installed with {:?}", config.directives());
        }
        installed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_follow_config() {
        assert_eq!(LoggingConfig::default().directives(), "info");

        let config = LoggingConfig {
            level: LevelFilter::Warn,
            clip_trace: true,
            ..Default::default()
        };
        assert_eq!(config.directives(), "warn,rasterlab::clip=trace");
    }

    #[test]
    fn repeated_init_reports_first_outcome() {
        let first = init_logging(&LoggingConfig::default());
        let second = init_logging(&LoggingConfig {
            clip_trace: true,
            ..Default::default()
        });
        assert_eq!(first, second);
    }
}
