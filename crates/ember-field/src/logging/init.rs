use std::sync::Once;

use log::LevelFilter;

/// Crates whose verbosity `-v` raises; everything else stays at `default_level`.
const FIELD_CRATES: [&str; 2] = ["ember_field", "ember_studio"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "ember_field=debug,ember_studio=info"). When it is unset, `RUST_LOG` is
/// consulted, then `default_level` applies to every target.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Filter the logger ends up with once precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFilter {
    Directives(String),
    Level(LevelFilter),
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Maps a `-v` count onto the field crates: 0 keeps the default,
    /// 1 is `debug`, 2 or more is `trace`. Other targets stay at `info`.
    pub fn verbose(count: u8) -> Self {
        let level = match count {
            0 => return Self::default(),
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        let directives = FIELD_CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect::<Vec<_>>()
            .join(",");
        Self::with_filter(format!("{},{directives}", LevelFilter::Info))
    }

    /// Explicit filter, then `rust_log`, then `default_level`.
    pub fn resolve(&self, rust_log: Option<String>) -> ResolvedFilter {
        match (&self.env_filter, rust_log) {
            (Some(filter), _) => ResolvedFilter::Directives(filter.clone()),
            (None, Some(env)) if !env.trim().is_empty() => ResolvedFilter::Directives(env),
            _ => ResolvedFilter::Level(self.default_level),
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored, so tests and binaries may both call it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let resolved = config.resolve(std::env::var("RUST_LOG").ok());
        match &resolved {
            ResolvedFilter::Directives(filter) => builder.parse_filters(filter),
            ResolvedFilter::Level(level) => builder.filter_level(*level),
        };

        builder.write_style(config.write_style).format_timestamp_millis();

        // A test harness may already own the global logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with {resolved:?}");
    });
}
