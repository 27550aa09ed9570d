use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How log lines are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One short human-readable line per event.
    #[default]
    Compact,
    /// JSON lines, for hosts that ship logs to a collector.
    Json,
}

impl LogFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Directive used when `RUST_LOG` is unset. Verbose turns on this crate's
/// debug events (selection, catalog entries, refresh ticks).
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "office_directory=debug,info"
    } else {
        "office_directory=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Installs the global subscriber. Call once, before the catalog is loaded.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let fmt = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(fmt.compact()).init(),
        LogFormat::Json => registry.with(fmt.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false), "office_directory=info");
        assert_eq!(default_filter(true), "office_directory=debug,info");
        for verbose in [false, true] {
            assert!(default_filter(verbose).parse::<EnvFilter>().is_ok());
        }
    }

    #[test]
    fn test_log_format_from_flag() {
        assert_eq!(LogFormat::from_flag(true), LogFormat::Json);
        assert_eq!(LogFormat::from_flag(false), LogFormat::Compact);
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
