// Logging module - tracing subscriber setup
//
// The keyboard view owns the terminal for the whole session, so log output
// can never go to stdout/stderr without garbling the display. Diagnostics are
// written as JSON lines to a rolling file when file logging is enabled and
// dropped otherwise.
//
// Precedence for the filter: RUST_LOG env var > config file > default "info"

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when RUST_LOG is unset
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("keyscope={}", config.level)
}

/// Install the global subscriber.
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered log lines are flushed on exit.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        return None;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(config).into());

    let file_appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    };

    // Wrap in non-blocking writer (writes happen in background thread)
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_scopes_to_crate() {
        let mut config = LoggingConfig::default();
        assert_eq!(default_directive(&config), "keyscope=info");

        config.level = "trace".to_string();
        assert_eq!(default_directive(&config), "keyscope=trace");
    }

    #[test]
    fn disabled_file_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(!config.file_enabled);
        assert!(init(&config).is_none());
    }
}
