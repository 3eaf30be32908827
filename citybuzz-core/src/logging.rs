//! Structured logging setup.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::{LocalTime, UtcTime};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "citybuzz.log";

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LoggingDestination {
    /// JSON lines under `<dir>/logs/` plus human-readable stderr.
    FileAndStderr(PathBuf),
    /// Human-readable stderr only.
    StderrOnly,
}

#[derive(Debug)]
struct LoggingGuards {
    _guard: Option<WorkerGuard>,
    log_path: Option<PathBuf>,
}

static LOGGING_STATE: OnceLock<LoggingGuards> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to prepare log directory: {0}")]
    Io(#[from] io::Error),
    #[error("invalid logging filter: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber.
///
/// `default_filter` is used when neither `CITYBUZZ_LOG` nor `RUST_LOG` is
/// set. The first call wins; later calls return the log file path chosen
/// by the first.
pub fn init_logging(
    destination: LoggingDestination,
    default_filter: Option<&str>,
) -> Result<Option<&'static PathBuf>, LoggingError> {
    if LOGGING_STATE.get().is_none() {
        let guards = install_logging(destination, default_filter)?;
        if let Err(guards) = LOGGING_STATE.set(guards) {
            drop(guards);
        }
    }

    Ok(current_log_path())
}

pub fn current_log_path() -> Option<&'static PathBuf> {
    LOGGING_STATE
        .get()
        .and_then(|guards| guards.log_path.as_ref())
}

fn install_logging(
    destination: LoggingDestination,
    default_filter: Option<&str>,
) -> Result<LoggingGuards, LoggingError> {
    let filter = build_filter(default_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let (file_layer, guard, log_path) = match destination {
        LoggingDestination::FileAndStderr(data_dir) => {
            let dir = data_dir.join("logs");
            fs::create_dir_all(&dir)?;
            let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
            let (writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .event_format(
                    tracing_subscriber::fmt::format()
                        .json()
                        .with_timer(UtcTime::rfc_3339())
                        .with_level(true)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(worker_guard), Some(dir.join(LOG_FILE)))
        }
        LoggingDestination::StderrOnly => (None, None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_timer(LocalTime::rfc_3339())
                .with_level(true)
                .with_target(true)
                .with_ansi(false),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .boxed();

    registry.with(file_layer).with(stderr_layer).try_init()?;

    if let Some(path) = log_path.as_ref() {
        info!(path = %path.display(), "Structured logging enabled");
    }

    Ok(LoggingGuards {
        _guard: guard,
        log_path,
    })
}

fn build_filter(default_filter: Option<&str>) -> Result<EnvFilter, ParseError> {
    if let Ok(spec) = env::var("CITYBUZZ_LOG") {
        if !spec.trim().is_empty() {
            return EnvFilter::try_new(spec);
        }
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter.unwrap_or("info")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_target_directives() {
        assert!(build_filter(Some("citybuzz_core=debug,warn")).is_ok());
    }

    #[test]
    fn test_stderr_only_has_no_log_file() {
        let path = init_logging(LoggingDestination::StderrOnly, Some("warn")).unwrap();
        assert!(path.is_none());
        assert!(current_log_path().is_none());
    }
}
