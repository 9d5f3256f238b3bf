//! Logging setup for the popup-geo binaries.
//!
//! Installs a global `tracing` subscriber with:
//! - a file layer writing to the configured log file (truncated per session)
//! - an optional console layer on stderr, leaving stdout to command output
//! - an `EnvFilter` read from `RUST_LOG`, defaulting to `info` (or `debug`
//!   when requested)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking file writer alive. Dropping it flushes the log.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Filter used when `RUST_LOG` is unset or invalid.
fn default_directive(debug: bool) -> &'static str {
    if debug {
        "popup_geo=debug,popup_geo_cli=debug,info"
    } else {
        "info"
    }
}

/// Build the env filter. `RUST_LOG` wins over the `debug` flag.
pub fn build_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

/// Initialize logging.
///
/// Creates `log_dir` if needed and truncates `log_file` inside it.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or if a
/// global subscriber is already installed.
pub fn init_logging(
    log_dir: &Path,
    log_file: &str,
    stdout_enabled: bool,
    debug: bool,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = stdout_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .compact()
    });

    tracing_subscriber::registry()
        .with(build_filter(debug))
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Default log file name.
pub fn default_log_file() -> &'static str {
    "popup-geo.log"
}

/// Split a configured log path into the directory and file name expected by
/// [`init_logging`]. A bare file name logs into the current directory.
pub fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| default_log_file().to_string());
    (dir, file)
}
