//! Log output setup.
//!
//! Logs always go to stderr, since stdout carries MCP traffic. When a log
//! file is configured, the same events are also appended to it.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Plain-text formatting layer writing to `file`.
pub fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fmt::layer().with_ansi(false).with_writer(Mutex::new(file))
}

/// Install the global subscriber.
///
/// Stderr logging is installed even when the log file cannot be opened; that
/// error is returned so the caller can report it through the new subscriber.
pub fn init(log_level: &str, log_file: Option<&Path>) -> io::Result<()> {
    let (file, file_error) = match log_file.map(open_log_file).transpose() {
        Ok(file) => (file, None),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(file.map(file_layer::<Registry>))
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter(log_level))
        .init();

    file_error.map_or(Ok(()), Err)
}
