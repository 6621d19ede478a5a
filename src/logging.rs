//! Tracing subscriber set-up.
//!
//! Logging is off by default because the TUI owns the terminal. It can be sent
//! to stderr (useful with the plain CLI commands) or appended to a file.

use std::fs::OpenOptions;
use std::io;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(String),
}

impl LogTarget {
    /// Interpret the `--log` argument: `off`/`0`, `stderr`/`2`, or a file path.
    pub fn parse(arg: &str) -> LogTarget {
        match arg {
            "" | "0" | "off" => LogTarget::Off,
            "2" | "stderr" => LogTarget::Stderr,
            path => LogTarget::File(path.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("logging already initialised: {0}")]
    Init(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Level directives: `RUST_LOG` when set and valid, else DEBUG when `verbose`
/// and INFO otherwise.
fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Install the global subscriber for `target`.
pub fn init(target: &LogTarget, verbose: bool) -> Result<(), LoggingError> {
    let filter = || build_filter(std::env::var("RUST_LOG").ok().as_deref(), verbose);
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::File { path: path.clone(), source })?;
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter())
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}
