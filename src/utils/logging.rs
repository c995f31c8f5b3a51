//! Diagnostic logging setup.
//!
//! The chat interface owns the terminal, so diagnostics can only go to a file
//! while it runs. One-shot commands log to stderr instead.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV_VAR: &str = "EVENTSYNC_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Discard,
}

impl LogTarget {
    /// Pick where diagnostics go for a run.
    pub fn resolve(debug_log: Option<PathBuf>, interactive: bool) -> Self {
        match debug_log {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. `Discard` installs nothing, which drops
/// every event.
pub fn init_tracing(target: &LogTarget) -> Result<(), Box<dyn Error>> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| -> Box<dyn Error> { e })?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| -> Box<dyn Error> { e })?;
        }
        LogTarget::Discard => {}
    }
    Ok(())
}
