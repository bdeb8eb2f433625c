//! Tracing setup.
//!
//! The TUI owns stdout, so logging is off unless `COLOR_GUESS_LOG` names
//! a file. `RUST_LOG` filters as usual (default `info`).

use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "COLOR_GUESS_LOG";

/// Log file path from the environment, if set and non-empty.
pub fn log_path() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Initialize file logging if `COLOR_GUESS_LOG` is set.
///
/// Failure to create the file is reported on stderr and logging stays off.
pub fn init_tracing() {
    let Some(path) = log_path() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

// ============================================================================
// TESTS
// ============================================================================
