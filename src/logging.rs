//! Diagnostic logging.
//!
//! Events go to stderr through a reloadable level filter. The process starts
//! with logging off; the execution wrapper raises the level once the
//! configuration has been loaded.

use std::sync::OnceLock;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, fmt, reload};

static LEVEL_HANDLE: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

/// Install the global subscriber. Calling it more than once is harmless.
pub fn init() {
    let (filter, handle) = reload::Layer::new(LevelFilter::OFF);
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if installed.is_ok() {
        let _ = LEVEL_HANDLE.set(handle);
    }
}

pub fn set_level(level: LevelFilter) {
    if let Some(handle) = LEVEL_HANDLE.get()
        && let Err(e) = handle.modify(|filter| *filter = level)
    {
        eprintln!("Failed to apply log level {}: {}", level, e);
    }
}

/// Parse a level name as accepted in the environment.
///
/// `fatal` and `panic` have no tracing equivalent and map to `error`.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => None,
        "fatal" | "panic" => Some(LevelFilter::ERROR),
        "warning" => Some(LevelFilter::WARN),
        other => other.parse().ok(),
    }
}
