//! Logging bootstrap.
//!
//! The core only emits `tracing` events at `debug` and `trace` level; it
//! never logs errors, which are returned to the caller instead. Binaries
//! that want to see those events install a subscriber here.
//!
//! # Environment Variables
//!
//! - `TNSDESC_DEBUG=true|1|yes` - enable debug logging
//! - `TNSDESC_LOG_LEVEL=trace|debug|info|warn|error` - set the level
//! - `TNSDESC_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! ```rust,no_run
//! use tnsdesc_core::logging;
//!
//! // Reads the environment; a no-op unless logging was requested.
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check `TNSDESC_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("TNSDESC_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Normalize a level name, falling back to `None` for unknown names.
pub fn parse_level(level: &str) -> Option<&'static str> {
    let level = level.to_lowercase();
    LEVELS.into_iter().find(|l| *l == level)
}

/// Normalize a format name. Unknown names mean `json`.
pub fn parse_format(format: &str) -> &'static str {
    match format.to_lowercase().as_str() {
        "pretty" => "pretty",
        "compact" => "compact",
        _ => "json",
    }
}

/// Level from `TNSDESC_LOG_LEVEL`, else `debug` when `TNSDESC_DEBUG` is
/// set, else `warn`.
pub fn get_log_level() -> &'static str {
    env::var("TNSDESC_LOG_LEVEL")
        .ok()
        .and_then(|l| parse_level(&l))
        .unwrap_or(if is_debug_enabled() { "debug" } else { "warn" })
}

/// Format from `TNSDESC_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("TNSDESC_LOG_FORMAT")
        .map(|f| parse_format(&f))
        .unwrap_or("json")
}

/// Install a subscriber configured from the environment.
///
/// Does nothing unless `TNSDESC_DEBUG` or `TNSDESC_LOG_LEVEL` is set.
/// Subsequent calls, and calls after [`init_with`], are no-ops.
pub fn init() {
    if !is_debug_enabled() && env::var("TNSDESC_LOG_LEVEL").is_err() {
        return;
    }
    init_with(get_log_level(), get_log_format());
}

/// Install a subscriber with an explicit level and format. Events go to
/// stderr so they never mix with command output.
///
/// Only the first call in a process has an effect.
pub fn init_with(level: &str, format: &str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = parse_level(level).unwrap_or("warn");
            let filter = EnvFilter::try_new(format!(
                "tnsdesc={level},tnsdesc_core={level},tnsdesc_cli={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let format = parse_format(format);
            let registry = tracing_subscriber::registry().with(filter);
            let installed = match format {
                "json" => registry
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init(),
                "compact" => registry
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
                _ => registry
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level, format, "tnsdesc logging initialized");
            }
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            // Without the subscriber feature the host application owns
            // subscriber setup.
            let _ = (level, format);
        }
    });
}
