//! Logging setup for crawlkit.
//!
//! Library crates only emit `tracing` events; this module installs a
//! subscriber for applications that do not bring their own.
//!
//! # Environment Variables
//!
//! - `CRAWLKIT_DEBUG=true|1|yes` - Enable debug logging
//! - `CRAWLKIT_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `CRAWLKIT_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! // Initialize logging once at startup
//! crawlkit::logging::init();
//! ```

use std::sync::Once;

use crawlkit_settings::Environment;

static INIT: Once = Once::new();

/// Variable enabling debug logging.
pub const DEBUG_VAR: &str = "CRAWLKIT_DEBUG";
/// Variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "CRAWLKIT_LOG_LEVEL";
/// Variable selecting the output format.
pub const LOG_FORMAT_VAR: &str = "CRAWLKIT_LOG_FORMAT";

/// Check if debug logging is enabled.
///
/// Returns `true` if `CRAWLKIT_DEBUG` is "true", "1", or "yes" (case-insensitive).
pub fn is_debug_enabled(env: &Environment) -> bool {
    env.get(DEBUG_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level.
///
/// Defaults to "debug" if debug logging is enabled, otherwise "warn".
pub fn log_level(env: &Environment) -> &'static str {
    let fallback = if is_debug_enabled(env) { "debug" } else { "warn" };

    match env.get(LOG_LEVEL_VAR).map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

/// Get the configured log format. Defaults to "json".
pub fn log_format(env: &Environment) -> &'static str {
    env.get(LOG_FORMAT_VAR)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging from the process environment.
///
/// Subsequent calls are no-ops.
pub fn init() {
    init_with(&Environment::from_process());
}

/// Initialize logging from an explicit environment snapshot.
///
/// Nothing is installed unless debug logging or a level is requested, or
/// when another global subscriber is already set.
pub fn init_with(env: &Environment) {
    INIT.call_once(|| {
        if !is_debug_enabled(env) && env.get(LOG_LEVEL_VAR).is_none() {
            return;
        }

        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let level = log_level(env);
        let format = log_format(env);
        let filter = EnvFilter::try_new(format!(
            "crawlkit={},crawlkit_settings={},crawlkit_mongo={},crawlkit_useragent={}",
            level, level, level, level
        ))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

        let installed = match format {
            "json" => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .try_init(),
            "compact" => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact())
                .try_init(),
            _ => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty())
                .try_init(),
        };

        if installed.is_ok() {
            tracing::info!(level = level, format = format, "crawlkit logging initialized");
        }
    });
}
