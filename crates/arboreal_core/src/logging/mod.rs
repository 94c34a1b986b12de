//! Logging policy shared by every host.
//!
//! # Responsibility
//! - Normalize level names and sanitize free-form payloads before logging.
//! - Boot rolling file logs for native hosts (`file` module).
//!
//! # Invariants
//! - Log lines are `event=... module=... status=...` key/value records.
//! - Panic payloads are flattened to one line and capped before logging.
//!
//! Browser hosts install their own `log` backend and reuse the helpers here.

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::{init_logging, logging_status};

use log::LevelFilter;

/// Diagnostic line written once the controller is attached.
pub const STARTUP_BANNER: &str = "🌳 Arboreal - Making giving effortless";

/// Upper bound for panic payload text in log records.
pub const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

/// Default level for the current build mode: `debug` or `info`.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Maps a user-supplied level name onto its canonical spelling.
///
/// # Errors
/// Returns a message naming the accepted values for anything else.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Same as [`normalize_level`], as a `log` filter.
pub fn level_filter(level: &str) -> Result<LevelFilter, String> {
    Ok(match normalize_level(level)? {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    })
}

/// Flattens newlines and truncates to `max_chars`, marking truncation.
pub fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut capped: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}

/// One-line summary of a panic payload, safe to log.
pub fn panic_payload_summary(payload: &(dyn std::any::Any + Send)) -> String {
    let text = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    sanitize_message(&text, MAX_PANIC_PAYLOAD_CHARS)
}
