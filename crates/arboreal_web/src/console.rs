//! Browser console backend for the `log` facade.
//!
//! # Invariants
//! - Installation happens at most once per page; repeated calls with the
//!   same level succeed, a different level is rejected.
//! - Panics are reported to `console.error` with a sanitized payload.

use arboreal_core::logging::{level_filter, panic_payload_summary};
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;
use web_sys::console;

static LOGGER: ConsoleLogger = ConsoleLogger;
static INSTALLED: OnceCell<LevelFilter> = OnceCell::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&console_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::debug_1(&line),
            Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Routes `log` records to the browser console at `level`.
///
/// # Errors
/// - `level` is not a known level name.
/// - Another logger owns the `log` facade.
/// - Console logging already runs at a different level.
pub fn init_console_logging(level: &str) -> Result<(), String> {
    let filter = level_filter(level)?;
    let active = INSTALLED.get_or_try_init(|| -> Result<LevelFilter, String> {
        log::set_logger(&LOGGER).map_err(|err| format!("console logger not installed: {err}"))?;
        log::set_max_level(filter);
        install_panic_hook();
        Ok(filter)
    })?;
    if *active != filter {
        return Err(format!(
            "console logging already runs at `{active}`; refusing to switch to `{filter}`"
        ));
    }
    Ok(())
}

fn console_line(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

fn install_panic_hook() {
    chain_panic_hook(|line| console::error_1(&JsValue::from_str(line)));
}

/// Reports every panic through `report`, then hands it to the previous hook.
fn chain_panic_hook(report: impl Fn(&str) + Send + Sync + 'static) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let line = format!(
            "event=panic_captured module=web status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info.payload())
        );
        report(&line);
        previous(panic_info);
    }));
}
