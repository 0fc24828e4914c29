//! `log` backend writing to the browser console.
//!
//! The engine logs through the `log` facade; this routes those records to
//! `console.error`/`warn`/`log` so they show up in the developer tools.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Default maximum level for the browser build.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

/// Console logger.
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    /// Create a logger passing records up to `level`.
    #[must_use]
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(DEFAULT_LEVEL);

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info | Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Render a record as one console line.
fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Install the console logger. Later calls are ignored.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOGGER.level);
    }
}
