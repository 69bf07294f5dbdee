use log::{LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

pub fn wasm_logf(args: std::fmt::Arguments) {
    log(&args.to_string());
}

/// Forwards `log` records to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            wasm_logf(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. A second call keeps the first logger and only moves the level.
pub fn install(level: LevelFilter) {
    // Err only means a logger is already installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

pub fn parse_level(token: Option<&str>) -> LevelFilter {
    token
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}
