use crate::config::LogLevel;

/// Route `log` records to the browser console and install the panic hook.
pub fn install(level: LogLevel) {
    match level.as_level() {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level)),
        None => log::set_max_level(log::LevelFilter::Off),
    }

    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
