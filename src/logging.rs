//! Log output.
//!
//! Everything in the crate logs through the `log` facade. In the browser the
//! records go to the devtools console; natively the CLI installs a
//! `tracing-subscriber` formatter filtered by `GLYPHGRID_LOG`.

#[cfg(target_arch = "wasm32")]
pub use console::init;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{env_filter, init_cli, LOG_ENV};

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record<'_>) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!(
                "[glyphgrid {}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            ));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    /// Install the console logger (once) and set the maximum level.
    ///
    /// Later calls only change the level.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_err() {
            log::trace!("logger already installed");
        }
        log::set_max_level(level);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use tracing_subscriber::filter::{EnvFilter, LevelFilter};

    /// Environment variable holding the filter directives (`debug`,
    /// `glyphgrid::editor=trace`, ...).
    pub const LOG_ENV: &str = "GLYPHGRID_LOG";

    /// Filter from `GLYPHGRID_LOG`, falling back to `default` when unset.
    /// Invalid directives are ignored.
    pub fn env_filter(default: LevelFilter) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(default.into())
            .with_env_var(LOG_ENV)
            .from_env_lossy()
    }

    /// Install a stderr formatter for `log` records. No-op if a global
    /// subscriber is already set.
    pub fn init_cli(default: LevelFilter) {
        let installed = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .without_time()
            .with_env_filter(env_filter(default))
            .try_init();
        if installed.is_err() {
            log::debug!("subscriber already installed");
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn default_level_applies_without_env() {
            if std::env::var_os(LOG_ENV).is_some() {
                return;
            }
            assert_eq!(env_filter(LevelFilter::DEBUG).max_level_hint(), Some(LevelFilter::DEBUG));
            assert_eq!(env_filter(LevelFilter::WARN).max_level_hint(), Some(LevelFilter::WARN));
        }
    }
}
