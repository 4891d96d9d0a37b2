//! Console Logger
//!
//! Routes `log` records (emitted by quotation-core) to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        match record.level() {
            Level::Error => { leptos::logging::error!("{}", line); }
            Level::Warn => { leptos::logging::warn!("{}", line); }
            _ => { leptos::logging::log!("{}", line); }
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. A second call keeps the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("quotation_core::submit")
                .args(format_args!("submission blocked: {} field(s)", 2))
                .build(),
        );
        assert_eq!(line, "[WARN] quotation_core::submit: submission blocked: 2 field(s)");
    }

    #[test]
    fn test_respects_max_level() {
        init(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!LOGGER.enabled(&debug));
        assert!(LOGGER.enabled(&warn));

        // Each level is routed without panicking
        for level in [Level::Error, Level::Warn, Level::Info] {
            LOGGER.log(&Record::builder().level(level).args(format_args!("routed")).build());
        }
    }
}
