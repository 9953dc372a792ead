use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Forwards `log` records to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    // module path without the crate prefix reads better in devtools
    let component = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}: {}", level, component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_keeps_only_the_last_path_segment() {
        let line = format_line(Level::Warn, "finanwise_frontend::storage", "corrupt value");
        assert_eq!(line, "[WARN] storage: corrupt value");
    }

    #[test]
    fn line_with_plain_target() {
        let line = format_line(Level::Info, "app", "started");
        assert_eq!(line, "[INFO] app: started");
    }
}
