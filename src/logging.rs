#![cfg(feature = "std")]
//! Minimal stderr logger for the terminal binaries.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `BROADSIDE_LOG=debug`.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Output goes to stderr so stdout stays free for the game and JSON.
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, or `warn` when unset or unrecognised.
pub(crate) fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger with the level from [`LOG_ENV`]. Calling it twice is
/// harmless; the first logger stays.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
