//! Minimal stderr logger behind the `log` facade

use std::io::Write;
use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Writes `maze: <message>` lines to standard error
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Logger that accepts records up to `level`
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Format one record as a single line
    pub fn format(record: &Record<'_>) -> String {
        match record.level() {
            Level::Info => format!("maze: {}", record.args()),
            level => format!("maze: [{level}] {}", record.args()),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = Self::format(record);
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Map command-line verbosity to a level filter
///
/// Quiet keeps only errors; otherwise each `-v` raises the default info
/// level one step.
pub const fn level_for(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger
///
/// The logger is installed once per process; later calls only adjust the
/// maximum level.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| StderrLogger::new(LevelFilter::Trace));
    // A logger installed earlier in this process stays in place
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}
