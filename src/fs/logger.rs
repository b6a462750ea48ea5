//! File-based logger implementation for the V5 Brain.
//!
//! This module implements the [`log`] crate's logging facade, writing log
//! messages to both the console (terminal/debug output) and a file on the
//! V5 Brain's SD card.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```ignore
//! use everybot::fs::logger;
//! use log::{info, LevelFilter};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Info).expect("Logger init failed");
//!     info!("Program started");
//! }
//! ```
//!
//! # Log Output
//!
//! Each line carries the level, time since program start, target and
//! message:
//!
//! ```text
//! INFO [2m 5s 123ms] everybot::robot - Auto selected: cone and mobility
//! WARN [2m 5s 456ms] everybot::opcontrol::controller - Controller State Error: Disconnected
//! ```

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Where and how the logger writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// File the log is written to. Truncated when the logger starts.
    pub path:    String,
    /// Whether lines are also printed to the console.
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path:    "log.txt".to_owned(),
            console: true,
        }
    }
}

/// A dual-output logger.
///
/// Writes log messages to the console and to a file. If the file can't be
/// opened (e.g., no SD card present) only the console is used.
pub struct RobotLogger {
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
    console:     bool,
    level:       LevelFilter,
}

impl RobotLogger {
    fn new(config: &LoggerConfig, level: LevelFilter) -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&config.path)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
            console:     config.console,
            level,
        }
    }

}

impl log::Log for RobotLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= self.level }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record, uptime());
        if self.console {
            print!("{}", line);
        }
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<RobotLogger> = OnceLock::new();

/// Level the robot program logs at. Telemetry records pass it.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Initializes the logger with the default [`LoggerConfig`].
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with(&LoggerConfig::default(), level)
}

/// Initializes the logger.
///
/// This function must be called once before any logging macros are used.
/// Messages below `level` are dropped. Only the first call's `config` takes
/// effect.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init_with(config: &LoggerConfig, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RobotLogger::new(config, level));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one record as a log line, newline included.
fn format_line(record: &Record, uptime: Duration) -> String {
    format!(
        "{} [{}] {} - {}\n",
        record.level(),
        format_duration(uptime),
        record.target(),
        record.args()
    )
}

/// Time since the user program started, truncated to milliseconds.
///
/// Off the brain (in tests) there is no program clock, so zero is used.
fn uptime() -> Duration {
    let dur = if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::ZERO
    };
    Duration::from_millis(dur.as_millis() as u64)
}
