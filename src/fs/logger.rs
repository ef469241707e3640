//! File-based logger implementation for the V5 Brain.
//!
//! Implements the [`log`] crate's facade, mirroring every record to the
//! console (terminal/debug output) and to a file on the SD card.
//!
//! # Usage
//!
//! Initialize the logger once, before anything logs:
//!
//! ```ignore
//! use log::{LevelFilter, info, warn};
//! use talos::fs::logger;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Info).expect("Logger init failed");
//!
//!     info!("Program started");
//!     warn!("This is a warning");
//! }
//! ```
//!
//! # Log Output
//!
//! Records land in `log.txt` at the root of the SD card, one line each:
//! level, time since program start, originating module, message.
//!
//! ```text
//! INFO [1m 12s 40ms] talos::motion::encoder - drive 30.0" at 40% (859.4° of wheel rotation)
//! WARN [1m 13s 2ms] talos::drivetrain - Controller State Error: Disconnected
//! ```

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::{FormattedDuration, format_duration};
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Path of the log file on the SD card.
const LOG_PATH: &str = "log.txt";

/// Dual-output logger: console plus SD card.
///
/// The file is created (truncated) when the logger is initialized. With no
/// SD card inserted the file half is silently absent and only console
/// output remains.
pub struct FileLogger {
    /// Buffered writer for the log file, `None` if the file could not be
    /// opened.
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl FileLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_PATH)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!(
                "{} [{}] {} - {}\n",
                record.level(),
                uptime(),
                record.target(),
                record.args()
            );

            print!("{}", line);

            if let Ok(mut writer) = self.file_writer.lock() {
                if let Some(ref mut writer) = *writer {
                    let _ = writer.write_all(line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Installs the logger as the global [`log`] sink.
///
/// Must be called once, before any logging macros are used.
///
/// # Arguments
///
/// * `level` - The minimum level to record; anything below it is dropped.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
///
/// # Example
///
/// ```ignore
/// use log::LevelFilter;
/// use talos::fs::logger;
///
/// logger::init(LevelFilter::Debug)?;
/// ```
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(FileLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formatted duration since the user program started.
///
/// On VexOS this is the real uptime; elsewhere (host-side tests) a fixed
/// placeholder is used.
fn uptime() -> FormattedDuration {
    let dur = if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::from_millis(90_120)
    };
    format_duration(dur)
}

#[cfg(test)]
mod tests {
    use log::{LevelFilter, debug, error, info, trace, warn};

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_full_test() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        trace!("This is a trace message");
        debug!("This is a debug message");
        info!("This is an info message");
        warn!("This is a warning message");
        error!("This is an error message");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("test")
                    .build()
            )
        );
    }
}
