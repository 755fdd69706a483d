//! File logger for the `log` records emitted by the engine.
//!
//! Stdout belongs to the terminal UI, so records only go anywhere when
//! `TETRIS_LOG` names a file. `TETRIS_LOG_LEVEL` picks the level
//! (`error`, `warn`, `info`, `debug`, `trace`, `off`; default `info`).
//! Neither variable affects gameplay.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

/// Path of the log file
pub const LOG_PATH_ENV: &str = "TETRIS_LOG";

/// Maximum level written to the log file
pub const LOG_LEVEL_ENV: &str = "TETRIS_LOG_LEVEL";

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open (append) the log file at `path`.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{ts} {:<5} {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parse a level name; `None` means the default (`info`).
pub fn parse_level(value: Option<&str>) -> Result<LevelFilter> {
    match value {
        None => Ok(LevelFilter::Info),
        Some(s) => LevelFilter::from_str(s.trim())
            .map_err(|_| anyhow!("invalid {LOG_LEVEL_ENV} value: {s:?}")),
    }
}

/// Install the file logger if `TETRIS_LOG` is set.
///
/// Returns `Ok(false)` when logging is not configured.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return Ok(false);
    };
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref())?;
    let logger = FileLogger::open(Path::new(&path), level)?;

    log::set_boxed_logger(Box::new(logger)).context("logger already installed")?;
    log::set_max_level(level);
    Ok(true)
}
