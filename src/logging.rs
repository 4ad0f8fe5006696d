//! `log` backend for the runner: stderr, plus an optional log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

struct RunnerLogger;

static LOGGER: RunnerLogger = RunnerLogger;

impl Log for RunnerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        eprintln!("{line}");
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = writeln!(file, "{line}");
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Map `-v` repetitions to a level filter
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger. Call once, before the first session starts.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let mut guard = LOG_FILE.lock().map_err(|_| anyhow!("log file lock poisoned"))?;
        *guard = Some(file);
    }

    log::set_logger(&LOGGER).map_err(|e| anyhow!("logger: {e}"))?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}
