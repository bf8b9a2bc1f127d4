// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A small stderr logger built on the `log` facade.
//!
//! ```no_run
//! use logger::*;
//!
//! Logger::new()
//!     .label("demo")
//!     .level(Level::Debug)
//!     .init()
//!     .expect("Failed to initialize logger");
//! info!("ready");
//! ```

pub use log::{debug, error, info, trace, warn};
pub use log::{Level, LevelFilter, SetLoggerError};

use log::{Log, Metadata, Record};

use std::io::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Logs at error level and terminates the process with exit status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => ({
        $crate::error!($($arg)*);
        $crate::flush();
        std::process::exit(1);
    })
}

pub struct Logger {
    label: Option<&'static str>,
    level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: None,
            level: Level::Info,
        }
    }

    /// Text shown in brackets on every line. Defaults to the record target.
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Installs this logger as the global `log` backend.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        let label = match self.label {
            Some(label) => label,
            None => record.target(),
        };
        format!(
            "{} {:<5} [{}] {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.level(),
            label,
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr(), "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Flushes the installed logger, if any.
pub fn flush() {
    log::logger().flush();
}
