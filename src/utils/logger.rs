use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::thread;

use chrono::Local;
use parking_lot::Mutex;

#[derive(Debug, PartialOrd, PartialEq, Clone, Copy)]
pub enum LogLevel {
    DEBUG,
    INFO,
    WARNING,
    ERROR,
    CRITICAL,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARNING => "WARNING",
            LogLevel::ERROR => "ERROR",
            LogLevel::CRITICAL => "CRITICAL",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::DEBUG),
            "INFO" => Ok(LogLevel::INFO),
            "WARN" | "WARNING" => Ok(LogLevel::WARNING),
            "ERROR" => Ok(LogLevel::ERROR),
            "CRITICAL" => Ok(LogLevel::CRITICAL),
            _ => Err(()),
        }
    }
}

/// Destination for log records. Handed to components at startup instead of
/// being looked up globally.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::DEBUG, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::INFO, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::WARNING, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::ERROR, message);
    }

    fn critical(&self, message: &str) {
        self.log(LogLevel::CRITICAL, message);
    }
}

/// Line logger writing to stdout and, optionally, appending to a file.
pub struct Logger {
    current_level: Mutex<LogLevel>,
    log_file: Mutex<Option<File>>,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Logger {
            current_level: Mutex::new(level),
            log_file: Mutex::new(None),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        *self.current_level.lock()
    }

    pub fn set_log_level(&self, level: LogLevel) {
        *self.current_level.lock() = level;
    }

    pub fn set_log_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *self.log_file.lock() = Some(file);
        Ok(())
    }

    fn format_line(level: LogLevel, message: &str) -> String {
        let now = Local::now();
        format!(
            "{}.{:03} [{:?}] {}: {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            now.timestamp_subsec_millis(),
            thread::current().id(),
            level.as_str(),
            message
        )
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::INFO)
    }
}

impl LogSink for Logger {
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.log_level() {
            return;
        }

        let line = Self::format_line(level, message);
        println!("{}", line);

        if let Some(file) = self.log_file.lock().as_mut() {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("Failed to write to log file: {}", e);
            }
        }
    }
}
