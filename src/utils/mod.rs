pub mod logger;

pub use self::logger::{LogLevel, LogSink, Logger};
