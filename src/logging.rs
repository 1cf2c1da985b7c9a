//! A minimal logger for tracing the optimizer's internal decisions.
//!
//! The crate has no I/O of its own and no async runtime, so this avoids a
//! `tracing`/`log` dependency in favor of the same `OnceLock`-backed sink
//! shape the rest of this codebase uses for process-wide state.

use std::io::{self, Write};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        };
        write!(f, "{}", text)
    }
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Sets the process-wide log level. Only the first call has any effect.
pub fn init(level: LogLevel) {
    let _ = LOG_LEVEL.set(level);
}

fn current_level() -> LogLevel {
    *LOG_LEVEL.get().unwrap_or(&LogLevel::Warn)
}

pub struct AppLogger;

impl AppLogger {
    pub fn log(level: LogLevel, message: &str) {
        if level > current_level() {
            return;
        }
        match level {
            LogLevel::Error | LogLevel::Warn => {
                let _ = writeln!(io::stderr(), "[{}] {}", level, message);
            }
            _ => {
                let _ = writeln!(io::stdout(), "[{}] {}", level, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_gates_output() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
