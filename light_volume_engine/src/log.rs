//! Logging for the light volume engine
//!
//! - Pluggable sink via the [`Logger`] trait (set with `Engine::set_logger`)
//! - Severity levels with a global minimum filter (`Engine::set_min_severity`)
//! - Colored console output by default
//! - File and line information on ERROR entries

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for log entries.
///
/// # Example
///
/// ```no_run
/// use light_volume_engine::lve::log::{Logger, LogEntry};
///
/// struct FrameLogger;
///
/// impl Logger for FrameLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host engine's console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Receive one entry that passed the severity filter
    fn log(&self, entry: &LogEntry);
}

/// One log message with its metadata
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    pub timestamp: SystemTime,

    /// Emitting component (e.g. "lve::LightVolumeManager")
    pub source: String,

    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogSeverity {
    /// Per-frame statistics and other high-volume output
    Trace = 0,
    Debug = 1,
    Info = 2,
    /// Degraded behaviour (dropped lights, bad frame slots)
    Warn = 3,
    Error = 4,
}

impl LogSeverity {
    /// Fixed-width label used by [`DefaultLogger`]
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    /// Inverse of `severity as u8`; out-of-range values clamp to `Error`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Console logger.
///
/// Format: `[timestamp] [SEVERITY] [source] message`, with ` (file:line)`
/// appended on ERROR. Warnings and errors go to stderr, the rest to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry without colors (used by tests and file sinks)
    pub fn format_plain(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
            entry.severity.label(),
            entry.source,
            entry.message
        );
        if let (Some(file), Some(line_no)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, line_no));
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        if entry.severity >= LogSeverity::Warn {
            eprintln!("[{}] [{}] [{}] {}{}", timestamp, severity, source, entry.message, location);
        } else {
            println!("[{}] [{}] [{}] {}{}", timestamp, severity, source, entry.message, location);
        }
    }
}

// ===== LOGGING MACROS =====
//
// The message is only formatted when its severity passes the engine filter.

/// Log a TRACE message (per-frame statistics)
///
/// ```ignore
/// lve_trace!("lve::LightVolumeManager", "{} volumes assigned", count);
/// ```
#[macro_export]
macro_rules! lve_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::lve::Engine::is_enabled($crate::lve::log::LogSeverity::Trace) {
            $crate::lve::Engine::log(
                $crate::lve::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! lve_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::lve::Engine::is_enabled($crate::lve::log::LogSeverity::Debug) {
            $crate::lve::Engine::log(
                $crate::lve::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message (lifecycle events)
#[macro_export]
macro_rules! lve_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::lve::Engine::is_enabled($crate::lve::log::LogSeverity::Info) {
            $crate::lve::Engine::log(
                $crate::lve::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message
///
/// ```ignore
/// lve_warn!("lve::LightVolumeManager", "Too many lights: {}", count);
/// ```
#[macro_export]
macro_rules! lve_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::lve::Engine::is_enabled($crate::lve::log::LogSeverity::Warn) {
            $crate::lve::Engine::log(
                $crate::lve::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! lve_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::lve::Engine::log_detailed(
            $crate::lve::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
