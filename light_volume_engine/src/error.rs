//! Error types for the light volume engine
//!
//! The per-frame path (registration, assignment, output) never fails: it
//! degrades through sentinel returns. Errors only surface at the engine
//! boundary: singleton lifecycle, frame slot validation and settings.

use std::fmt;

/// Result type for light volume engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Light volume engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Initialization failed (engine, manager singleton)
    InitializationFailed(String),

    /// A global lock was poisoned by a panicking thread
    LockPoisoned(String),

    /// Frame slot index is not below the number of frames in flight
    InvalidFrameSlot(usize),

    /// Console variable name is not known
    UnknownSetting(String),

    /// Console variable value could not be parsed
    InvalidSetting(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::LockPoisoned(what) => write!(f, "Lock poisoned: {}", what),
            Error::InvalidFrameSlot(slot) => write!(f, "Invalid frame slot: {}", slot),
            Error::UnknownSetting(name) => write!(f, "Unknown setting: {}", name),
            Error::InvalidSetting(msg) => write!(f, "Invalid setting: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
