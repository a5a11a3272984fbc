/// Light Volume Engine - singleton manager for the light volume subsystem
///
/// Holds the global logger and the light volume manager singleton. Scene
/// and render code reach the manager through `Engine::light_volume_manager()`
/// instead of threading it through every call.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, RwLock};
use std::time::SystemTime;

use crate::config::LightVolumeSettings;
use crate::error::{Error, Result};
use crate::light_volumes::LightVolumeManager;
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

struct EngineState {
    /// Light volume manager singleton. The RwLock lets registration jobs
    /// share a read guard while `update`/`clear` take the write guard.
    light_volume_manager: RwLock<Option<Arc<RwLock<LightVolumeManager>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            light_volume_manager: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use light_volume_engine::lve::{Engine, LightVolumeSettings};
///
/// Engine::initialize()?;
/// Engine::create_light_volume_manager(LightVolumeSettings::default())?;
///
/// let manager = Engine::light_volume_manager()?;
/// let volumes = manager.read().unwrap();
/// // Register volumes...
///
/// Engine::shutdown();
/// # Ok::<(), light_volume_engine::lve::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log an error before handing it back (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::lve_error!("lve::Engine", "Initialization failed: {}", msg);
            }
            Error::LockPoisoned(what) => {
                crate::lve_error!("lve::Engine", "Lock poisoned: {}", what);
            }
            _ => {
                crate::lve_error!("lve::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| {
            Self::log_and_return_error(Error::InitializationFailed(
                "Engine not initialized. Call Engine::initialize() first.".to_string(),
            ))
        })
    }

    /// Initialize the engine. Idempotent.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Destroy all singletons. The engine stays initialized.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut manager) = state.light_volume_manager.write() {
                *manager = None;
            }
        }
    }

    // ===== LIGHT VOLUME MANAGER API =====

    /// Create the light volume manager singleton.
    ///
    /// # Errors
    ///
    /// - The engine is not initialized
    /// - A manager already exists
    /// - The singleton lock is poisoned
    pub fn create_light_volume_manager(settings: LightVolumeSettings) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.light_volume_manager.write().map_err(|_| {
            Self::log_and_return_error(Error::LockPoisoned("LightVolumeManager".to_string()))
        })?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(Error::InitializationFailed(
                "LightVolumeManager already exists. Call Engine::destroy_light_volume_manager() first."
                    .to_string(),
            )));
        }

        *lock = Some(Arc::new(RwLock::new(LightVolumeManager::new(settings))));

        crate::lve_info!(
            "lve::Engine",
            "LightVolumeManager singleton created (mode {:?}, dynamic lights {})",
            settings.mode(),
            settings.dynamic_lights
        );

        Ok(())
    }

    /// Get the light volume manager singleton.
    ///
    /// # Errors
    ///
    /// - The engine is not initialized
    /// - The manager has not been created
    /// - The singleton lock is poisoned
    pub fn light_volume_manager() -> Result<Arc<RwLock<LightVolumeManager>>> {
        let state = Self::state()?;

        let lock = state.light_volume_manager.read().map_err(|_| {
            Self::log_and_return_error(Error::LockPoisoned("LightVolumeManager".to_string()))
        })?;

        lock.clone().ok_or_else(|| {
            Self::log_and_return_error(Error::InitializationFailed(
                "LightVolumeManager not created. Call Engine::create_light_volume_manager() first."
                    .to_string(),
            ))
        })
    }

    /// Destroy the light volume manager singleton. Outstanding handles stay
    /// valid until dropped.
    ///
    /// # Errors
    ///
    /// - The engine is not initialized
    /// - The singleton lock is poisoned
    pub fn destroy_light_volume_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.light_volume_manager.write().map_err(|_| {
            Self::log_and_return_error(Error::LockPoisoned("LightVolumeManager".to_string()))
        })?;

        *lock = None;

        crate::lve_info!("lve::Engine", "LightVolumeManager singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut manager) = state.light_volume_manager.write() {
                *manager = None;
            }
        }
        MIN_SEVERITY.store(LogSeverity::Info as u8, Ordering::Relaxed);
    }

    // ===== LOGGING API =====

    /// Replace the default logger with a custom one
    ///
    /// ```no_run
    /// use light_volume_engine::lve::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct ConsoleLogger;
    /// impl Logger for ConsoleLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Forward to the game console...
    ///     }
    /// }
    ///
    /// Engine::set_logger(ConsoleLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop entries below `severity` (default `Info`).
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    pub fn min_severity() -> LogSeverity {
        LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether an entry of `severity` would reach the logger.
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity as u8 >= MIN_SEVERITY.load(Ordering::Relaxed)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by the lve_trace!, lve_info!, lve_warn! macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Internal logging method with file:line information (for ERROR logs)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if !Self::is_enabled(entry.severity) {
            return;
        }
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
