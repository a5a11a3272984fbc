//! Light volume feature settings
//!
//! Mirrors the console variables the host engine exposes for light volumes.
//! The manager owns one copy; the host writes it between frames.

use crate::error::{Error, Result};

/// Console variable: light volume toggle (0 = off, 1 = single, other = multi)
pub const CVAR_LIGHT_VOLUMES: &str = "e_LightVolumes";
/// Console variable: dynamic lights enabled (0/1)
pub const CVAR_DYNAMIC_LIGHTS: &str = "e_DynamicLights";
/// Console variable: light volume debug drawing (0/1)
pub const CVAR_LIGHT_VOLUMES_DEBUG: &str = "e_LightVolumesDebug";

/// Interpretation of the light volume toggle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightVolumeMode {
    /// Toggle is 0: nothing is collected or exposed
    Off,
    /// Toggle is 1: volumes are collected and the output is exposed
    Single,
    /// Any other non-zero toggle: the feature counts as on (scratch state is
    /// still reset every frame) but no volumes are collected and
    /// `light_volumes()` never returns data.
    Multi,
}

/// Engine-wide light volume settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightVolumeSettings {
    /// Raw toggle value, see [`LightVolumeMode`]
    pub light_volumes: i32,
    /// Dynamic lights enabled
    pub dynamic_lights: bool,
    /// Draw volumes and their lights through `draw_debug`
    pub debug: bool,
}

impl Default for LightVolumeSettings {
    fn default() -> Self {
        Self {
            light_volumes: 1,
            dynamic_lights: true,
            debug: false,
        }
    }
}

impl LightVolumeSettings {
    /// Settings with the feature switched off
    pub fn disabled() -> Self {
        Self {
            light_volumes: 0,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> LightVolumeMode {
        match self.light_volumes {
            0 => LightVolumeMode::Off,
            1 => LightVolumeMode::Single,
            _ => LightVolumeMode::Multi,
        }
    }

    /// Toggle non-zero and dynamic lights on.
    pub fn is_enabled(&self) -> bool {
        self.light_volumes != 0 && self.dynamic_lights
    }

    /// Whether `light_volumes()` may expose data under these settings.
    pub fn exposes_output(&self) -> bool {
        self.mode() == LightVolumeMode::Single && self.dynamic_lights
    }

    /// Read a console variable by name.
    pub fn cvar(&self, name: &str) -> Option<i32> {
        match name {
            CVAR_LIGHT_VOLUMES => Some(self.light_volumes),
            CVAR_DYNAMIC_LIGHTS => Some(self.dynamic_lights as i32),
            CVAR_LIGHT_VOLUMES_DEBUG => Some(self.debug as i32),
            _ => None,
        }
    }

    /// Set a console variable from its textual value.
    ///
    /// Boolean variables accept any integer (non-zero = on).
    ///
    /// # Errors
    ///
    /// - `UnknownSetting` if `name` is not a light volume variable
    /// - `InvalidSetting` if `value` is not an integer
    pub fn set_cvar(&mut self, name: &str, value: &str) -> Result<()> {
        let parsed: i32 = value.trim().parse().map_err(|_| {
            Error::InvalidSetting(format!("{} = {}", name, value))
        })?;

        match name {
            CVAR_LIGHT_VOLUMES => self.light_volumes = parsed,
            CVAR_DYNAMIC_LIGHTS => self.dynamic_lights = parsed != 0,
            CVAR_LIGHT_VOLUMES_DEBUG => self.debug = parsed != 0,
            _ => return Err(Error::UnknownSetting(name.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
