/*!
# Light Volume Engine

Clustering of dynamic lights into small per-region light lists.

Renderable objects register a *light volume* (a sphere around them) and get
a handle back. Active lights register into a coarse 2D grid. Once per frame
the manager assigns to every volume the lights that reach it, producing a
bounded list per volume that forward shading reads instead of walking every
light in the scene.

## Architecture

- **LightVolumeManager**: volume registry, light grid, per-frame assignment
  and double-buffered output
- **RenderView / PassInfo**: what the host renders this frame (camera,
  deferred lights, frame slot)
- **RenderLight**: dynamic light records
- **LightVolumeSettings**: console-variable style feature toggles
- **Engine**: logger and manager singletons

Registration (`register_volume`, `register_light`) takes `&self` and is
lock-free, so scene jobs can register from several threads while the frame
boundary calls (`clear`, `update`) take `&mut self`.
*/

// Internal modules
mod engine;
mod error;
pub mod camera;
pub mod config;
pub mod light;
pub mod light_volumes;
pub mod log;

// Main lve namespace module
pub mod lve {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Settings
    pub use crate::config::{
        LightVolumeMode, LightVolumeSettings,
        CVAR_DYNAMIC_LIGHTS, CVAR_LIGHT_VOLUMES, CVAR_LIGHT_VOLUMES_DEBUG,
    };

    // Light volume manager and its output
    pub use crate::light_volumes::{
        LightData, LightVolume, LightVolumeInfo, LightVolumeManager, LightVolumeState,
        LightVolumeStats, VolumeId,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Frame description sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod light {
        pub use crate::light::*;
    }

    pub mod volumes {
        pub use crate::light_volumes::*;
    }
}

// Re-export math library at crate root
pub use glam;
