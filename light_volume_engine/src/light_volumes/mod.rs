//! Light volumes - clustering of dynamic lights into bounded per-region lists.
//!
//! Objects register a volume (a sphere around them) and receive a handle.
//! Lights register into a coarse 2D grid. Once per frame `update` assigns to
//! every volume the lights of the grid cells it overlaps, producing a short
//! light list per volume that the renderer consumes from one of
//! `FRAMES_IN_FLIGHT` output slots.

mod arena;
#[cfg(feature = "debug-draw")]
mod debug_draw;
mod hash;
mod light_cell;
mod light_volume_manager;
mod volume;

use glam::Vec3;

pub use arena::AppendArena;
#[cfg(feature = "debug-draw")]
pub use debug_draw::{DebugRenderer, DEBUG_LABEL_DISTANCE};
pub use hash::{int_hash, world_hash_bucket_key, HASH_MULTIPLIER};
pub use light_cell::LightCell;
pub use light_volume_manager::{LightVolumeManager, LightVolumeState, LightVolumeStats};
pub use volume::{volume_cell, CellRange, LightData, LightVolume, LightVolumeInfo, VolumeId};

/// Buckets of the volume hash (power of two)
pub const WORLD_BUCKET_SIZE: usize = 512;
/// Buckets of the light cell grid (power of two)
pub const LIGHT_CELL_BUCKET_SIZE: usize = 1024;
/// Fixed z band of the 2D light cell hash
pub const LIGHT_CELL_Z_BAND: i32 = 1;

/// Maximum registered volumes per frame
pub const MAX_VOLUMES: usize = 256;
/// Volumes must be strictly smaller than this
pub const MAX_VOLUME_RADIUS: f32 = 256.0;
/// Volume cell extent per axis: wide footprint, short height
pub const VOLUME_CELL_SIZE: Vec3 = Vec3::new(8.0, 8.0, 4.0);

/// Light cell extent on X and Y
pub const LIGHT_CELL_SIZE: f32 = 32.0;
/// Light ids must be below this
pub const MAX_LIGHTS: usize = 1024;
/// Ids held by one light cell before overwriting (power of two)
pub const LIGHT_CELL_CAPACITY: usize = 64;

/// Lights assigned to one volume at most
pub const MAX_LIGHTS_PER_VOLUME: usize = 16;
/// Lights smaller than this fraction of a volume's radius are ignored
pub const LIGHT_VOLUME_DIMENSION_RATIO: f32 = 0.1;
/// Smallest bulb size used for intensity scaling
pub const MIN_BULB_SIZE: f32 = 0.001;

/// Output slots, one per frame being built or rendered
pub const FRAMES_IN_FLIGHT: usize = 2;

const _: () = assert!(WORLD_BUCKET_SIZE.is_power_of_two());
const _: () = assert!(LIGHT_CELL_BUCKET_SIZE.is_power_of_two());
const _: () = assert!(MAX_LIGHTS <= u16::MAX as usize + 1);
