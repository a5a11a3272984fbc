/// Light volume data model: handles, registry entries and per-volume output.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3, Vec4};

use crate::light::RenderLight;
use super::{LIGHT_CELL_SIZE, MAX_LIGHTS_PER_VOLUME, MIN_BULB_SIZE, VOLUME_CELL_SIZE};

// ===== VOLUME ID =====

/// Handle of a registered light volume.
///
/// 1-based, so `Option<VolumeId>` packs into a `u32` with 0 meaning "no
/// volume" (the form shaders and per-object render data store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumeId(NonZeroU32);

impl VolumeId {
    /// Handle of the registry entry at `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// Handle from its packed form (0 yields `None`).
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Packed form of an optional handle.
    pub fn to_raw(id: Option<Self>) -> u32 {
        id.map_or(0, Self::get)
    }

    /// 1-based value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 0-based index into the registry and the output slot.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

// ===== CELL QUANTIZATION =====

/// Integer volume cell containing `position`.
#[inline]
pub fn volume_cell(position: Vec3) -> IVec3 {
    (position / VOLUME_CELL_SIZE).floor().as_ivec3()
}

/// Inclusive XY range of light cells covered by a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl CellRange {
    /// Cells touched by the XY footprint of `center ± radius`.
    pub fn around(center: Vec3, radius: f32) -> Self {
        let min = ((center.truncate() - radius) / LIGHT_CELL_SIZE).floor().as_ivec2();
        let max = ((center.truncate() + radius) / LIGHT_CELL_SIZE).floor().as_ivec2();
        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
        }
    }

    /// Every `(x, y)` cell of the range, x outermost.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.min_x..=self.max_x)
            .flat_map(move |x| (self.min_y..=self.max_y).map(move |y| (x, y)))
    }

    /// Number of cells in the range, saturating for unbounded footprints.
    pub fn cell_count(&self) -> usize {
        let span = |min: i32, max: i32| {
            usize::try_from((i64::from(max) - i64::from(min) + 1).max(0)).unwrap_or(usize::MAX)
        };
        span(self.min_x, self.max_x).saturating_mul(span(self.min_y, self.max_y))
    }
}

// ===== REGISTRY ENTRY =====

/// One registered spatial region wanting a localized light list.
#[derive(Debug)]
pub struct LightVolumeInfo {
    /// xyz: center, w: radius
    pub volume: Vec4,
    /// Next entry in the same hash bucket (1-based, 0 = end of chain)
    pub(crate) next_volume: AtomicU32,
    /// Clip volume stencil ref
    pub clip_volume: u8,
}

impl LightVolumeInfo {
    pub fn new(position: Vec3, radius: f32, clip_volume: u8) -> Self {
        Self {
            volume: position.extend(radius),
            next_volume: AtomicU32::new(0),
            clip_volume,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.volume.truncate()
    }

    pub fn radius(&self) -> f32 {
        self.volume.w
    }

    /// Volume cell this entry was registered in.
    pub fn cell(&self) -> IVec3 {
        volume_cell(self.position())
    }

    /// Next entry of the hash chain.
    pub fn next(&self) -> Option<VolumeId> {
        VolumeId::from_raw(self.next_volume.load(Ordering::Acquire))
    }
}

// ===== OUTPUT =====

/// Per-light record consumed by the renderer, laid out for direct upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightData {
    pub position: Vec3,
    pub radius: f32,
    /// Projector forward axis (zero for non-projectors)
    pub direction: Vec3,
    /// Cosine of the projector half-angle (zero for non-projectors)
    pub cos_angle: f32,
    /// Color scaled for unit brightness one meter from the bulb
    pub color: Vec3,
    pub bulb_radius: f32,
}

impl LightData {
    pub fn from_light(light: &RenderLight) -> Self {
        let (intensity, bulb_radius) = light.intensity_scale(MIN_BULB_SIZE);
        let (direction, cos_angle) = if light.is_projector() {
            (light.projector_direction(), light.frustum_angle.to_radians().cos())
        } else {
            (Vec3::ZERO, 0.0)
        };

        Self {
            position: light.origin,
            radius: light.radius,
            direction,
            cos_angle,
            color: light.color * intensity,
            bulb_radius,
        }
    }
}

/// Bounded light list of one volume.
#[derive(Debug, Clone, PartialEq)]
pub struct LightVolume {
    lights: Vec<LightData>,
}

impl Default for LightVolume {
    fn default() -> Self {
        Self {
            lights: Vec::with_capacity(MAX_LIGHTS_PER_VOLUME),
        }
    }
}

impl LightVolume {
    /// Append unless full. Returns whether the light was stored.
    pub fn push(&mut self, light: LightData) -> bool {
        if self.is_full() {
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn is_full(&self) -> bool {
        self.lights.len() >= MAX_LIGHTS_PER_VOLUME
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn lights(&self) -> &[LightData] {
        &self.lights
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Raw bytes of the light list, ready for a GPU buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;
