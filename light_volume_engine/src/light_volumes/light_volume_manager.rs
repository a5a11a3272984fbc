/// LightVolumeManager - per-frame light volume registry and light assignment.
///
/// Frame cycle (driven by the host):
///
/// 1. `clear` at the start of the general pass resets the scratch grids and
///    arms collection when the feature is in single mode.
/// 2. Scene jobs call `register_volume` / `register_light` (both `&self`,
///    lock-free, callable from several threads).
/// 3. `update` assigns lights to volumes into the pass's output slot.
/// 4. The render thread reads `light_volumes(thread_id)` while the next
///    frame is collected into the other slot.
///
/// Registration after `update` is still accepted but only shows up in the
/// next frame's output. Ordering between the stages is the caller's job.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use glam::Vec3;

use crate::camera::PassInfo;
use crate::config::{LightVolumeMode, LightVolumeSettings};
use crate::light::RenderLight;
use super::arena::AppendArena;
use super::hash::world_hash_bucket_key;
use super::light_cell::LightCell;
use super::volume::{volume_cell, CellRange, LightData, LightVolume, LightVolumeInfo, VolumeId};
use super::{
    FRAMES_IN_FLIGHT, LIGHT_CELL_BUCKET_SIZE, LIGHT_CELL_Z_BAND, LIGHT_VOLUME_DIMENSION_RATIO,
    MAX_LIGHTS, MAX_VOLUMES, MAX_VOLUME_RADIUS, WORLD_BUCKET_SIZE,
};

const SOURCE: &str = "lve::LightVolumeManager";

/// Where the manager is in its per-frame cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightVolumeState {
    /// Collection disarmed: registrations are ignored
    Idle,
    /// Accepting volumes and lights for this frame
    Collecting,
    /// `update` has produced this frame's output
    Assigning,
}

/// Counters of the last `update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightVolumeStats {
    pub frame_id: u64,
    /// Volumes in the registry
    pub volumes: usize,
    /// Successful `register_light` calls since the last clear
    pub registered_lights: usize,
    /// Deferred lights in the pass's render view
    pub view_lights: usize,
    /// Light entries written across all volumes
    pub assigned_lights: usize,
    /// Volumes whose list hit `MAX_LIGHTS_PER_VOLUME`
    pub full_volumes: usize,
    /// Light cells that dropped ids to overwriting
    pub overflowed_cells: usize,
}

pub struct LightVolumeManager {
    settings: LightVolumeSettings,
    /// Collection armed for the current frame
    collecting: AtomicBool,
    assigned: bool,

    /// Volume registry, indexed by `VolumeId::index`
    volumes: AppendArena<LightVolumeInfo>,
    /// Head of each volume hash chain (1-based, 0 = empty)
    world_cells: Box<[AtomicU32]>,
    light_cells: Box<[LightCell]>,

    /// Output per frame slot; entry `i` belongs to volume index `i`
    light_volumes: [Vec<LightVolume>; FRAMES_IN_FLIGHT],
    /// Per light id: `volume index + 1` of the last volume that examined it
    light_stamps: Box<[u32]>,

    registered_lights: AtomicU32,
    stats: LightVolumeStats,
}

impl LightVolumeManager {
    /// Preallocate every scratch structure. The manager starts `Idle`;
    /// the first `clear` of a general pass arms it.
    pub fn new(settings: LightVolumeSettings) -> Self {
        Self {
            settings,
            collecting: AtomicBool::new(false),
            assigned: false,
            volumes: AppendArena::with_capacity(MAX_VOLUMES),
            world_cells: (0..WORLD_BUCKET_SIZE).map(|_| AtomicU32::new(0)).collect(),
            light_cells: (0..LIGHT_CELL_BUCKET_SIZE).map(|_| LightCell::default()).collect(),
            light_volumes: std::array::from_fn(|_| Vec::with_capacity(MAX_VOLUMES)),
            light_stamps: vec![0; MAX_LIGHTS].into_boxed_slice(),
            registered_lights: AtomicU32::new(0),
            stats: LightVolumeStats::default(),
        }
    }

    /// Drop all per-level data and release the output buffers.
    ///
    /// Returns to `Idle`; settings are kept.
    pub fn reset(&mut self) {
        *self.collecting.get_mut() = false;
        self.assigned = false;
        self.clear_scratch();
        self.light_volumes = std::array::from_fn(|_| Vec::new());
        self.stats = LightVolumeStats::default();
        crate::lve_debug!(SOURCE, "Light volume manager reset");
    }

    // ===== SETTINGS / STATE =====

    pub fn settings(&self) -> &LightVolumeSettings {
        &self.settings
    }

    /// Replace the settings. Takes effect at the next `clear`.
    pub fn set_settings(&mut self, settings: LightVolumeSettings) {
        self.settings = settings;
    }

    pub fn state(&self) -> LightVolumeState {
        if !self.is_collecting() {
            LightVolumeState::Idle
        } else if self.assigned {
            LightVolumeState::Assigning
        } else {
            LightVolumeState::Collecting
        }
    }

    pub fn is_collecting(&self) -> bool {
        self.collecting.load(Ordering::Acquire)
    }

    /// Counters of the last `update`.
    pub fn stats(&self) -> &LightVolumeStats {
        &self.stats
    }

    // ===== REGISTRATION =====

    /// Handle of the volume for `position`'s cell and `clip_volume`,
    /// registering a new one if this frame has none yet.
    ///
    /// `None` when collection is disarmed, the registry is full or
    /// `radius >= MAX_VOLUME_RADIUS`. The object then renders without a
    /// light volume this frame.
    pub fn register_volume(&self, position: Vec3, radius: f32, clip_volume: u8) -> Option<VolumeId> {
        // Negated so that a NaN radius is rejected too
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        let radius_too_large = !(radius < MAX_VOLUME_RADIUS);
        if !self.is_collecting() || self.volumes.is_full() || radius_too_large {
            return None;
        }

        let cell = volume_cell(position);
        let bucket = &self.world_cells[world_hash_bucket_key(cell.x, cell.y, cell.z, WORLD_BUCKET_SIZE)];

        // Entry appended by this call but not linked yet
        let mut pending: Option<VolumeId> = None;

        loop {
            let mut link = bucket;
            let mut next = link.load(Ordering::Acquire);

            while let Some(id) = VolumeId::from_raw(next) {
                let info = self.volumes.get(id.index())?;
                if info.cell() == cell && info.clip_volume == clip_volume {
                    // A racing registration linked the same cell first; a
                    // pending entry stays in the registry unlinked.
                    if let Some(orphan) = pending {
                        crate::lve_debug!(
                            SOURCE,
                            "Volume {} left unlinked: cell {} clip {} already registered as {}",
                            orphan.get(),
                            cell,
                            clip_volume,
                            id.get()
                        );
                    }
                    return Some(id);
                }
                link = &info.next_volume;
                next = link.load(Ordering::Acquire);
            }

            let id = match pending {
                Some(id) => id,
                None => {
                    let index = self
                        .volumes
                        .push(LightVolumeInfo::new(position, radius, clip_volume))
                        .ok()?;
                    let id = VolumeId::from_index(index)?;
                    pending = Some(id);
                    id
                }
            };

            if link
                .compare_exchange(0, id.get(), Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Some(id);
            }
        }
    }

    /// Insert `light_id` into every light cell the light's XY footprint
    /// touches.
    ///
    /// Ignored when collection is disarmed, `light_id >= MAX_LIGHTS` or the
    /// light is disabled, fake, ambient or a deferred cubemap. A footprint
    /// spanning `LIGHT_CELL_BUCKET_SIZE` cells or more goes into every bucket
    /// once.
    pub fn register_light(&self, light: &RenderLight, light_id: u32) {
        if !self.is_collecting() || light_id as usize >= MAX_LIGHTS || !light.is_light_volume_candidate() {
            return;
        }

        let light_id = light_id as u16;
        let range = CellRange::around(light.origin, light.radius);
        if range.cell_count() >= LIGHT_CELL_BUCKET_SIZE {
            // Footprint at least as large as the grid: every bucket is hit
            for cell in self.light_cells.iter() {
                cell.push(light_id);
            }
        } else {
            for (x, y) in range.cells() {
                let bucket = world_hash_bucket_key(x, y, LIGHT_CELL_Z_BAND, LIGHT_CELL_BUCKET_SIZE);
                self.light_cells[bucket].push(light_id);
            }
        }
        self.registered_lights.fetch_add(1, Ordering::Relaxed);
    }

    /// Register every deferred light of the pass's view, using its index as
    /// light id. Non-general passes are ignored.
    pub fn register_view_lights(&self, pass: &PassInfo) {
        if !pass.is_general_pass() {
            return;
        }
        for (light_id, light) in pass.render_view().deferred_lights().iter().enumerate() {
            self.register_light(light, light_id as u32);
        }
    }

    // ===== ASSIGNMENT =====

    /// Build the light list of every registered volume into the pass's
    /// output slot.
    ///
    /// Runs only for the general pass, while collecting, with at least one
    /// volume. A view with more than `MAX_LIGHTS` lights is logged; lights
    /// past the limit were never registered and are left out.
    pub fn update(&mut self, pass: &PassInfo) {
        if !*self.collecting.get_mut() || !pass.is_general_pass() {
            return;
        }

        let volume_count = self.volumes.coalesce();
        if volume_count == 0 {
            return;
        }

        let view = pass.render_view();
        let view_lights = view.deferred_light_count();
        if view_lights > MAX_LIGHTS {
            crate::lve_warn!(
                SOURCE,
                "Frame {}: {} deferred lights exceed the light volume limit of {}, the rest are skipped",
                pass.frame_id(),
                view_lights,
                MAX_LIGHTS
            );
        }

        let Self {
            volumes,
            light_cells,
            light_volumes,
            light_stamps,
            assigned,
            ..
        } = self;

        let output = &mut light_volumes[pass.thread_id()];
        output.resize_with(volume_count, LightVolume::default);
        *assigned = true;

        if view_lights == 0 {
            output.iter_mut().for_each(LightVolume::clear);
        } else {
            light_stamps.fill(0);

            for ((index, info), volume) in volumes.iter().enumerate().zip(output.iter_mut()) {
                let stamp = index as u32 + 1;
                volume.clear();

                'cells: for (x, y) in CellRange::around(info.position(), info.radius()).cells() {
                    let cell = &light_cells[world_hash_bucket_key(x, y, LIGHT_CELL_Z_BAND, LIGHT_CELL_BUCKET_SIZE)];
                    for light_id in cell.light_ids() {
                        if volume.is_full() {
                            break 'cells;
                        }
                        let last_seen = &mut light_stamps[light_id as usize];
                        if *last_seen == stamp {
                            continue;
                        }
                        *last_seen = stamp;

                        if let Some(light) = view.deferred_light(u32::from(light_id)) {
                            Self::add_light(light, info, volume);
                        }
                    }
                }
            }
        }

        self.record_stats(pass, volume_count, view_lights);
    }

    /// Append `light` to `volume` if it reaches the volume.
    ///
    /// The light must share the volume's clip volume (or affect all of
    /// them), be at least a tenth of the volume's radius and its sphere must
    /// touch the volume's. Returns whether the light was stored.
    pub fn add_light(light: &RenderLight, info: &LightVolumeInfo, volume: &mut LightVolume) -> bool {
        if !light.affects_clip_volume(info.clip_volume) {
            return false;
        }
        if light.radius < LIGHT_VOLUME_DIMENSION_RATIO * info.radius() {
            return false;
        }

        let reach = info.radius() + light.radius;
        if light.origin.distance_squared(info.position()) > reach * reach {
            return false;
        }

        volume.push(LightData::from_light(light))
    }

    fn record_stats(&mut self, pass: &PassInfo, volume_count: usize, view_lights: usize) {
        let output = &self.light_volumes[pass.thread_id()];
        self.stats = LightVolumeStats {
            frame_id: pass.frame_id(),
            volumes: volume_count,
            registered_lights: *self.registered_lights.get_mut() as usize,
            view_lights,
            assigned_lights: output.iter().map(LightVolume::len).sum(),
            full_volumes: output.iter().filter(|v| v.is_full()).count(),
            overflowed_cells: self.light_cells.iter().filter(|c| c.has_overflowed()).count(),
        };

        crate::lve_trace!(
            SOURCE,
            "Frame {} slot {}: {} volumes, {}/{} lights registered, {} assigned, {} full volumes, {} overflowed cells",
            self.stats.frame_id,
            pass.thread_id(),
            self.stats.volumes,
            self.stats.registered_lights,
            self.stats.view_lights,
            self.stats.assigned_lights,
            self.stats.full_volumes,
            self.stats.overflowed_cells
        );
    }

    // ===== OUTPUT =====

    /// Finished light volumes of frame slot `thread_id`.
    ///
    /// Empty unless the feature is in single mode with dynamic lights on.
    /// An out of range slot is logged and yields nothing.
    pub fn light_volumes(&self, thread_id: usize) -> &[LightVolume] {
        if !self.settings.exposes_output() {
            return &[];
        }
        match self.light_volumes.get(thread_id) {
            Some(slot) => slot.as_slice(),
            None => {
                crate::lve_warn!(SOURCE, "Invalid frame slot {} (frames in flight: {})", thread_id, FRAMES_IN_FLIGHT);
                &[]
            }
        }
    }

    /// Output slot contents regardless of the exposure settings.
    pub(super) fn slot(&self, thread_id: usize) -> &[LightVolume] {
        self.light_volumes.get(thread_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Light volume of `id` in frame slot `thread_id`.
    pub fn light_volume(&self, thread_id: usize, id: VolumeId) -> Option<&LightVolume> {
        self.light_volumes(thread_id).get(id.index())
    }

    /// Registry entry of `id`.
    pub fn volume_info(&self, id: VolumeId) -> Option<&LightVolumeInfo> {
        self.volumes.get(id.index())
    }

    /// Registered volumes in index order.
    pub fn volume_infos(&self) -> impl Iterator<Item = &LightVolumeInfo> + '_ {
        self.volumes.iter()
    }

    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    /// Volume hash chain heads (scratch, valid while collecting).
    pub fn world_cells(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.world_cells.iter().map(|head| head.load(Ordering::Acquire))
    }

    /// Light cell grid (scratch, valid while collecting).
    pub fn light_cells(&self) -> &[LightCell] {
        &self.light_cells
    }

    // ===== FRAME BOUNDARY =====

    /// Start a new frame. General pass only.
    ///
    /// Disarms collection; with the feature on, empties the registry and
    /// both grids and re-arms when the toggle is in single mode. Output
    /// slots are left for the render thread.
    pub fn clear(&mut self, pass: &PassInfo) {
        if !pass.is_general_pass() {
            return;
        }

        *self.collecting.get_mut() = false;
        self.assigned = false;

        if self.settings.is_enabled() {
            self.clear_scratch();
            *self.collecting.get_mut() = self.settings.mode() == LightVolumeMode::Single;
        }
    }

    fn clear_scratch(&mut self) {
        for head in self.world_cells.iter_mut() {
            *head.get_mut() = 0;
        }
        for cell in self.light_cells.iter_mut() {
            cell.clear();
        }
        self.volumes.clear();
        *self.registered_lights.get_mut() = 0;
    }
}

#[cfg(test)]
#[path = "light_volume_manager_tests.rs"]
mod tests;
