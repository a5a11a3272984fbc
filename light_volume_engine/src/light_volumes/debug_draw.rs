/// Debug visualization of the light volumes of a frame slot.
///
/// Decorative only. Drawing goes through a host supplied [`DebugRenderer`];
/// the module is compiled out without the `debug-draw` feature.

use glam::{Vec3, Vec4};

use crate::camera::PassInfo;
use super::light_volume_manager::LightVolumeManager;
use super::MAX_LIGHTS_PER_VOLUME;

/// Light counts are labelled on volumes closer than this to the camera
pub const DEBUG_LABEL_DISTANCE: f32 = 64.0;

const EMPTY_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
const FULL_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
const LINK_COLOR: Vec4 = Vec4::new(1.0, 1.0, 0.0, 0.5);
const LABEL_COLOR: Vec4 = Vec4::ONE;

/// Line and label sink of the host's debug overlay.
pub trait DebugRenderer {
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec4);

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Vec4);

    fn draw_label(&mut self, position: Vec3, text: &str, color: Vec4);
}

impl LightVolumeManager {
    /// Draw every volume of the pass's slot that the camera can see: its
    /// sphere (green when empty, red when full), a line to each assigned
    /// light and, when near the camera, its light count.
    ///
    /// Does nothing unless debug drawing is enabled and the pass is the
    /// general pass. Returns the number of volumes drawn.
    pub fn draw_debug(&self, pass: &PassInfo, renderer: &mut dyn DebugRenderer) -> usize {
        if !self.settings().debug || !pass.is_general_pass() {
            return 0;
        }

        let camera = pass.render_view().camera();
        let frustum = camera.frustum();
        let mut drawn = 0;

        for (info, volume) in self.volume_infos().zip(self.slot(pass.thread_id())) {
            let center = info.position();
            if !frustum.intersects_sphere(center, info.radius()) {
                continue;
            }

            let fill = volume.len() as f32 / MAX_LIGHTS_PER_VOLUME as f32;
            renderer.draw_wire_sphere(center, info.radius(), EMPTY_COLOR.lerp(FULL_COLOR, fill));

            for light in volume.lights() {
                renderer.draw_line(center, light.position, LINK_COLOR);
            }

            if center.distance(camera.position()) < DEBUG_LABEL_DISTANCE {
                renderer.draw_label(center, &volume.len().to_string(), LABEL_COLOR);
            }
            drawn += 1;
        }

        drawn
    }
}

#[cfg(test)]
#[path = "debug_draw_tests.rs"]
mod tests;
