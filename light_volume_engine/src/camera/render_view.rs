/// RenderView - what one frame renders: a camera snapshot plus the frame's
/// deferred light list.
///
/// Ephemeral: built by the host each frame, read by the light volume
/// manager through a `PassInfo`. Light ids are indices into this list.

use crate::light::RenderLight;
use super::camera::Camera;

#[derive(Debug, Clone, Default)]
pub struct RenderView {
    camera: Camera,
    deferred_lights: Vec<RenderLight>,
}

impl RenderView {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            deferred_lights: Vec::new(),
        }
    }

    /// Camera snapshot for this frame.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Append a deferred light and return its id (its index in the list).
    pub fn add_deferred_light(&mut self, light: RenderLight) -> u32 {
        let id = self.deferred_lights.len() as u32;
        self.deferred_lights.push(light);
        id
    }

    /// Total number of deferred lights this frame.
    pub fn deferred_light_count(&self) -> usize {
        self.deferred_lights.len()
    }

    /// Deferred light by id.
    pub fn deferred_light(&self, id: u32) -> Option<&RenderLight> {
        self.deferred_lights.get(id as usize)
    }

    pub fn deferred_lights(&self) -> &[RenderLight] {
        &self.deferred_lights
    }

    /// Drop all lights, keeping the camera (start of a new frame).
    pub fn clear_lights(&mut self) {
        self.deferred_lights.clear();
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
