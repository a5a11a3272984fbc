/// Camera - passive snapshot of the viewer for one rendering pass.
///
/// The light volume manager only reads the position (debug label distance)
/// and the frustum (debug culling). The host computes everything else.

use glam::{Mat4, Vec3};
use super::frustum::Frustum;

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera from precomputed matrices.
    ///
    /// The frustum is derived from `projection * view`.
    pub fn new(position: Vec3, view: Mat4, projection: Mat4) -> Self {
        Self {
            position,
            view_matrix: view,
            projection_matrix: projection,
            frustum: Frustum::from_view_projection(&(projection * view)),
        }
    }

    /// Right-handed perspective camera at `eye` looking at `target`.
    ///
    /// `fov_y` is in radians.
    pub fn look_at(eye: Vec3, target: Vec3, fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let view = Mat4::look_at_rh(eye, target, Vec3::Z);
        let projection = Mat4::perspective_rh(fov_y, aspect, near, far);
        Self::new(eye, view, projection)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }
}

impl Default for Camera {
    /// Identity view and projection at the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
