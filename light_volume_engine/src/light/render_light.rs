/// RenderLight - one dynamic light as submitted to the renderer for a frame.
///
/// Only the fields the light volume manager reads are modelled: placement,
/// color, bulb size, type flags, clip-volume stencil refs and projector
/// orientation.

use bitflags::bitflags;
use glam::{Mat4, Vec3};

/// Stencil ref marking a light that ignores clip volumes.
pub const AFFECTS_EVERYTHING_STENCIL_REF: u8 = 0xFF;
/// Stencil ref marking an unused second clip-volume slot.
pub const INACTIVE_VOLUME_STENCIL_REF: u8 = 0xFE;

bitflags! {
    /// Light type and behaviour flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LightFlags: u32 {
        const DIRECTIONAL       = 1 << 1;
        const CAST_SHADOW_MAPS  = 1 << 5;
        const POINT             = 1 << 6;
        const PROJECT           = 1 << 7;
        const DEFERRED_CUBEMAPS = 1 << 11;
        const HAS_CLIP_VOLUME   = 1 << 12;
        const DISABLED          = 1 << 13;
        const AREA_LIGHT        = 1 << 14;
        /// No lighting contribution (flares, beams)
        const FAKE              = 1 << 17;
        const SUN               = 1 << 18;
        const THIS_AREA_ONLY    = 1 << 20;
        const AMBIENT           = 1 << 21;

        /// Lights that never enter the light volume grid.
        const LIGHT_VOLUME_EXCLUDED = Self::DISABLED.bits()
            | Self::FAKE.bits()
            | Self::AMBIENT.bits()
            | Self::DEFERRED_CUBEMAPS.bits();

        /// Lights whose color is used as-is (no bulb intensity scaling).
        const UNSCALED_INTENSITY = Self::AREA_LIGHT.bits() | Self::AMBIENT.bits();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderLight {
    /// World-space position
    pub origin: Vec3,
    /// Influence radius
    pub radius: f32,
    /// Linear RGB color
    pub color: Vec3,
    /// Radius of the emitting surface used for attenuation
    pub attenuation_bulb_size: f32,
    pub flags: LightFlags,
    /// Clip volumes this light may affect
    pub stencil_refs: [u8; 2],
    /// Orientation; column 0 is the projector's forward axis
    pub obj_matrix: Mat4,
    /// Projector half-angle in degrees
    pub frustum_angle: f32,
}

impl Default for RenderLight {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            radius: 1.0,
            color: Vec3::ONE,
            attenuation_bulb_size: 0.05,
            flags: LightFlags::POINT,
            stencil_refs: [AFFECTS_EVERYTHING_STENCIL_REF, INACTIVE_VOLUME_STENCIL_REF],
            obj_matrix: Mat4::IDENTITY,
            frustum_angle: 45.0,
        }
    }
}

impl RenderLight {
    /// Point light affecting every clip volume.
    pub fn point(origin: Vec3, radius: f32, color: Vec3) -> Self {
        Self {
            origin,
            radius,
            color,
            ..Self::default()
        }
    }

    /// Projector light facing `direction` with a half-angle in degrees.
    pub fn projector(origin: Vec3, radius: f32, color: Vec3, direction: Vec3, frustum_angle: f32) -> Self {
        let forward = direction.normalize_or(Vec3::X);
        let (up, side) = forward.any_orthonormal_pair();
        Self {
            origin,
            radius,
            color,
            flags: LightFlags::PROJECT,
            obj_matrix: Mat4::from_cols(
                forward.extend(0.0),
                up.extend(0.0),
                side.extend(0.0),
                origin.extend(1.0),
            ),
            frustum_angle,
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: LightFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_bulb_size(mut self, bulb_size: f32) -> Self {
        self.attenuation_bulb_size = bulb_size;
        self
    }

    /// Restrict the light to clip volumes (`INACTIVE_VOLUME_STENCIL_REF`
    /// for an unused slot).
    pub fn with_stencil_refs(mut self, primary: u8, secondary: u8) -> Self {
        self.stencil_refs = [primary, secondary];
        self
    }

    pub fn is_projector(&self) -> bool {
        self.flags.contains(LightFlags::PROJECT)
    }

    /// Whether the light may enter the light volume grid at all.
    pub fn is_light_volume_candidate(&self) -> bool {
        !self.flags.intersects(LightFlags::LIGHT_VOLUME_EXCLUDED)
    }

    /// Whether this light reaches the given clip volume.
    pub fn affects_clip_volume(&self, clip_volume: u8) -> bool {
        self.stencil_refs[0] == AFFECTS_EVERYTHING_STENCIL_REF
            || self.stencil_refs[0] == clip_volume
            || self.stencil_refs[1] == clip_volume
    }

    /// Color multiplier that puts unit brightness one meter from the
    /// emitting surface: solves `I / (1 + 1/bulb)^2 = 1`.
    ///
    /// Returns the multiplier and the bulb size it was computed with.
    pub fn intensity_scale(&self, min_bulb_size: f32) -> (f32, f32) {
        if self.flags.intersects(LightFlags::UNSCALED_INTENSITY) {
            return (1.0, self.attenuation_bulb_size);
        }
        let bulb = self.attenuation_bulb_size.max(min_bulb_size);
        let mul = 1.0 + 1.0 / bulb;
        (mul * mul, bulb)
    }

    /// Normalized projector forward axis (zero if degenerate).
    pub fn projector_direction(&self) -> Vec3 {
        self.obj_matrix.x_axis.truncate().normalize_or_zero()
    }
}

#[cfg(test)]
#[path = "render_light_tests.rs"]
mod tests;
