//! Light module - dynamic light records consumed by the light volume manager.

mod render_light;

pub use render_light::{
    RenderLight, LightFlags,
    AFFECTS_EVERYTHING_STENCIL_REF, INACTIVE_VOLUME_STENCIL_REF,
};
