//! Camera module - viewer and pass description for one frame.
//!
//! Passive data containers describing what the current frame renders.
//! They are owned and driven by the host; the light volume manager only
//! reads them.

mod camera;
mod frustum;
mod pass_info;
mod render_view;

pub use camera::Camera;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use pass_info::{PassInfo, PassKind};
pub use render_view::RenderView;
