/// PassInfo - descriptor of the rendering pass being processed.
///
/// Carries the frame slot (which of the frames in flight this pass writes),
/// the pass kind and the pass's render view.

use crate::error::{Error, Result};
use crate::light_volumes::FRAMES_IN_FLIGHT;
use super::render_view::RenderView;

/// Kind of rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Primary visible-camera pass
    General,
    /// Shadow map generation
    Shadow,
    /// Recursive / secondary view (reflections, portals)
    Recursive,
}

#[derive(Debug, Clone, Copy)]
pub struct PassInfo<'a> {
    kind: PassKind,
    thread_id: usize,
    frame_id: u64,
    render_view: &'a RenderView,
}

impl<'a> PassInfo<'a> {
    /// # Errors
    ///
    /// `InvalidFrameSlot` if `thread_id >= FRAMES_IN_FLIGHT`.
    pub fn new(kind: PassKind, thread_id: usize, frame_id: u64, render_view: &'a RenderView) -> Result<Self> {
        if thread_id >= FRAMES_IN_FLIGHT {
            return Err(Error::InvalidFrameSlot(thread_id));
        }
        Ok(Self {
            kind,
            thread_id,
            frame_id,
            render_view,
        })
    }

    /// General pass for `frame_id`, writing slot `frame_id % FRAMES_IN_FLIGHT`.
    pub fn general(frame_id: u64, render_view: &'a RenderView) -> Self {
        Self {
            kind: PassKind::General,
            thread_id: (frame_id % FRAMES_IN_FLIGHT as u64) as usize,
            frame_id,
            render_view,
        }
    }

    pub fn kind(&self) -> PassKind {
        self.kind
    }

    pub fn is_general_pass(&self) -> bool {
        self.kind == PassKind::General
    }

    /// Frame slot index, always `< FRAMES_IN_FLIGHT`.
    pub fn thread_id(&self) -> usize {
        self.thread_id
    }

    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    pub fn render_view(&self) -> &'a RenderView {
        self.render_view
    }
}

#[cfg(test)]
#[path = "pass_info_tests.rs"]
mod tests;
