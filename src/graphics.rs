// SPDX-License-Identifier: MPL-2.0
//! The graphics collaborator.
//!
//! The system tells graphics about window lifetime and which window's device context is
//! current. What graphics does with that is out of scope here.

use crate::surface::SurfaceHandles;
use crate::window::{RendererOptions, WindowId};

pub trait Graphics {
    /// `surface` is `None` when the native window could not be created.
    fn window_created(
        &mut self,
        window: WindowId,
        surface: Option<SurfaceHandles>,
        options: &RendererOptions,
    );
    fn window_destroyed(&mut self, window: WindowId);
    fn make_current(&mut self, window: WindowId);
    fn clear_current(&mut self);
}

/// Graphics that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGraphics;

impl Graphics for NullGraphics {
    fn window_created(&mut self, _window: WindowId, _surface: Option<SurfaceHandles>, _options: &RendererOptions) {}
    fn window_destroyed(&mut self, _window: WindowId) {}
    fn make_current(&mut self, _window: WindowId) {}
    fn clear_current(&mut self) {}
}
