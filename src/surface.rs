// SPDX-License-Identifier: MPL-2.0
use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

/**
The raw handle pair a graphics API needs to create a surface for a window.

Handed to [`crate::graphics::Graphics::window_created`]. The handles are only valid while the
window is registered.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceHandles {
    window: RawWindowHandle,
    display: RawDisplayHandle,
}

impl SurfaceHandles {
    pub fn new(window: RawWindowHandle, display: RawDisplayHandle) -> Self {
        SurfaceHandles { window, display }
    }

    pub fn raw_window_handle(&self) -> RawWindowHandle {
        self.window
    }

    pub fn raw_display_handle(&self) -> RawDisplayHandle {
        self.display
    }
}
