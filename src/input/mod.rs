// SPDX-License-Identifier: MPL-2.0
/*!
Translation of native input into the framework's input model.

# Design principles

* Translation is pure and table-driven; nothing here talks to the OS. Platform backends
  decode their native messages into [`crate::message::NativeMessage`] and the dispatch loop
  routes them through these modules.
* Keyboard events:
   * Report raw up/down transitions, one down per physical press (auto-repeat is collapsed).
   * Keycodes are translated into a platform-independent enum; anything unmapped is
     [`keyboard::key::KeyboardKey::Unknown`].
   * The resolved character is carried alongside, but this is not a text input system.
* Mouse events:
   * Coordinates are window-local, upper-left origin, as the platform reports them.
   * Events name the window by [`crate::window::WindowId`], not by native handle.
* Gamepads:
   * Snapshot-diff polling once per tick; listeners see only changed values.

# Sinks

Each device family delivers into a sink trait ([`keyboard::KeyboardSink`],
[`mouse::MouseSink`]); the stock [`keyboard::Keyboard`] and [`mouse::Mouse`] implement them
with pollable state and an optional listener closure.
*/
///Provides information about keyboard events.
pub mod keyboard;
///Provides information about mouse events.
pub mod mouse;
///Gamepad snapshot polling.
pub mod gamepad;

use std::num::NonZeroIsize;

/**
An opaque native window handle.

# Platform specifics
* On Windows, this value is an HWND.
* In the headless backend, this is a counter value with no meaning outside the backend.

No memory management is performed; a handle may refer to a window that no longer exists.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NativeHandle(pub NonZeroIsize);

impl NativeHandle {
    /// Wraps a raw handle value, or `None` for the null handle.
    pub fn from_raw(raw: isize) -> Option<Self> {
        NonZeroIsize::new(raw).map(NativeHandle)
    }

    pub fn raw(self) -> isize {
        self.0.get()
    }
}
