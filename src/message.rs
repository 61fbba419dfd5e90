// SPDX-License-Identifier: MPL-2.0
//! The platform-neutral native message model.
//!
//! Backends decode whatever their OS delivers (window messages, in the Win32 case) into
//! [`NativeMessage`] and hand them out one at a time through [`MessageSource`]. The dispatch
//! loop in [`crate::system::System::pump_events`] routes each one.

use crate::coordinates::{Position, Size};
use crate::input::NativeHandle;
use crate::input::mouse::MouseMessage;
use crate::window::WindowId;

/// One decoded unit of native input or window-state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeMessage {
    /// A key went down (including OS auto-repeat). `character` is resolved at decode time,
    /// because it depends on modifier and dead-key state at that moment.
    KeyDown { code: u8, character: Option<char> },
    KeyUp { code: u8, character: Option<char> },
    /// Pointer message with window-local coordinates.
    Mouse {
        window: NativeHandle,
        message: MouseMessage,
        x: i32,
        y: i32,
    },
    Activated { window: NativeHandle, active: bool },
    Moved { window: NativeHandle, position: Position },
    Resized { window: NativeHandle, size: Size },
    Minimized { window: NativeHandle },
    Restored { window: NativeHandle },
    /// The native window was destroyed.
    Destroyed { window: NativeHandle },
    /// The platform asked the application to quit.
    Quit,
}

/// A non-blocking supply of native messages.
pub trait MessageSource {
    /// Returns the next pending message, or `None` immediately if the queue is empty.
    fn next_message(&mut self) -> Option<NativeMessage>;
}

/**
Optional observers for window placement changes.

None of these have required behavior; they exist so the application can, for example, halt
its clock while minimized. `window` is `None` when the handle is not registered.
*/
pub trait SystemHooks {
    fn moved(&mut self, _window: Option<WindowId>, _position: Position) {}
    fn resized(&mut self, _window: Option<WindowId>, _size: Size) {}
    fn minimized(&mut self, _window: Option<WindowId>) {}
    fn restored(&mut self, _window: Option<WindowId>) {}
}

impl SystemHooks for () {}
