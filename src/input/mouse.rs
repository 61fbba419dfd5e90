// SPDX-License-Identifier: MPL-2.0
//! Pointer input translation.
//!
//! Native mouse messages carry a window handle and window-local coordinates. The dispatch loop
//! resolves the handle to a [`WindowId`] and hands the message to [`PointerState::dispatch`],
//! which records the position and forwards one event to a [`MouseSink`].

use crate::coordinates::Position;
use crate::window::WindowId;

/// Button index of the left (primary) button.
pub const MOUSE_BUTTON_LEFT: u8 = 0;
/// Button index of the right (secondary) button.
pub const MOUSE_BUTTON_RIGHT: u8 = 1;
/// Button index of the middle button.
pub const MOUSE_BUTTON_MIDDLE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The framework's button index: 0 = left, 1 = right, 2 = middle.
    pub const fn index(self) -> u8 {
        match self {
            MouseButton::Left => MOUSE_BUTTON_LEFT,
            MouseButton::Right => MOUSE_BUTTON_RIGHT,
            MouseButton::Middle => MOUSE_BUTTON_MIDDLE,
        }
    }
}

/// The kind of a native pointer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMessage {
    Move,
    Press(MouseButton),
    Release(MouseButton),
}

/**
Receives normalized pointer events.

`window` is `None` when the native handle could not be resolved, which happens for messages
delivered while a window is being created or torn down.
*/
pub trait MouseSink {
    fn moved(&mut self, window: Option<WindowId>, x: i32, y: i32);
    fn pressed(&mut self, window: Option<WindowId>, button: u8, x: i32, y: i32);
    fn released(&mut self, window: Option<WindowId>, button: u8, x: i32, y: i32);
    fn activated(&mut self, window: Option<WindowId>, active: bool);
}

/// Last observed pointer position, shared by all windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerState {
    last: Position,
}

impl PointerState {
    pub const fn new() -> Self {
        PointerState {
            last: Position::new(0, 0),
        }
    }

    pub const fn position(&self) -> Position {
        self.last
    }

    /// Records the position and emits exactly one event for `message`.
    pub fn dispatch<S: MouseSink + ?Sized>(
        &mut self,
        window: Option<WindowId>,
        message: MouseMessage,
        x: i32,
        y: i32,
        sink: &mut S,
    ) {
        self.last = Position::new(x, y);
        match message {
            MouseMessage::Move => sink.moved(window, x, y),
            MouseMessage::Press(button) => sink.pressed(window, button.index(), x, y),
            MouseMessage::Release(button) => sink.released(window, button.index(), x, y),
        }
    }
}

/// Where the pointer was last seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseWindowLocation {
    pos_x: i32,
    pos_y: i32,
    window: Option<WindowId>,
}

impl MouseWindowLocation {
    pub fn pos_x(&self) -> i32 {
        self.pos_x
    }

    pub fn pos_y(&self) -> i32 {
        self.pos_y
    }

    pub fn window(&self) -> Option<WindowId> {
        self.window
    }
}

/// A pointer event as delivered to a [`Mouse`] listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Moved {
        window: Option<WindowId>,
        x: i32,
        y: i32,
    },
    Pressed {
        window: Option<WindowId>,
        button: u8,
        x: i32,
        y: i32,
    },
    Released {
        window: Option<WindowId>,
        button: u8,
        x: i32,
        y: i32,
    },
    Activated {
        window: Option<WindowId>,
        active: bool,
    },
}

/// The stock [`MouseSink`]: pollable button/location state plus an optional listener.
pub struct Mouse {
    location: Option<MouseWindowLocation>,
    buttons: [bool; 3],
    active_window: Option<WindowId>,
    listener: Option<Box<dyn FnMut(MouseEvent)>>,
}

impl Mouse {
    pub fn new() -> Self {
        Mouse {
            location: None,
            buttons: [false; 3],
            active_window: None,
            listener: None,
        }
    }

    pub fn set_listener<F: FnMut(MouseEvent) + 'static>(&mut self, listener: F) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// The most recent pointer location, or `None` before any pointer message.
    pub fn window_pos(&self) -> Option<MouseWindowLocation> {
        self.location
    }

    /// Whether the button with the given index is held. Unknown indices are never held.
    pub fn button_state(&self, button: u8) -> bool {
        self.buttons.get(button as usize).copied().unwrap_or(false)
    }

    /// The window most recently reported as activated, if it has not since been deactivated.
    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    fn set_location(&mut self, window: Option<WindowId>, x: i32, y: i32) {
        let location = MouseWindowLocation {
            pos_x: x,
            pos_y: y,
            window,
        };
        logwise::debuginternal_sync!(
            "Set mouse window location {location}",
            location = logwise::privacy::LogIt(&location)
        );
        self.location = Some(location);
    }

    fn set_button_state(&mut self, button: u8, down: bool) {
        logwise::debuginternal_sync!("Set mouse key {key} state {down}", key = button, down = down);
        if let Some(slot) = self.buttons.get_mut(button as usize) {
            *slot = down;
        }
    }

    fn emit(&mut self, event: MouseEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mouse")
            .field("location", &self.location)
            .field("buttons", &self.buttons)
            .field("active_window", &self.active_window)
            .finish_non_exhaustive()
    }
}

impl MouseSink for Mouse {
    fn moved(&mut self, window: Option<WindowId>, x: i32, y: i32) {
        self.set_location(window, x, y);
        self.emit(MouseEvent::Moved { window, x, y });
    }

    fn pressed(&mut self, window: Option<WindowId>, button: u8, x: i32, y: i32) {
        self.set_location(window, x, y);
        self.set_button_state(button, true);
        self.emit(MouseEvent::Pressed { window, button, x, y });
    }

    fn released(&mut self, window: Option<WindowId>, button: u8, x: i32, y: i32) {
        self.set_location(window, x, y);
        self.set_button_state(button, false);
        self.emit(MouseEvent::Released { window, button, x, y });
    }

    fn activated(&mut self, window: Option<WindowId>, active: bool) {
        if active {
            self.active_window = window;
        } else if self.active_window == window {
            self.active_window = None;
        }
        self.emit(MouseEvent::Activated { window, active });
    }
}
