// SPDX-License-Identifier: MPL-2.0
/*!
A backend with no operating system behind it.

Messages and gamepad states are scripted by the caller. It is what the tests drive, and it
lets the dispatch core run on platforms without a native backend.
*/

use std::collections::VecDeque;

use raw_window_handle::{RawDisplayHandle, RawWindowHandle, Win32WindowHandle, WindowsDisplayHandle};

use crate::coordinates::{Position, Size};
use crate::error::WindowError;
use crate::input::NativeHandle;
use crate::input::gamepad::{DeviceIdentity, GamepadDriver, MAX_GAMEPADS, RawGamepadState};
use crate::message::{MessageSource, NativeMessage};
use crate::surface::SurfaceHandles;
use crate::system::Backend;
use crate::window::{DisplayInfo, PlatformWindow, WindowOptions};

const DEFAULT_DISPLAY: DisplayInfo = DisplayInfo {
    position: Position::new(0, 0),
    size: Size::new(1920, 1080),
};

/// A window that exists only as bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessWindow {
    handle: NativeHandle,
    title: String,
    position: Position,
    size: Size,
    visible: bool,
}

impl HeadlessWindow {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl PlatformWindow for HeadlessWindow {
    fn native_handle(&self) -> NativeHandle {
        self.handle
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        self.title = title.to_owned();
        Ok(())
    }

    fn surface_handles(&self) -> Option<SurfaceHandles> {
        // Shaped like a Win32 window so graphics code sees a plausible handle pair.
        let window = RawWindowHandle::Win32(Win32WindowHandle::new(self.handle.0));
        let display = RawDisplayHandle::Windows(WindowsDisplayHandle::new());
        Some(SurfaceHandles::new(window, display))
    }

    fn destroy(self) -> Result<(), WindowError> {
        logwise::debuginternal_sync!(
            "headless window {handle} destroyed",
            handle = logwise::privacy::LogIt(self.handle.raw())
        );
        Ok(())
    }
}

/**
Scripted backend.

Windows get consecutive handles starting at 1. Gamepad slots start disconnected.
*/
#[derive(Debug)]
pub struct HeadlessBackend {
    queue: VecDeque<NativeMessage>,
    pads: Vec<Option<RawGamepadState>>,
    displays: Vec<DisplayInfo>,
    desktop: Size,
    next_handle: isize,
    fail_next_window: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        HeadlessBackend {
            queue: VecDeque::new(),
            pads: vec![None; MAX_GAMEPADS],
            displays: vec![DEFAULT_DISPLAY],
            desktop: DEFAULT_DISPLAY.size,
            next_handle: 1,
            fail_next_window: false,
        }
    }

    /// Queues a message for the next tick.
    pub fn push_message(&mut self, message: NativeMessage) {
        self.queue.push_back(message);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Connects (or updates) the device in `slot`. Slots past [`MAX_GAMEPADS`] are ignored.
    pub fn set_gamepad(&mut self, slot: usize, state: RawGamepadState) {
        if let Some(pad) = self.pads.get_mut(slot) {
            *pad = Some(state);
        }
    }

    pub fn disconnect_gamepad(&mut self, slot: usize) {
        if let Some(pad) = self.pads.get_mut(slot) {
            *pad = None;
        }
    }

    /// Limits how many slots the driver reports as supported.
    pub fn set_gamepad_slots(&mut self, count: usize) {
        self.pads.resize(count.min(MAX_GAMEPADS), None);
    }

    /// Replaces the display list. The first entry is the primary display.
    pub fn set_displays(&mut self, displays: Vec<DisplayInfo>) {
        self.displays = displays;
    }

    pub fn set_desktop_size(&mut self, size: Size) {
        self.desktop = size;
    }

    /// Makes the next window creation fail with a native error.
    pub fn fail_next_window(&mut self) {
        self.fail_next_window = true;
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSource for HeadlessBackend {
    fn next_message(&mut self) -> Option<NativeMessage> {
        self.queue.pop_front()
    }
}

impl GamepadDriver for HeadlessBackend {
    fn slot_count(&self) -> usize {
        self.pads.len()
    }

    fn query(&mut self, slot: usize) -> Option<RawGamepadState> {
        self.pads.get(slot).copied().flatten()
    }

    fn identity(&self) -> DeviceIdentity {
        DeviceIdentity::XBOX_360
    }
}

impl Backend for HeadlessBackend {
    type Window = HeadlessWindow;

    fn create_window(
        &mut self,
        options: &WindowOptions,
        position: Position,
    ) -> Result<HeadlessWindow, WindowError> {
        if std::mem::take(&mut self.fail_next_window) {
            return Err(WindowError::Native("scripted window creation failure".to_owned()));
        }
        let handle = NativeHandle::from_raw(self.next_handle)
            .ok_or_else(|| WindowError::Native("handle space exhausted".to_owned()))?;
        self.next_handle += 1;
        Ok(HeadlessWindow {
            handle,
            title: options.title.clone(),
            position,
            size: options.size,
            visible: false,
        })
    }

    fn display(&self, target: Option<usize>) -> DisplayInfo {
        target
            .and_then(|index| self.displays.get(index))
            .or_else(|| self.displays.first())
            .copied()
            .unwrap_or(DEFAULT_DISPLAY)
    }

    fn desktop_size(&self) -> Size {
        self.desktop
    }

    fn system_id(&self) -> &'static str {
        "Headless"
    }
}
