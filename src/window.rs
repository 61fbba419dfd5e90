// SPDX-License-Identifier: MPL-2.0
use std::fmt::Display;

use crate::coordinates::{Position, Size};
use crate::error::WindowError;
use crate::input::NativeHandle;
use crate::surface::SurfaceHandles;

/// Capacity of the window table.
pub const MAXIMUM_WINDOW_COUNT: usize = 10;

/**
Small dense id the application uses to refer to a window.

Ids are handed out from 0 in creation order and are never reused within a run, even after
the window they named is destroyed.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(usize);

impl WindowId {
    pub const fn new(index: usize) -> Self {
        WindowId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindowMode {
    /// Caption, system menu and minimize box.
    #[default]
    Windowed,
    /// No decorations.
    Borderless,
    /// Exclusive fullscreen; the display mode is switched to the window size if possible.
    Fullscreen,
}

/// Options forwarded to the graphics collaborator when a window is created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RendererOptions {
    pub antialiasing: u32,
    pub depth_buffer_bits: u32,
    pub stencil_buffer_bits: u32,
}

impl Default for RendererOptions {
    fn default() -> Self {
        RendererOptions {
            antialiasing: 1,
            depth_buffer_bits: 16,
            stencil_buffer_bits: 8,
        }
    }
}

/// A display's area in desktop coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayInfo {
    pub position: Position,
    pub size: Size,
}

/**
What to create.

A negative `position` coordinate centers the window on that axis of the target display;
otherwise the coordinate is relative to the display's origin.

# Example
```
use app_system::coordinates::{Position, Size};
use app_system::window::{DisplayInfo, WindowOptions};

let display = DisplayInfo { position: Position::new(1920, 0), size: Size::new(1920, 1080) };
let options = WindowOptions::new("Game").with_size(Size::new(800, 600));
assert_eq!(options.placement(&display), Position::new(1920 + 560, 240));
```
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub position: Position,
    pub size: Size,
    pub mode: WindowMode,
    /// `None` selects the primary display.
    pub target_display: Option<usize>,
    pub renderer: RendererOptions,
}

impl WindowOptions {
    /// A centered 800x600 window on the primary display.
    pub fn new(title: impl Into<String>) -> Self {
        WindowOptions {
            title: title.into(),
            position: Position::new(-1, -1),
            size: Size::new(800, 600),
            mode: WindowMode::Windowed,
            target_display: None,
            renderer: RendererOptions::default(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_mode(mut self, mode: WindowMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_target_display(mut self, display: usize) -> Self {
        self.target_display = Some(display);
        self
    }

    pub fn with_renderer(mut self, renderer: RendererOptions) -> Self {
        self.renderer = renderer;
        self
    }

    /// Where the window lands on `display`, in desktop coordinates.
    pub fn placement(&self, display: &DisplayInfo) -> Position {
        let origin = display.position;
        match self.mode {
            WindowMode::Fullscreen => origin,
            WindowMode::Windowed | WindowMode::Borderless => {
                let axis = |requested: i32, available: i32, wanted: i32| {
                    if requested < 0 {
                        available.saturating_sub(wanted) / 2
                    } else {
                        requested
                    }
                };
                Position::new(
                    origin
                        .x()
                        .saturating_add(axis(self.position.x(), display.size.width(), self.size.width())),
                    origin
                        .y()
                        .saturating_add(axis(self.position.y(), display.size.height(), self.size.height())),
                )
            }
        }
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        WindowOptions::new("")
    }
}

/**
The narrow capability the dispatch core needs from a native window.

Creation belongs to [`crate::system::Backend::create_window`], since it usually needs
backend-wide state such as a registered window class.
*/
pub trait PlatformWindow {
    fn native_handle(&self) -> NativeHandle;
    fn show(&mut self);
    fn set_title(&mut self, title: &str) -> Result<(), WindowError>;
    /// Raw handles for the graphics collaborator, if this platform can express them.
    fn surface_handles(&self) -> Option<SurfaceHandles>;
    fn destroy(self) -> Result<(), WindowError>
    where
        Self: Sized;
}

/// A registered window: the native window (absent if creation failed) and its last-known placement.
#[derive(Debug)]
pub struct WindowSlot<W> {
    window: Option<W>,
    position: Position,
    size: Size,
    mode: WindowMode,
}

impl<W> WindowSlot<W> {
    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }

    pub fn into_window(self) -> Option<W> {
        self.window
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }
}

/// Fixed-capacity table from [`WindowId`] to native window.
#[derive(Debug)]
pub struct WindowRegistry<W> {
    slots: Vec<Option<WindowSlot<W>>>,
}

impl<W: PlatformWindow> WindowRegistry<W> {
    pub fn new() -> Self {
        WindowRegistry {
            slots: Vec::with_capacity(MAXIMUM_WINDOW_COUNT),
        }
    }

    /// Number of ids allocated so far, live or destroyed.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAXIMUM_WINDOW_COUNT
    }

    /// Registers a window under the next id.
    pub fn insert(
        &mut self,
        window: Option<W>,
        position: Position,
        size: Size,
        mode: WindowMode,
    ) -> Result<WindowId, WindowError> {
        if self.is_full() {
            return Err(WindowError::TooManyWindows {
                capacity: MAXIMUM_WINDOW_COUNT,
            });
        }
        let id = WindowId(self.slots.len());
        self.slots.push(Some(WindowSlot {
            window,
            position,
            size,
            mode,
        }));
        Ok(id)
    }

    /// Clears the slot. The id is not reused.
    pub fn remove(&mut self, id: WindowId) -> Result<WindowSlot<W>, WindowError> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(WindowError::NoSuchWindow(id))
    }

    /// Detaches the native window from a slot whose window the platform already destroyed.
    /// The id and its last-known placement stay registered.
    pub fn forget_native(&mut self, id: WindowId) -> Option<W> {
        self.get_mut(id).and_then(|slot| slot.window.take())
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowSlot<W>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowSlot<W>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn id_for_handle(&self, handle: NativeHandle) -> Option<WindowId> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .and_then(|s| s.window.as_ref())
                .is_some_and(|w| w.native_handle() == handle)
        })
        .map(WindowId)
    }

    pub fn set_position(&mut self, id: WindowId, position: Position) {
        if let Some(slot) = self.get_mut(id) {
            slot.position = position;
        }
    }

    pub fn set_size(&mut self, id: WindowId, size: Size) {
        if let Some(slot) = self.get_mut(id) {
            slot.size = size;
        }
    }

    /// Ids of windows that have not been destroyed, ascending.
    pub fn live_ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| WindowId(index))
    }

    /// Empties the table, returning the live slots for teardown.
    pub fn drain(&mut self) -> Vec<(WindowId, WindowSlot<W>)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.take().map(|s| (WindowId(index), s)))
            .collect()
    }
}

impl<W: PlatformWindow> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::num::NonZeroIsize;

    #[derive(Debug)]
    struct Fake(isize);

    impl PlatformWindow for Fake {
        fn native_handle(&self) -> NativeHandle {
            NativeHandle(NonZeroIsize::new(self.0).unwrap())
        }
        fn show(&mut self) {}
        fn set_title(&mut self, _title: &str) -> Result<(), WindowError> {
            Ok(())
        }
        fn surface_handles(&self) -> Option<SurfaceHandles> {
            None
        }
        fn destroy(self) -> Result<(), WindowError> {
            Ok(())
        }
    }

    fn insert(registry: &mut WindowRegistry<Fake>, raw: isize) -> WindowId {
        registry
            .insert(Some(Fake(raw)), Position::default(), Size::new(640, 480), WindowMode::Windowed)
            .unwrap()
    }

    #[test]
    fn ids_are_dense_and_never_reused() {
        let mut registry = WindowRegistry::new();
        let a = insert(&mut registry, 1);
        let b = insert(&mut registry, 2);
        registry.remove(a).unwrap();
        let c = insert(&mut registry, 3);
        registry.remove(b).unwrap();
        let d = insert(&mut registry, 4);
        assert_eq!(
            [a, b, c, d].map(WindowId::index),
            [0, 1, 2, 3]
        );
        assert_eq!(registry.count(), 4);
        assert_eq!(registry.live_ids().collect::<Vec<_>>(), vec![c, d]);
    }

    #[test]
    fn lookup_by_handle() {
        let mut registry = WindowRegistry::new();
        let a = insert(&mut registry, 10);
        let b = insert(&mut registry, 20);
        let handle = |raw| NativeHandle::from_raw(raw).unwrap();
        assert_eq!(registry.id_for_handle(handle(20)), Some(b));
        assert_eq!(registry.id_for_handle(handle(10)), Some(a));
        assert_eq!(registry.id_for_handle(handle(30)), None);
        registry.remove(a).unwrap();
        assert_eq!(registry.id_for_handle(handle(10)), None);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut registry = WindowRegistry::new();
        for raw in 1..=MAXIMUM_WINDOW_COUNT as isize {
            insert(&mut registry, raw);
        }
        assert_eq!(
            registry.insert(None, Position::default(), Size::default(), WindowMode::Windowed),
            Err(WindowError::TooManyWindows { capacity: MAXIMUM_WINDOW_COUNT })
        );
    }

    #[test]
    fn remove_twice_fails() {
        let mut registry = WindowRegistry::new();
        let a = insert(&mut registry, 1);
        assert!(registry.remove(a).is_ok());
        assert_eq!(registry.remove(a).unwrap_err(), WindowError::NoSuchWindow(a));
        assert_eq!(
            registry.remove(WindowId::new(7)).unwrap_err(),
            WindowError::NoSuchWindow(WindowId::new(7))
        );
    }

    #[test]
    fn empty_slots_hold_placement() {
        let mut registry: WindowRegistry<Fake> = WindowRegistry::new();
        let id = registry
            .insert(None, Position::new(5, 6), Size::new(7, 8), WindowMode::Borderless)
            .unwrap();
        registry.set_size(id, Size::new(9, 10));
        let slot = registry.get(id).unwrap();
        assert!(slot.window().is_none());
        assert_eq!(slot.size(), Size::new(9, 10));
        assert_eq!(slot.position(), Position::new(5, 6));
        assert_eq!(slot.mode(), WindowMode::Borderless);
    }

    #[test]
    fn placement_rules() {
        let display = DisplayInfo {
            position: Position::new(100, 50),
            size: Size::new(1000, 800),
        };
        let windowed = WindowOptions::new("t").with_size(Size::new(400, 200));
        assert_eq!(windowed.placement(&display), Position::new(400, 350));

        let explicit = windowed.clone().with_position(Position::new(10, -1));
        assert_eq!(explicit.placement(&display), Position::new(110, 350));

        let fullscreen = windowed.with_mode(WindowMode::Fullscreen).with_position(Position::new(10, 10));
        assert_eq!(fullscreen.placement(&display), Position::new(100, 50));
    }

    #[test]
    fn placement_saturates_at_the_coordinate_limits() {
        let display = DisplayInfo {
            position: Position::new(1920, 0),
            size: Size::new(1280, 1024),
        };
        let far = WindowOptions::new("t").with_position(Position::new(i32::MAX - 10, 0));
        assert_eq!(far.placement(&display), Position::new(i32::MAX, 0));

        let low = DisplayInfo {
            position: Position::new(i32::MIN, i32::MIN),
            size: Size::new(i32::MIN, 0),
        };
        let centered = WindowOptions::new("t").with_size(Size::new(i32::MAX, 10));
        assert_eq!(centered.placement(&low), Position::new(i32::MIN, i32::MIN));
    }
}
