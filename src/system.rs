// SPDX-License-Identifier: MPL-2.0
/*!
The system context and its per-tick dispatch loop.

[`System`] owns everything that would otherwise be process-wide: the window table, key and
pointer state, gamepad snapshots, and the sinks they feed. It is driven from a single thread:
call [`System::pump_events`] once per tick and read state between ticks.

# Example

```
use app_system::headless::HeadlessBackend;
use app_system::input::keyboard::{key::KeyboardKey, vk};
use app_system::message::NativeMessage;
use app_system::system::{System, SystemOptions};
use app_system::window::WindowOptions;

let mut system = System::new(HeadlessBackend::new(), SystemOptions::new("demo"));
let window = system.create_window(&WindowOptions::new("main")).unwrap();

system.backend_mut().push_message(NativeMessage::KeyDown { code: vk::VK_SPACE, character: Some(' ') });
assert!(system.pump_events());
assert!(system.keyboard().is_pressed(KeyboardKey::Space));

let handle = system.window_handle(window).unwrap();
system.backend_mut().push_message(NativeMessage::Destroyed { window: handle });
assert!(!system.pump_events());
```
*/

use std::borrow::Cow;

use crate::clock::Clock;
use crate::coordinates::{Position, Size};
use crate::error::WindowError;
use crate::graphics::{Graphics, NullGraphics};
use crate::input::NativeHandle;
use crate::input::gamepad::{DisconnectPolicy, Gamepad, GamepadDriver, Gamepads};
use crate::input::keyboard::{KeyTracker, Keyboard};
use crate::input::mouse::{Mouse, MouseSink, PointerState};
use crate::message::{MessageSource, NativeMessage, SystemHooks};
use crate::window::{DisplayInfo, PlatformWindow, WindowId, WindowOptions, WindowRegistry};

/**
Everything the system needs from a platform.

A backend is a message queue, a gamepad driver and a window factory, plus a few queries.
*/
pub trait Backend: MessageSource + GamepadDriver {
    type Window: PlatformWindow;

    /// Creates and returns a native window placed at `position` in desktop coordinates.
    fn create_window(
        &mut self,
        options: &WindowOptions,
        position: Position,
    ) -> Result<Self::Window, WindowError>;

    /// The display with the given id, falling back to the primary display for `None` or unknown ids.
    fn display(&self, target: Option<usize>) -> DisplayInfo;

    fn desktop_size(&self) -> Size;

    /// A short name for the platform, e.g. `"Windows"`.
    fn system_id(&self) -> &'static str;
}

/// System-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOptions {
    /// Application name.
    pub name: String,
    pub gamepad_disconnect: DisconnectPolicy,
    /// Native window titles are `name` followed by the window's title.
    pub prefix_window_titles: bool,
}

impl SystemOptions {
    pub fn new(name: impl Into<String>) -> Self {
        SystemOptions {
            name: name.into(),
            gamepad_disconnect: DisconnectPolicy::default(),
            prefix_window_titles: false,
        }
    }

    pub fn with_gamepad_disconnect(mut self, policy: DisconnectPolicy) -> Self {
        self.gamepad_disconnect = policy;
        self
    }

    pub fn with_prefixed_window_titles(mut self) -> Self {
        self.prefix_window_titles = true;
        self
    }

    /// The title the native window shows for `title`.
    pub fn native_title<'a>(&self, title: &'a str) -> Cow<'a, str> {
        if self.prefix_window_titles {
            Cow::Owned(format!("{}{}", self.name, title))
        } else {
            Cow::Borrowed(title)
        }
    }
}

impl Default for SystemOptions {
    fn default() -> Self {
        SystemOptions::new("app")
    }
}

/// Formats the system supports for video playback.
pub const VIDEO_FORMATS: &[&str] = &["ogv"];

pub struct System<B: Backend> {
    backend: B,
    options: SystemOptions,
    windows: WindowRegistry<B::Window>,
    current_device: Option<WindowId>,
    keys: KeyTracker,
    pointer: PointerState,
    keyboard: Keyboard,
    mouse: Mouse,
    gamepads: Gamepads,
    graphics: Box<dyn Graphics>,
    hooks: Box<dyn SystemHooks>,
    clock: Clock,
    running: bool,
    keyboard_shown: bool,
}

impl<B: Backend> System<B> {
    pub fn new(backend: B, options: SystemOptions) -> Self {
        logwise::info_sync!(
            "Starting system {name} on {platform}",
            name = logwise::privacy::LogIt(&options.name),
            platform = logwise::privacy::LogIt(backend.system_id())
        );
        let gamepads = Gamepads::new(options.gamepad_disconnect);
        System {
            backend,
            options,
            windows: WindowRegistry::new(),
            current_device: None,
            keys: KeyTracker::new(),
            pointer: PointerState::new(),
            keyboard: Keyboard::new(),
            mouse: Mouse::new(),
            gamepads,
            graphics: Box::new(NullGraphics),
            hooks: Box::new(()),
            clock: Clock::new(),
            running: true,
            keyboard_shown: false,
        }
    }

    pub fn options(&self) -> &SystemOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn set_graphics<G: Graphics + 'static>(&mut self, graphics: G) {
        self.graphics = Box::new(graphics);
    }

    pub fn set_hooks<H: SystemHooks + 'static>(&mut self, hooks: H) {
        self.hooks = Box::new(hooks);
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn mouse_mut(&mut self) -> &mut Mouse {
        &mut self.mouse
    }

    /// The device in slot `index`, for `index < MAX_GAMEPADS`.
    pub fn gamepad(&self, index: usize) -> Option<&Gamepad> {
        self.gamepads.get(index)
    }

    pub fn gamepad_mut(&mut self, index: usize) -> Option<&mut Gamepad> {
        self.gamepads.get_mut(index)
    }

    // windows

    /**
    Creates a window and registers it under the next id.

    If the platform fails to create the native window, the failure is logged and the id is
    still allocated, with no native window behind it. Only a full window table is an error.
    */
    pub fn create_window(&mut self, options: &WindowOptions) -> Result<WindowId, WindowError> {
        if self.windows.is_full() {
            return Err(WindowError::TooManyWindows {
                capacity: crate::window::MAXIMUM_WINDOW_COUNT,
            });
        }
        let options: Cow<'_, WindowOptions> = match self.options.native_title(&options.title) {
            Cow::Borrowed(_) => Cow::Borrowed(options),
            Cow::Owned(title) => Cow::Owned(WindowOptions {
                title,
                ..options.clone()
            }),
        };
        let display = self.backend.display(options.target_display);
        let position = options.placement(&display);
        let window = match self.backend.create_window(&options, position) {
            Ok(window) => Some(window),
            Err(e) => {
                logwise::warn_sync!(
                    "Window creation failed, continuing without a native window: {error}",
                    error = logwise::privacy::LogIt(&e)
                );
                None
            }
        };
        let surface = window.as_ref().and_then(PlatformWindow::surface_handles);
        let id = self
            .windows
            .insert(window, position, options.size, options.mode)?;
        logwise::info_sync!(
            "Created window {id} {title}",
            id = id.index(),
            title = logwise::privacy::LogIt(&options.title)
        );
        self.graphics.window_created(id, surface, &options.renderer);
        Ok(id)
    }

    /**
    Destroys a window. Native failures are logged and ignored; the slot is cleared either way.

    The slot is cleared before the native window is torn down, so the platform's destroy
    notification for it is not mistaken for a shutdown request.
    */
    pub fn destroy_window(&mut self, id: WindowId) -> Result<(), WindowError> {
        let slot = self.windows.remove(id)?;
        if self.current_device == Some(id) {
            self.clear_current();
        }
        self.graphics.window_destroyed(id);
        if let Some(window) = slot.into_window() {
            if let Err(e) = window.destroy() {
                logwise::warn_sync!(
                    "Ignoring failure destroying window {id}: {error}",
                    id = id.index(),
                    error = logwise::privacy::LogIt(&e)
                );
            }
        }
        logwise::info_sync!("Destroyed window {id}", id = id.index());
        Ok(())
    }

    /// Number of window ids allocated so far, including destroyed windows.
    pub fn window_count(&self) -> usize {
        self.windows.count()
    }

    pub fn live_windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.live_ids()
    }

    pub fn window_width(&self, id: WindowId) -> Option<i32> {
        self.windows.get(id).map(|slot| slot.size().width())
    }

    pub fn window_height(&self, id: WindowId) -> Option<i32> {
        self.windows.get(id).map(|slot| slot.size().height())
    }

    pub fn window_position(&self, id: WindowId) -> Option<Position> {
        self.windows.get(id).map(|slot| slot.position())
    }

    /// The native handle, or `None` if the id is not live or has no native window.
    /// The platform window behind `id`, if it still exists.
    pub fn native_window(&self, id: WindowId) -> Option<&B::Window> {
        self.windows.get(id).and_then(|slot| slot.window())
    }

    pub fn window_handle(&self, id: WindowId) -> Option<NativeHandle> {
        self.windows
            .get(id)
            .and_then(|slot| slot.window())
            .map(PlatformWindow::native_handle)
    }

    pub fn show_window(&mut self, id: WindowId) -> Result<(), WindowError> {
        let slot = self.windows.get_mut(id).ok_or(WindowError::NoSuchWindow(id))?;
        if let Some(window) = slot.window_mut() {
            window.show();
        }
        Ok(())
    }

    pub fn set_title(&mut self, id: WindowId, title: &str) -> Result<(), WindowError> {
        let title = self.options.native_title(title);
        let slot = self.windows.get_mut(id).ok_or(WindowError::NoSuchWindow(id))?;
        match slot.window_mut() {
            Some(window) => window.set_title(&title),
            None => Ok(()),
        }
    }

    /// Whether any live window was created fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.windows.live_ids().any(|id| {
            self.windows
                .get(id)
                .is_some_and(|slot| slot.mode() == crate::window::WindowMode::Fullscreen)
        })
    }

    // device context

    /// The window whose device context is current, if any.
    pub fn current_device(&self) -> Option<WindowId> {
        self.current_device
    }

    pub fn make_current(&mut self, id: WindowId) {
        if self.current_device == Some(id) {
            return;
        }
        logwise::debuginternal_sync!(
            "context switch from {from} to {to}",
            from = logwise::privacy::LogIt(self.current_device),
            to = id.index()
        );
        self.current_device = Some(id);
        self.graphics.make_current(id);
    }

    pub fn clear_current(&mut self) {
        logwise::debuginternal_sync!("context clear");
        self.current_device = None;
        self.graphics.clear_current();
    }

    // queries

    /// Last pointer position seen in any window.
    pub fn mouse_pos(&self) -> Position {
        self.pointer.position()
    }

    pub fn desktop_size(&self) -> Size {
        self.backend.desktop_size()
    }

    pub fn system_id(&self) -> &'static str {
        self.backend.system_id()
    }

    pub fn video_formats(&self) -> &'static [&'static str] {
        VIDEO_FORMATS
    }

    pub fn frequency(&self) -> f64 {
        self.clock.frequency()
    }

    pub fn timestamp(&self) -> u64 {
        self.clock.timestamp()
    }

    pub fn show_keyboard(&mut self) {
        self.keyboard_shown = true;
    }

    pub fn hide_keyboard(&mut self) {
        self.keyboard_shown = false;
    }

    pub fn shows_keyboard(&self) -> bool {
        self.keyboard_shown
    }

    // dispatch

    /// Requests that the loop stop. The next [`Self::pump_events`] returns `false`.
    pub fn stop(&mut self) {
        if self.running {
            logwise::info_sync!("Shutdown requested");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /**
    Runs one tick: drains every pending native message, then polls gamepads once.

    Never blocks. Returns `false` once a shutdown has been observed (a `Quit` message, a
    registered window being destroyed by the platform, or [`Self::stop`]), and keeps returning
    `false` afterwards.
    */
    pub fn pump_events(&mut self) -> bool {
        while let Some(message) = self.backend.next_message() {
            self.dispatch(message);
        }
        self.gamepads.poll_once(&mut self.backend);
        self.running
    }

    fn dispatch(&mut self, message: NativeMessage) {
        match message {
            NativeMessage::KeyDown { code, character } => {
                self.keys.key_down(code, character, &mut self.keyboard);
            }
            NativeMessage::KeyUp { code, character } => {
                self.keys.key_up(code, character, &mut self.keyboard);
            }
            NativeMessage::Mouse { window, message, x, y } => {
                let id = self.windows.id_for_handle(window);
                self.pointer.dispatch(id, message, x, y, &mut self.mouse);
            }
            NativeMessage::Activated { window, active } => {
                let id = self.windows.id_for_handle(window);
                self.mouse.activated(id, active);
            }
            NativeMessage::Moved { window, position } => {
                let id = self.windows.id_for_handle(window);
                if let Some(id) = id {
                    self.windows.set_position(id, position);
                }
                self.hooks.moved(id, position);
            }
            NativeMessage::Resized { window, size } => {
                let id = self.windows.id_for_handle(window);
                if let Some(id) = id {
                    self.windows.set_size(id, size);
                }
                self.hooks.resized(id, size);
            }
            NativeMessage::Minimized { window } => {
                let id = self.windows.id_for_handle(window);
                self.hooks.minimized(id);
            }
            NativeMessage::Restored { window } => {
                let id = self.windows.id_for_handle(window);
                self.hooks.restored(id);
            }
            NativeMessage::Destroyed { window } => {
                if let Some(id) = self.windows.id_for_handle(window) {
                    // The native window is already gone.
                    let _ = self.windows.forget_native(id);
                    self.stop();
                } else {
                    logwise::debuginternal_sync!(
                        "Ignoring destroy of unregistered window {window}",
                        window = logwise::privacy::LogIt(window)
                    );
                }
            }
            NativeMessage::Quit => self.stop(),
        }
    }
}

impl System<crate::PlatformBackend> {
    /// A system on this platform's native backend (the headless one where there is none).
    pub fn native(options: SystemOptions) -> Result<Self, WindowError> {
        Ok(System::new(crate::sys::platform_backend()?, options))
    }
}

impl<B: Backend> Drop for System<B> {
    fn drop(&mut self) {
        for (id, slot) in self.windows.drain() {
            self.graphics.window_destroyed(id);
            if let Some(window) = slot.into_window() {
                if let Err(e) = window.destroy() {
                    logwise::warn_sync!(
                        "Ignoring failure destroying window {id}: {error}",
                        id = id.index(),
                        error = logwise::privacy::LogIt(&e)
                    );
                }
            }
        }
    }
}

impl<B: Backend + std::fmt::Debug> std::fmt::Debug for System<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System")
            .field("backend", &self.backend)
            .field("options", &self.options)
            .field("window_count", &self.windows.count())
            .field("current_device", &self.current_device)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::headless::HeadlessBackend;
    use crate::input::gamepad::RawGamepadState;
    use crate::input::keyboard::{KeyEvent, key::KeyboardKey};
    use crate::input::mouse::{MouseButton, MouseEvent, MouseMessage};
    use crate::surface::SurfaceHandles;
    use crate::window::RendererOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn system() -> System<HeadlessBackend> {
        System::new(HeadlessBackend::new(), SystemOptions::new("test"))
    }

    #[derive(Debug, Clone, PartialEq)]
    enum GraphicsCall {
        Created(WindowId, bool),
        Destroyed(WindowId),
        Current(WindowId),
        Cleared,
    }

    struct Recorder(Rc<RefCell<Vec<GraphicsCall>>>);

    impl Graphics for Recorder {
        fn window_created(&mut self, window: WindowId, surface: Option<SurfaceHandles>, _options: &RendererOptions) {
            self.0.borrow_mut().push(GraphicsCall::Created(window, surface.is_some()));
        }
        fn window_destroyed(&mut self, window: WindowId) {
            self.0.borrow_mut().push(GraphicsCall::Destroyed(window));
        }
        fn make_current(&mut self, window: WindowId) {
            self.0.borrow_mut().push(GraphicsCall::Current(window));
        }
        fn clear_current(&mut self) {
            self.0.borrow_mut().push(GraphicsCall::Cleared);
        }
    }

    #[test]
    fn empty_tick_keeps_running() {
        let mut system = system();
        assert!(system.pump_events());
        assert!(system.pump_events());
    }

    #[test]
    fn auto_repeat_collapses_to_one_down() {
        let mut system = system();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        system.keyboard_mut().set_listener(move |e| sink.borrow_mut().push(e));
        for _ in 0..3 {
            system.backend_mut().push_message(NativeMessage::KeyDown { code: b'A', character: Some('a') });
        }
        system.backend_mut().push_message(NativeMessage::KeyUp { code: b'A', character: Some('a') });
        assert!(system.pump_events());
        assert_eq!(
            *events.borrow(),
            vec![
                KeyEvent::Down { key: KeyboardKey::A, character: Some('a') },
                KeyEvent::Up { key: KeyboardKey::A, character: Some('a') },
            ]
        );
    }

    #[test]
    fn destroy_of_registered_window_stops_the_loop() {
        let mut system = system();
        let id = system.create_window(&WindowOptions::new("main")).unwrap();
        let handle = system.window_handle(id).unwrap();
        system.backend_mut().push_message(NativeMessage::Destroyed { window: handle });
        assert!(!system.pump_events());
        assert!(!system.pump_events());
    }

    #[test]
    fn native_destroy_detaches_the_window_but_keeps_the_id() {
        let mut system = system();
        let id = system.create_window(&WindowOptions::new("main")).unwrap();
        let handle = system.window_handle(id).unwrap();
        system.backend_mut().push_message(NativeMessage::Destroyed { window: handle });
        assert!(!system.pump_events());
        assert_eq!(system.window_handle(id), None);
        assert_eq!(system.window_width(id), Some(800));
        assert_eq!(system.window_count(), 1);
        assert_eq!(system.live_windows().collect::<Vec<_>>(), vec![id]);
    }

    #[test]
    fn window_titles_can_carry_the_application_name() {
        let mut plain = system();
        let id = plain.create_window(&WindowOptions::new("Main")).unwrap();
        assert_eq!(plain.native_window(id).unwrap().title(), "Main");

        let options = SystemOptions::new("Game: ").with_prefixed_window_titles();
        let mut prefixed = System::new(HeadlessBackend::new(), options);
        let id = prefixed.create_window(&WindowOptions::new("Main")).unwrap();
        assert_eq!(prefixed.native_window(id).unwrap().title(), "Game: Main");
        prefixed.set_title(id, "Menu").unwrap();
        assert_eq!(prefixed.native_window(id).unwrap().title(), "Game: Menu");
    }

    #[test]
    fn destroy_of_unknown_window_is_ignored() {
        let mut system = system();
        system.create_window(&WindowOptions::new("main")).unwrap();
        let stranger = NativeHandle::from_raw(999).unwrap();
        system.backend_mut().push_message(NativeMessage::Destroyed { window: stranger });
        assert!(system.pump_events());
    }

    #[test]
    fn quit_and_stop_end_the_loop() {
        let mut system = system();
        system.backend_mut().push_message(NativeMessage::Quit);
        assert!(!system.pump_events());

        let mut system = self::system();
        system.stop();
        assert!(!system.is_running());
        assert!(!system.pump_events());
    }

    #[test]
    fn messages_after_shutdown_in_same_tick_still_dispatch() {
        let mut system = system();
        system.backend_mut().push_message(NativeMessage::Quit);
        system.backend_mut().push_message(NativeMessage::KeyDown { code: b'B', character: None });
        assert!(!system.pump_events());
        assert!(system.keyboard().is_pressed(KeyboardKey::B));
        assert_eq!(system.backend().pending(), 0);
    }

    #[test]
    fn window_ids_and_sizes() {
        let mut system = system();
        let ids: Vec<_> = (0..3)
            .map(|i| {
                system
                    .create_window(&WindowOptions::new("w").with_size(Size::new(100 + i, 50 + i)))
                    .unwrap()
            })
            .collect();
        assert_eq!(ids.iter().map(|id| id.index()).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(system.window_count(), 3);
        assert_eq!(system.window_width(ids[1]), Some(101));
        assert_eq!(system.window_height(ids[2]), Some(52));
        assert_eq!(system.window_width(WindowId::new(3)), None);
    }

    #[test]
    fn window_table_capacity() {
        let mut system = system();
        for _ in 0..crate::window::MAXIMUM_WINDOW_COUNT {
            system.create_window(&WindowOptions::new("w")).unwrap();
        }
        assert_eq!(
            system.create_window(&WindowOptions::new("w")),
            Err(WindowError::TooManyWindows { capacity: crate::window::MAXIMUM_WINDOW_COUNT })
        );
    }

    #[test]
    fn failed_native_window_still_gets_an_id() {
        let mut system = system();
        let calls = Rc::new(RefCell::new(Vec::new()));
        system.set_graphics(Recorder(calls.clone()));
        system.backend_mut().fail_next_window();
        let id = system.create_window(&WindowOptions::new("broken")).unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(system.window_handle(id), None);
        assert_eq!(system.window_width(id), Some(800));
        assert!(system.show_window(id).is_ok());
        assert!(system.set_title(id, "still broken").is_ok());
        assert_eq!(*calls.borrow(), vec![GraphicsCall::Created(id, false)]);
    }

    #[test]
    fn destroy_window_does_not_stop_the_loop() {
        let mut system = system();
        let calls = Rc::new(RefCell::new(Vec::new()));
        system.set_graphics(Recorder(calls.clone()));
        let id = system.create_window(&WindowOptions::new("main")).unwrap();
        let handle = system.window_handle(id).unwrap();
        system.make_current(id);
        system.destroy_window(id).unwrap();
        // The platform reports the destroy after the slot is gone.
        system.backend_mut().push_message(NativeMessage::Destroyed { window: handle });
        assert!(system.pump_events());
        assert_eq!(system.current_device(), None);
        assert_eq!(system.destroy_window(id), Err(WindowError::NoSuchWindow(id)));
        assert_eq!(
            *calls.borrow(),
            vec![
                GraphicsCall::Created(id, true),
                GraphicsCall::Current(id),
                GraphicsCall::Cleared,
                GraphicsCall::Destroyed(id),
            ]
        );
    }

    #[test]
    fn make_current_skips_redundant_switches() {
        let mut system = system();
        let calls = Rc::new(RefCell::new(Vec::new()));
        system.set_graphics(Recorder(calls.clone()));
        let a = system.create_window(&WindowOptions::new("a")).unwrap();
        let b = system.create_window(&WindowOptions::new("b")).unwrap();
        calls.borrow_mut().clear();
        system.make_current(a);
        system.make_current(a);
        system.make_current(b);
        assert_eq!(system.current_device(), Some(b));
        system.clear_current();
        assert_eq!(
            *calls.borrow(),
            vec![GraphicsCall::Current(a), GraphicsCall::Current(b), GraphicsCall::Cleared]
        );
    }

    #[test]
    fn mouse_messages_resolve_window_ids() {
        let mut system = system();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        system.mouse_mut().set_listener(move |e| sink.borrow_mut().push(e));
        let _first = system.create_window(&WindowOptions::new("a")).unwrap();
        let second = system.create_window(&WindowOptions::new("b")).unwrap();
        let handle = system.window_handle(second).unwrap();
        let stranger = NativeHandle::from_raw(77).unwrap();
        let backend = system.backend_mut();
        backend.push_message(NativeMessage::Mouse { window: handle, message: MouseMessage::Move, x: 10, y: 20 });
        backend.push_message(NativeMessage::Mouse {
            window: handle,
            message: MouseMessage::Press(MouseButton::Right),
            x: 11,
            y: 21,
        });
        backend.push_message(NativeMessage::Mouse { window: stranger, message: MouseMessage::Move, x: 5, y: 6 });
        backend.push_message(NativeMessage::Activated { window: handle, active: true });
        assert!(system.pump_events());

        assert_eq!(system.mouse_pos(), Position::new(5, 6));
        assert!(system.mouse().button_state(crate::input::mouse::MOUSE_BUTTON_RIGHT));
        assert_eq!(system.mouse().active_window(), Some(second));
        let events = events.borrow();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], MouseEvent::Moved { window: Some(second), x: 10, y: 20 });
        assert_eq!(events[2], MouseEvent::Moved { window: None, x: 5, y: 6 });
    }

    #[derive(Default)]
    struct Hooks {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SystemHooks for Hooks {
        fn moved(&mut self, window: Option<WindowId>, position: Position) {
            self.log.borrow_mut().push(format!("moved {window:?} {position:?}"));
        }
        fn minimized(&mut self, window: Option<WindowId>) {
            self.log.borrow_mut().push(format!("minimized {window:?}"));
        }
        fn restored(&mut self, window: Option<WindowId>) {
            self.log.borrow_mut().push(format!("restored {window:?}"));
        }
    }

    #[test]
    fn placement_changes_update_slots_and_reach_hooks() {
        let mut system = system();
        let log = Rc::new(RefCell::new(Vec::new()));
        system.set_hooks(Hooks { log: log.clone() });
        let id = system.create_window(&WindowOptions::new("a")).unwrap();
        let handle = system.window_handle(id).unwrap();
        let backend = system.backend_mut();
        backend.push_message(NativeMessage::Moved { window: handle, position: Position::new(3, 4) });
        backend.push_message(NativeMessage::Resized { window: handle, size: Size::new(320, 240) });
        backend.push_message(NativeMessage::Minimized { window: handle });
        backend.push_message(NativeMessage::Restored { window: handle });
        assert!(system.pump_events());
        assert_eq!(system.window_position(id), Some(Position::new(3, 4)));
        assert_eq!(system.window_width(id), Some(320));
        assert_eq!(system.window_height(id), Some(240));
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(log.borrow()[1], format!("minimized {:?}", Some(id)));
    }

    #[test]
    fn gamepads_are_polled_after_messages() {
        let mut system = system();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        system
            .gamepad_mut(0)
            .unwrap()
            .set_button_listener(move |button, value| sink.borrow_mut().push((button, value)));
        let mut state = RawGamepadState::default();
        state.buttons.0 = crate::input::gamepad::GamepadButtons::A;
        system.backend_mut().set_gamepad(0, state);
        assert!(system.pump_events());
        assert_eq!(*seen.borrow(), vec![(0, 1.0)]);
        assert!(system.gamepad(0).unwrap().is_connected());
        assert!(system.pump_events());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn queries() {
        let mut system = system();
        assert_eq!(system.system_id(), "Headless");
        assert_eq!(system.desktop_size(), Size::new(1920, 1080));
        assert_eq!(system.video_formats(), &["ogv"]);
        assert_eq!(system.frequency(), 1e9);
        assert!(!system.shows_keyboard());
        system.show_keyboard();
        assert!(system.shows_keyboard());
        system.hide_keyboard();
        assert!(!system.shows_keyboard());
        assert_eq!(system.options().name, "test");
    }

    #[test]
    fn centered_on_target_display() {
        let mut backend = HeadlessBackend::new();
        backend.set_displays(vec![
            DisplayInfo { position: Position::new(0, 0), size: Size::new(1920, 1080) },
            DisplayInfo { position: Position::new(1920, 0), size: Size::new(1000, 1000) },
        ]);
        let mut system = System::new(backend, SystemOptions::default());
        let id = system
            .create_window(&WindowOptions::new("a").with_size(Size::new(200, 100)).with_target_display(1))
            .unwrap();
        assert_eq!(system.window_position(id), Some(Position::new(1920 + 400, 450)));
    }
}
