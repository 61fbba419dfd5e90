// SPDX-License-Identifier: MPL-2.0
use std::cell::RefCell;
use std::collections::VecDeque;
use std::num::NonZeroIsize;

use raw_window_handle::{RawDisplayHandle, RawWindowHandle, Win32WindowHandle, WindowsDisplayHandle};
use windows::Win32::Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    CDS_FULLSCREEN, CDS_TYPE, ChangeDisplaySettingsW, DEVMODEW, DISP_CHANGE_SUCCESSFUL,
    DM_BITSPERPEL, DM_PELSHEIGHT, DM_PELSWIDTH, EnumDisplayMonitors, GetMonitorInfoW, HDC,
    HMONITOR, MONITORINFO, UpdateWindow,
};
use windows::Win32::System::Environment::GetCommandLineW;
use windows::Win32::System::LibraryLoader::{GetModuleHandleW, GetProcAddress, LoadLibraryW};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyboardState, ToUnicode};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CS_HREDRAW, CS_OWNDC, CS_VREDRAW, CreateWindowExW, DefWindowProcW,
    DestroyWindow, DispatchMessageW, GetDesktopWindow, GetWindowRect, IDC_ARROW, LoadCursorW,
    MB_ICONERROR, MB_OK, MONITORINFOF_PRIMARY, MSG, MessageBoxW, PM_REMOVE, PeekMessageW,
    RegisterClassExW, SC_KEYMENU, SC_MAXIMIZE, SC_MINIMIZE, SC_MONITORPOWER, SC_RESTORE,
    SC_SCREENSAVE, SIZE_MINIMIZED, SW_SHOWDEFAULT, SetCursor, SetWindowTextW, ShowCursor,
    ShowWindow, UnregisterClassW, WA_INACTIVE, WINDOW_EX_STYLE, WINDOW_STYLE, WM_ACTIVATE,
    WM_DESTROY, WM_ERASEBKGND, WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP,
    WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEMOVE, WM_MOVE, WM_QUIT, WM_RBUTTONDOWN, WM_RBUTTONUP,
    WM_SIZE, WM_SYSCOMMAND, WM_SYSKEYDOWN, WM_SYSKEYUP, WNDCLASSEXW, WS_CAPTION, WS_CLIPCHILDREN,
    WS_CLIPSIBLINGS, WS_EX_APPWINDOW, WS_EX_WINDOWEDGE, WS_MINIMIZEBOX, WS_POPUP, WS_SYSMENU,
};
use windows::core::{BOOL, HSTRING, PCWSTR, s, w};

use crate::coordinates::{Position, Size};
use crate::error::WindowError;
use crate::input::NativeHandle;
use crate::input::gamepad::{DeviceIdentity, GamepadButtons, GamepadDriver, RawGamepadState};
use crate::input::mouse::{MouseButton, MouseMessage};
use crate::message::{MessageSource, NativeMessage};
use crate::surface::SurfaceHandles;
use crate::system::Backend;
use crate::window::{DisplayInfo, PlatformWindow, WindowMode, WindowOptions};

const WINDOW_CLASS: PCWSTR = w!("app_system_window");

/// XInput serves at most this many controllers.
const XUSER_MAX_COUNT: usize = 4;

thread_local! {
    // Filled by window_proc during DispatchMessageW, drained by next_message.
    static PENDING: RefCell<VecDeque<NativeMessage>> = const { RefCell::new(VecDeque::new()) };
}

fn native(e: windows::core::Error) -> WindowError {
    WindowError::Native(e.message())
}

fn push(message: NativeMessage) {
    PENDING.with_borrow_mut(|pending| pending.push_back(message));
}

#[inline]
fn low_word(value: usize) -> u32 {
    (value & 0xFFFF) as u32
}

/// Signed client coordinates packed into an LPARAM.
#[inline]
fn point(l_param: LPARAM) -> (i32, i32) {
    let x = (l_param.0 & 0xFFFF) as u16 as i16;
    let y = ((l_param.0 >> 16) & 0xFFFF) as u16 as i16;
    (i32::from(x), i32::from(y))
}

/// The character a key message produces under the current keyboard state, if any.
fn to_unicode(w_param: WPARAM, l_param: LPARAM) -> Option<char> {
    let mut state = [0u8; 256];
    unsafe { GetKeyboardState(&mut state) }.ok()?;
    let mut buffer = [0u16; 10];
    let scan_code = ((l_param.0 >> 16) & 0xFF) as u32;
    let written = unsafe { ToUnicode(w_param.0 as u32, scan_code, Some(&state), &mut buffer, 0) };
    if written <= 0 {
        return None;
    }
    let written = (written as usize).min(buffer.len());
    char::decode_utf16(buffer[..written].iter().copied())
        .next()?
        .ok()
}

fn mouse_message(msg: u32) -> Option<MouseMessage> {
    match msg {
        m if m == WM_MOUSEMOVE => Some(MouseMessage::Move),
        m if m == WM_LBUTTONDOWN => Some(MouseMessage::Press(MouseButton::Left)),
        m if m == WM_LBUTTONUP => Some(MouseMessage::Release(MouseButton::Left)),
        m if m == WM_RBUTTONDOWN => Some(MouseMessage::Press(MouseButton::Right)),
        m if m == WM_RBUTTONUP => Some(MouseMessage::Release(MouseButton::Right)),
        m if m == WM_MBUTTONDOWN => Some(MouseMessage::Press(MouseButton::Middle)),
        m if m == WM_MBUTTONUP => Some(MouseMessage::Release(MouseButton::Middle)),
        _ => None,
    }
}

/**
Decodes window messages into [`NativeMessage`]s.

Everything not answered here goes on to `DefWindowProcW`.
*/
extern "system" fn window_proc(hwnd: HWND, msg: u32, w_param: WPARAM, l_param: LPARAM) -> LRESULT {
    let Some(window) = NativeHandle::from_raw(hwnd.0 as isize) else {
        return unsafe { DefWindowProcW(hwnd, msg, w_param, l_param) };
    };
    match msg {
        m if m == WM_DESTROY => {
            push(NativeMessage::Destroyed { window });
            return LRESULT(0);
        }
        m if m == WM_ERASEBKGND => return LRESULT(1),
        m if m == WM_ACTIVATE => {
            let active = low_word(w_param.0) != WA_INACTIVE;
            push(NativeMessage::Activated { window, active });
        }
        m if m == WM_MOVE => {
            let (x, y) = point(l_param);
            push(NativeMessage::Moved {
                window,
                position: Position::new(x, y),
            });
        }
        m if m == WM_SIZE => {
            if w_param.0 as u32 != SIZE_MINIMIZED {
                let (width, height) = point(l_param);
                push(NativeMessage::Resized {
                    window,
                    size: Size::new(width, height),
                });
            }
        }
        m if m == WM_KEYDOWN || m == WM_SYSKEYDOWN => {
            push(NativeMessage::KeyDown {
                code: (w_param.0 & 0xFF) as u8,
                character: to_unicode(w_param, l_param),
            });
        }
        m if m == WM_KEYUP || m == WM_SYSKEYUP => {
            push(NativeMessage::KeyUp {
                code: (w_param.0 & 0xFF) as u8,
                character: to_unicode(w_param, l_param),
            });
        }
        m if m == WM_SYSCOMMAND => match (w_param.0 & 0xFFF0) as u32 {
            // Alt opening the system menu, screensaver and monitor sleep are swallowed.
            c if c == SC_KEYMENU || c == SC_SCREENSAVE || c == SC_MONITORPOWER => {
                return LRESULT(0);
            }
            c if c == SC_MINIMIZE => push(NativeMessage::Minimized { window }),
            c if c == SC_RESTORE || c == SC_MAXIMIZE => push(NativeMessage::Restored { window }),
            _ => {}
        },
        m => {
            if let Some(message) = mouse_message(m) {
                let (x, y) = point(l_param);
                push(NativeMessage::Mouse { window, message, x, y });
            }
        }
    }
    unsafe { DefWindowProcW(hwnd, msg, w_param, l_param) }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
struct XInputGamepad {
    buttons: u16,
    left_trigger: u8,
    right_trigger: u8,
    thumb_lx: i16,
    thumb_ly: i16,
    thumb_rx: i16,
    thumb_ry: i16,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
struct XInputState {
    _packet_number: u32,
    gamepad: XInputGamepad,
}

type XInputGetState = unsafe extern "system" fn(u32, *mut XInputState) -> u32;

/// `XInputGetState`, resolved at runtime from whichever XInput DLL is installed.
#[derive(Clone, Copy)]
struct XInput {
    get_state: XInputGetState,
}

impl XInput {
    fn load() -> Option<XInput> {
        for library in [w!("xinput1_4.dll"), w!("xinput1_3.dll"), w!("xinput9_1_0.dll")] {
            let Ok(module) = (unsafe { LoadLibraryW(library) }) else {
                continue;
            };
            let proc = unsafe { GetProcAddress(module, s!("XInputGetState")) }?;
            let get_state =
                unsafe { std::mem::transmute::<unsafe extern "system" fn() -> isize, XInputGetState>(proc) };
            return Some(XInput { get_state });
        }
        None
    }

    fn query(&self, slot: usize) -> Option<RawGamepadState> {
        let mut state = XInputState::default();
        let result = unsafe { (self.get_state)(slot as u32, &mut state) };
        // ERROR_SUCCESS
        if result != 0 {
            return None;
        }
        let pad = state.gamepad;
        Some(RawGamepadState {
            buttons: GamepadButtons(pad.buttons),
            left_trigger: pad.left_trigger,
            right_trigger: pad.right_trigger,
            thumb_lx: pad.thumb_lx,
            thumb_ly: pad.thumb_ly,
            thumb_rx: pad.thumb_rx,
            thumb_ry: pad.thumb_ry,
        })
    }
}

impl std::fmt::Debug for XInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XInput").finish_non_exhaustive()
    }
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let displays = unsafe { &mut *(data.0 as *mut Vec<DisplayInfo>) };
    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    if unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        let r = info.rcMonitor;
        let display = DisplayInfo {
            position: Position::new(r.left, r.top),
            size: Size::new(r.right - r.left, r.bottom - r.top),
        };
        if info.dwFlags & MONITORINFOF_PRIMARY != 0 {
            displays.insert(0, display);
        } else {
            displays.push(display);
        }
    }
    true.into()
}

/// Attached monitors, primary first.
fn enumerate_displays() -> Vec<DisplayInfo> {
    let mut displays: Vec<DisplayInfo> = Vec::new();
    let data = LPARAM((&raw mut displays) as isize);
    let _ = unsafe { EnumDisplayMonitors(None, None, Some(collect_monitor), data) };
    logwise::debuginternal_sync!("found {count} displays", count = displays.len());
    displays
}

fn desktop_rect() -> Option<RECT> {
    let mut rect = RECT::default();
    unsafe { GetWindowRect(GetDesktopWindow(), &mut rect) }.ok()?;
    Some(rect)
}

/// A native window created by [`Win32Backend`].
#[derive(Debug)]
pub struct Win32Window {
    handle: NativeHandle,
    instance: HINSTANCE,
}

impl Win32Window {
    fn hwnd(&self) -> HWND {
        HWND(self.handle.raw() as *mut std::ffi::c_void)
    }
}

impl PlatformWindow for Win32Window {
    fn native_handle(&self) -> NativeHandle {
        self.handle
    }

    fn show(&mut self) {
        unsafe {
            _ = ShowWindow(self.hwnd(), SW_SHOWDEFAULT);
            _ = UpdateWindow(self.hwnd());
        }
    }

    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        unsafe { SetWindowTextW(self.hwnd(), &HSTRING::from(title)) }.map_err(native)
    }

    fn surface_handles(&self) -> Option<SurfaceHandles> {
        let mut window = Win32WindowHandle::new(self.handle.0);
        window.hinstance = NonZeroIsize::new(self.instance.0 as isize);
        Some(SurfaceHandles::new(
            RawWindowHandle::Win32(window),
            RawDisplayHandle::Windows(WindowsDisplayHandle::new()),
        ))
    }

    fn destroy(self) -> Result<(), WindowError> {
        unsafe { DestroyWindow(self.hwnd()) }.map_err(native)
    }
}

/**
The Win32 backend.

Owns the window class (registered on first window creation, unregistered on drop) and the
dynamically loaded XInput entry point.
*/
#[derive(Debug)]
pub struct Win32Backend {
    instance: HINSTANCE,
    class_registered: bool,
    display_mode_changed: bool,
    displays: Vec<DisplayInfo>,
    xinput: Option<XInput>,
}

impl Win32Backend {
    pub fn new() -> Result<Self, WindowError> {
        let instance = unsafe { GetModuleHandleW(PCWSTR::null()) }.map_err(native)?;
        let xinput = XInput::load();
        if xinput.is_none() {
            logwise::warn_sync!("XInput is not available; gamepads will report disconnected");
        }
        Ok(Win32Backend {
            instance: instance.into(),
            class_registered: false,
            display_mode_changed: false,
            displays: enumerate_displays(),
            xinput,
        })
    }

    fn register_class(&mut self) -> Result<(), WindowError> {
        if self.class_registered {
            return Ok(());
        }
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default();
        let window_class = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW | CS_OWNDC,
            lpfnWndProc: Some(window_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: self.instance,
            hIcon: Default::default(),
            hCursor: cursor,
            hbrBackground: Default::default(),
            lpszMenuName: PCWSTR::null(),
            lpszClassName: WINDOW_CLASS,
            hIconSm: Default::default(),
        };
        let atom = unsafe { RegisterClassExW(&window_class) };
        if atom == 0 {
            return Err(WindowError::Native(format!(
                "RegisterClassExW failed: {:?}",
                unsafe { GetLastError() }
            )));
        }
        self.class_registered = true;
        Ok(())
    }

    /// Switches the display to `size` at 32 bits per pixel and hides the cursor.
    fn enter_fullscreen(&mut self, size: Size) {
        let mode = DEVMODEW {
            dmSize: std::mem::size_of::<DEVMODEW>() as u16,
            dmPelsWidth: size.width() as u32,
            dmPelsHeight: size.height() as u32,
            dmBitsPerPel: 32,
            dmFields: DM_BITSPERPEL | DM_PELSWIDTH | DM_PELSHEIGHT,
            ..Default::default()
        };
        let result = unsafe { ChangeDisplaySettingsW(Some(std::ptr::from_ref(&mode)), CDS_FULLSCREEN) };
        if result == DISP_CHANGE_SUCCESSFUL {
            self.display_mode_changed = true;
        } else {
            logwise::warn_sync!(
                "Could not switch display mode: {result}",
                result = logwise::privacy::LogIt(result)
            );
        }
        unsafe { ShowCursor(false) };
    }
}

impl Drop for Win32Backend {
    fn drop(&mut self) {
        // Destroy notices from teardown must not reach a later backend on this thread.
        PENDING.with_borrow_mut(VecDeque::clear);
        if self.display_mode_changed {
            unsafe { ChangeDisplaySettingsW(None, CDS_TYPE(0)) };
        }
        if self.class_registered {
            if let Err(e) = unsafe { UnregisterClassW(WINDOW_CLASS, Some(self.instance)) } {
                logwise::warn_sync!(
                    "Could not unregister window class: {error}",
                    error = logwise::privacy::LogIt(e)
                );
            }
        }
    }
}

impl MessageSource for Win32Backend {
    fn next_message(&mut self) -> Option<NativeMessage> {
        loop {
            if let Some(message) = PENDING.with_borrow_mut(VecDeque::pop_front) {
                return Some(message);
            }
            let mut msg = MSG::default();
            if !unsafe { PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE) }.as_bool() {
                return None;
            }
            if msg.message == WM_QUIT {
                return Some(NativeMessage::Quit);
            }
            // No TranslateMessage: characters are resolved from key messages directly.
            unsafe { DispatchMessageW(&msg) };
        }
    }
}

impl GamepadDriver for Win32Backend {
    fn slot_count(&self) -> usize {
        if self.xinput.is_some() { XUSER_MAX_COUNT } else { 0 }
    }

    fn query(&mut self, slot: usize) -> Option<RawGamepadState> {
        self.xinput.as_ref()?.query(slot)
    }

    fn identity(&self) -> DeviceIdentity {
        DeviceIdentity::XBOX_360
    }
}

impl Backend for Win32Backend {
    type Window = Win32Window;

    fn create_window(
        &mut self,
        options: &WindowOptions,
        position: Position,
    ) -> Result<Win32Window, WindowError> {
        self.register_class()?;
        let (style, ex_style): (WINDOW_STYLE, WINDOW_EX_STYLE) = match options.mode {
            WindowMode::Windowed => (
                WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX,
                WS_EX_APPWINDOW | WS_EX_WINDOWEDGE,
            ),
            WindowMode::Borderless => (WS_POPUP, WS_EX_APPWINDOW),
            WindowMode::Fullscreen => {
                self.enter_fullscreen(options.size);
                (WS_POPUP, WS_EX_APPWINDOW)
            }
        };
        let mut frame = RECT {
            left: 0,
            top: 0,
            right: options.size.width(),
            bottom: options.size.height(),
        };
        unsafe { AdjustWindowRectEx(&mut frame, style, false, ex_style) }.map_err(native)?;

        let title = HSTRING::from(options.title.as_str());
        let hwnd = unsafe {
            CreateWindowExW(
                ex_style,
                WINDOW_CLASS,
                &title,
                WS_CLIPSIBLINGS | WS_CLIPCHILDREN | style,
                position.x(),
                position.y(),
                frame.right.saturating_sub(frame.left),
                frame.bottom.saturating_sub(frame.top),
                None,
                None,
                Some(self.instance),
                None,
            )
        }
        .map_err(native)?;
        let handle = NativeHandle::from_raw(hwnd.0 as isize)
            .ok_or_else(|| WindowError::Native("CreateWindowExW returned a null window".to_owned()))?;
        unsafe { SetCursor(LoadCursorW(None, IDC_ARROW).ok()) };
        logwise::debuginternal_sync!("created hwnd {hwnd}", hwnd = logwise::privacy::LogIt(handle.raw()));
        Ok(Win32Window {
            handle,
            instance: self.instance,
        })
    }

    fn display(&self, target: Option<usize>) -> DisplayInfo {
        target
            .and_then(|index| self.displays.get(index))
            .or_else(|| self.displays.first())
            .copied()
            .unwrap_or_else(|| DisplayInfo {
                position: Position::new(0, 0),
                size: self.desktop_size(),
            })
    }

    fn desktop_size(&self) -> Size {
        match desktop_rect() {
            Some(r) => Size::new(r.right - r.left, r.bottom - r.top),
            None => Size::default(),
        }
    }

    fn system_id(&self) -> &'static str {
        "Windows"
    }
}

pub type PlatformBackend = Win32Backend;

pub fn platform_backend() -> Result<PlatformBackend, WindowError> {
    Win32Backend::new()
}

/// Shows a modal error box.
pub fn report_fatal(message: &str) {
    logwise::error_sync!("{message}", message = logwise::privacy::LogIt(message));
    unsafe {
        MessageBoxW(None, &HSTRING::from(message), w!("Error"), MB_OK | MB_ICONERROR);
    }
}

/// The process command line, split into arguments.
pub fn arguments() -> Vec<String> {
    let line = unsafe { GetCommandLineW().to_string() };
    match line {
        Ok(line) => crate::application::split_command_line(&line),
        Err(_) => std::env::args().collect(),
    }
}
