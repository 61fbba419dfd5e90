//SPDX-License-Identifier: MPL-2.0

/*!
A platform backend for an application framework's system, window and input layer.

This crate binds a framework's abstract "system" API to the host's native windowing, message
and controller APIs. It creates and destroys native windows, pumps the native message queue
without blocking, and translates native keyboard, mouse and gamepad input into a
platform-independent model.

All state lives in one [`system::System`] context driven from a single thread. Call
[`system::System::pump_events`] once per tick; it returns `false` once the application should
shut down.

# Quick Start

```
use app_system::headless::HeadlessBackend;
use app_system::system::{System, SystemOptions};
use app_system::window::WindowOptions;

let mut system = System::new(HeadlessBackend::new(), SystemOptions::new("demo"));
let window = system.create_window(&WindowOptions::new("main")).unwrap();
system.show_window(window).unwrap();
assert_eq!(system.window_width(window), Some(800));

let mut ticks = 0;
while system.pump_events() && ticks < 3 {
    ticks += 1;
}
```

# Input handling
Keyboard, mouse and gamepad translation live in the [`input`] module. Each device family
delivers into a sink; the stock sinks on [`system::System`] keep pollable state and forward
events to an optional listener closure.

# Supported platforms
| Platform | Backend                  |
|----------|--------------------------|
| Windows  | win32 + XInput           |
| Others   | headless                 |

The headless backend is available everywhere and is scripted by the caller.

# Cargo features
* `logwise_internal` - internal debug logging.
*/

/// Window ids, options and the window table.
///
/// # Example
/// ```
/// use app_system::coordinates::{Position, Size};
/// use app_system::window::{WindowMode, WindowOptions};
///
/// let options = WindowOptions::new("Game")
///     .with_position(Position::new(10, 10))
///     .with_size(Size::new(1280, 720))
///     .with_mode(WindowMode::Borderless);
/// assert_eq!(options.size.width(), 1280);
/// ```
pub mod window;

/// Process entry and fatal error reporting.
///
/// The [`application::main`] function wraps the application's entry routine: it supplies the
/// command line and turns an escaping error or panic into a fatal report and exit code 1.
pub mod application;

mod sys;

/// Integer pixel coordinates.
///
/// # Example
/// ```
/// use app_system::coordinates::{Position, Size};
///
/// let pos = Position::new(100, 200);
/// assert_eq!(pos.x(), 100);
/// assert_eq!(pos.y(), 200);
///
/// let size = Size::new(800, 600);
/// assert_eq!(size.width(), 800);
/// assert_eq!(size.height(), 600);
/// ```
pub mod coordinates;

/// Raw handles for rendering surfaces.
///
/// Graphics receives a [`surface::SurfaceHandles`] for each window it is told about, holding the
/// `raw-window-handle` window and display handles.
pub mod surface;

/// Translation of native keyboard, mouse and gamepad input.
pub mod input;

/// Errors reported by window management.
pub mod error;

/// The native message model the backends decode into.
pub mod message;

/// The graphics collaborator.
pub mod graphics;

/// High-resolution timing.
pub mod clock;

/// The system context and dispatch loop.
pub mod system;

/// A scripted backend for tests and platforms without a native one.
pub mod headless;

/// The backend [`system::System::native`] uses on this platform.
pub use sys::PlatformBackend;

#[cfg(target_os = "windows")]
pub use sys::{Win32Backend, Win32Window};

logwise::declare_logging_domain!();
