// SPDX-License-Identifier: MPL-2.0
/// A key on the keyboard, independent of the platform's native code space.
///
/// Native codes are translated into this enum by [`super::vk::translate`]; any code
/// without a mapping becomes [`KeyboardKey::Unknown`]. Variants describe physical keys
/// as labelled on a US layout, except where a layout-specific name is the established one.
///
/// # Examples
///
/// ```
/// use app_system::input::keyboard::key::KeyboardKey;
///
/// assert_ne!(KeyboardKey::A, KeyboardKey::Unknown);
/// assert_eq!(KeyboardKey::all_keys()[KeyboardKey::Escape as usize], KeyboardKey::Escape);
/// ```
#[repr(usize)]
#[derive(Debug, Default, Hash, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyboardKey {
    /// A native key with no normalized equivalent.
    #[default]
    Unknown,
    /// The Backspace key.
    Backspace,
    /// The Tab key.
    Tab,
    /// The Clear key (keypad 5 with Num Lock off on most PC keyboards).
    Clear,
    /// The Return/Enter key on the main keyboard area.
    Return,
    /// Either Shift key, when the platform does not distinguish sides.
    Shift,
    /// Either Control key, when the platform does not distinguish sides.
    Control,
    /// Either Alt key, when the platform does not distinguish sides.
    Alt,
    /// The Pause/Break key.
    Pause,
    /// The Caps Lock key.
    CapsLock,
    /// The Escape key.
    Escape,
    /// The space bar.
    Space,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
    /// The End key.
    End,
    /// The Home key.
    Home,
    /// The left arrow key.
    Left,
    /// The up arrow key.
    Up,
    /// The right arrow key.
    Right,
    /// The down arrow key.
    Down,
    /// The Print key.
    Print,
    /// The Print Screen/SysRq key.
    PrintScreen,
    /// The Insert key.
    Insert,
    /// The Delete key (forward delete).
    Delete,
    /// The Help key.
    Help,
    /// The '0' key on the main keyboard area.
    Num0,
    /// The '1' key on the main keyboard area.
    Num1,
    /// The '2' key on the main keyboard area.
    Num2,
    /// The '3' key on the main keyboard area.
    Num3,
    /// The '4' key on the main keyboard area.
    Num4,
    /// The '5' key on the main keyboard area.
    Num5,
    /// The '6' key on the main keyboard area.
    Num6,
    /// The '7' key on the main keyboard area.
    Num7,
    /// The '8' key on the main keyboard area.
    Num8,
    /// The '9' key on the main keyboard area.
    Num9,
    /// The 'A' key.
    A,
    /// The 'B' key.
    B,
    /// The 'C' key.
    C,
    /// The 'D' key.
    D,
    /// The 'E' key.
    E,
    /// The 'F' key.
    F,
    /// The 'G' key.
    G,
    /// The 'H' key.
    H,
    /// The 'I' key.
    I,
    /// The 'J' key.
    J,
    /// The 'K' key.
    K,
    /// The 'L' key.
    L,
    /// The 'M' key.
    M,
    /// The 'N' key.
    N,
    /// The 'O' key.
    O,
    /// The 'P' key.
    P,
    /// The 'Q' key.
    Q,
    /// The 'R' key.
    R,
    /// The 'S' key.
    S,
    /// The 'T' key.
    T,
    /// The 'U' key.
    U,
    /// The 'V' key.
    V,
    /// The 'W' key.
    W,
    /// The 'X' key.
    X,
    /// The 'Y' key.
    Y,
    /// The 'Z' key.
    Z,
    /// The left Windows/Command key.
    LeftWindows,
    /// The right Windows/Command key.
    RightWindows,
    /// The Applications (context menu) key.
    Apps,
    /// The '0' key on the numeric keypad.
    Keypad0,
    /// The '1' key on the numeric keypad.
    Keypad1,
    /// The '2' key on the numeric keypad.
    Keypad2,
    /// The '3' key on the numeric keypad.
    Keypad3,
    /// The '4' key on the numeric keypad.
    Keypad4,
    /// The '5' key on the numeric keypad.
    Keypad5,
    /// The '6' key on the numeric keypad.
    Keypad6,
    /// The '7' key on the numeric keypad.
    Keypad7,
    /// The '8' key on the numeric keypad.
    Keypad8,
    /// The '9' key on the numeric keypad.
    Keypad9,
    /// The multiply '*' key on the numeric keypad.
    Multiply,
    /// The add '+' key on the numeric keypad.
    Add,
    /// The separator key on the numeric keypad, present on some layouts.
    Separator,
    /// The subtract '-' key on the numeric keypad.
    Subtract,
    /// The decimal point key on the numeric keypad.
    Decimal,
    /// The divide '/' key on the numeric keypad.
    Divide,
    /// Function key F1.
    F1,
    /// Function key F2.
    F2,
    /// Function key F3.
    F3,
    /// Function key F4.
    F4,
    /// Function key F5.
    F5,
    /// Function key F6.
    F6,
    /// Function key F7.
    F7,
    /// Function key F8.
    F8,
    /// Function key F9.
    F9,
    /// Function key F10.
    F10,
    /// Function key F11.
    F11,
    /// Function key F12.
    F12,
    /// Function key F13.
    F13,
    /// Function key F14.
    F14,
    /// Function key F15.
    F15,
    /// Function key F16.
    F16,
    /// Function key F17.
    F17,
    /// Function key F18.
    F18,
    /// Function key F19.
    F19,
    /// Function key F20.
    F20,
    /// Function key F21.
    F21,
    /// Function key F22.
    F22,
    /// Function key F23.
    F23,
    /// Function key F24.
    F24,
    /// The Num Lock key.
    NumLock,
    /// The Scroll Lock key.
    ScrollLock,
    /// The left Shift key.
    LeftShift,
    /// The right Shift key.
    RightShift,
    /// The left Control key.
    LeftControl,
    /// The right Control key.
    RightControl,
    /// The left Alt key.
    LeftAlt,
    /// The right Alt/AltGr key.
    RightAlt,
    /// The ';:' key on a US layout.
    Semicolon,
    /// The '=+' key on a US layout, '+' on most others.
    Plus,
    /// The ',<' key.
    Comma,
    /// The '-_' key.
    Minus,
    /// The '.>' key.
    Period,
    /// The '/?' key on a US layout.
    Slash,
    /// The '`~' key on a US layout.
    Grave,
    /// The '[{' key on a US layout.
    LeftBracket,
    /// The '^' key on a German layout; the '\\|' key on a US layout.
    Circumflex,
    /// The ']}' key on a US layout.
    RightBracket,
    /// The quote key on a US layout.
    Quote,
    /// The '<>' key between left Shift and Z on ISO layouts.
    LessGreater,
}

impl KeyboardKey {
    /// Returns every key, in declaration order.
    ///
    /// The position of a key in this slice equals its discriminant, so the slice can be
    /// used to size per-key state tables.
    pub const fn all_keys() -> &'static [KeyboardKey] {
        &ALL_KEYS
    }
}

const ALL_KEYS: [KeyboardKey; 124] = [
    KeyboardKey::Unknown,
    KeyboardKey::Backspace,
    KeyboardKey::Tab,
    KeyboardKey::Clear,
    KeyboardKey::Return,
    KeyboardKey::Shift,
    KeyboardKey::Control,
    KeyboardKey::Alt,
    KeyboardKey::Pause,
    KeyboardKey::CapsLock,
    KeyboardKey::Escape,
    KeyboardKey::Space,
    KeyboardKey::PageUp,
    KeyboardKey::PageDown,
    KeyboardKey::End,
    KeyboardKey::Home,
    KeyboardKey::Left,
    KeyboardKey::Up,
    KeyboardKey::Right,
    KeyboardKey::Down,
    KeyboardKey::Print,
    KeyboardKey::PrintScreen,
    KeyboardKey::Insert,
    KeyboardKey::Delete,
    KeyboardKey::Help,
    KeyboardKey::Num0,
    KeyboardKey::Num1,
    KeyboardKey::Num2,
    KeyboardKey::Num3,
    KeyboardKey::Num4,
    KeyboardKey::Num5,
    KeyboardKey::Num6,
    KeyboardKey::Num7,
    KeyboardKey::Num8,
    KeyboardKey::Num9,
    KeyboardKey::A,
    KeyboardKey::B,
    KeyboardKey::C,
    KeyboardKey::D,
    KeyboardKey::E,
    KeyboardKey::F,
    KeyboardKey::G,
    KeyboardKey::H,
    KeyboardKey::I,
    KeyboardKey::J,
    KeyboardKey::K,
    KeyboardKey::L,
    KeyboardKey::M,
    KeyboardKey::N,
    KeyboardKey::O,
    KeyboardKey::P,
    KeyboardKey::Q,
    KeyboardKey::R,
    KeyboardKey::S,
    KeyboardKey::T,
    KeyboardKey::U,
    KeyboardKey::V,
    KeyboardKey::W,
    KeyboardKey::X,
    KeyboardKey::Y,
    KeyboardKey::Z,
    KeyboardKey::LeftWindows,
    KeyboardKey::RightWindows,
    KeyboardKey::Apps,
    KeyboardKey::Keypad0,
    KeyboardKey::Keypad1,
    KeyboardKey::Keypad2,
    KeyboardKey::Keypad3,
    KeyboardKey::Keypad4,
    KeyboardKey::Keypad5,
    KeyboardKey::Keypad6,
    KeyboardKey::Keypad7,
    KeyboardKey::Keypad8,
    KeyboardKey::Keypad9,
    KeyboardKey::Multiply,
    KeyboardKey::Add,
    KeyboardKey::Separator,
    KeyboardKey::Subtract,
    KeyboardKey::Decimal,
    KeyboardKey::Divide,
    KeyboardKey::F1,
    KeyboardKey::F2,
    KeyboardKey::F3,
    KeyboardKey::F4,
    KeyboardKey::F5,
    KeyboardKey::F6,
    KeyboardKey::F7,
    KeyboardKey::F8,
    KeyboardKey::F9,
    KeyboardKey::F10,
    KeyboardKey::F11,
    KeyboardKey::F12,
    KeyboardKey::F13,
    KeyboardKey::F14,
    KeyboardKey::F15,
    KeyboardKey::F16,
    KeyboardKey::F17,
    KeyboardKey::F18,
    KeyboardKey::F19,
    KeyboardKey::F20,
    KeyboardKey::F21,
    KeyboardKey::F22,
    KeyboardKey::F23,
    KeyboardKey::F24,
    KeyboardKey::NumLock,
    KeyboardKey::ScrollLock,
    KeyboardKey::LeftShift,
    KeyboardKey::RightShift,
    KeyboardKey::LeftControl,
    KeyboardKey::RightControl,
    KeyboardKey::LeftAlt,
    KeyboardKey::RightAlt,
    KeyboardKey::Semicolon,
    KeyboardKey::Plus,
    KeyboardKey::Comma,
    KeyboardKey::Minus,
    KeyboardKey::Period,
    KeyboardKey::Slash,
    KeyboardKey::Grave,
    KeyboardKey::LeftBracket,
    KeyboardKey::Circumflex,
    KeyboardKey::RightBracket,
    KeyboardKey::Quote,
    KeyboardKey::LessGreater,
];
