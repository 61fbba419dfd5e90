// SPDX-License-Identifier: MPL-2.0
//! Native virtual-key codes and their translation into [`KeyboardKey`].
//!
//! The codes are the Win32 virtual-key values. They are declared here rather than imported
//! from the platform bindings so the table can be built and tested on every target.
//!
//! Reference: <https://learn.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes>

use super::key::KeyboardKey;

pub const VK_BACK: u8 = 0x08;
pub const VK_TAB: u8 = 0x09;
pub const VK_CLEAR: u8 = 0x0C;
pub const VK_RETURN: u8 = 0x0D;
pub const VK_SHIFT: u8 = 0x10;
pub const VK_CONTROL: u8 = 0x11;
pub const VK_MENU: u8 = 0x12;
pub const VK_PAUSE: u8 = 0x13;
pub const VK_CAPITAL: u8 = 0x14;
pub const VK_ESCAPE: u8 = 0x1B;
pub const VK_SPACE: u8 = 0x20;
pub const VK_PRIOR: u8 = 0x21;
pub const VK_NEXT: u8 = 0x22;
pub const VK_END: u8 = 0x23;
pub const VK_HOME: u8 = 0x24;
pub const VK_LEFT: u8 = 0x25;
pub const VK_UP: u8 = 0x26;
pub const VK_RIGHT: u8 = 0x27;
pub const VK_DOWN: u8 = 0x28;
pub const VK_PRINT: u8 = 0x2A;
pub const VK_SNAPSHOT: u8 = 0x2C;
pub const VK_INSERT: u8 = 0x2D;
pub const VK_DELETE: u8 = 0x2E;
pub const VK_HELP: u8 = 0x2F;
pub const VK_LWIN: u8 = 0x5B;
pub const VK_RWIN: u8 = 0x5C;
pub const VK_APPS: u8 = 0x5D;
pub const VK_NUMPAD0: u8 = 0x60;
pub const VK_NUMPAD9: u8 = 0x69;
pub const VK_MULTIPLY: u8 = 0x6A;
pub const VK_ADD: u8 = 0x6B;
pub const VK_SEPARATOR: u8 = 0x6C;
pub const VK_SUBTRACT: u8 = 0x6D;
pub const VK_DECIMAL: u8 = 0x6E;
pub const VK_DIVIDE: u8 = 0x6F;
pub const VK_F1: u8 = 0x70;
pub const VK_F24: u8 = 0x87;
pub const VK_NUMLOCK: u8 = 0x90;
pub const VK_SCROLL: u8 = 0x91;
pub const VK_LSHIFT: u8 = 0xA0;
pub const VK_RSHIFT: u8 = 0xA1;
pub const VK_LCONTROL: u8 = 0xA2;
pub const VK_RCONTROL: u8 = 0xA3;
pub const VK_LMENU: u8 = 0xA4;
pub const VK_RMENU: u8 = 0xA5;
pub const VK_OEM_1: u8 = 0xBA;
pub const VK_OEM_PLUS: u8 = 0xBB;
pub const VK_OEM_COMMA: u8 = 0xBC;
pub const VK_OEM_MINUS: u8 = 0xBD;
pub const VK_OEM_PERIOD: u8 = 0xBE;
pub const VK_OEM_2: u8 = 0xBF;
pub const VK_OEM_3: u8 = 0xC0;
pub const VK_OEM_4: u8 = 0xDB;
pub const VK_OEM_5: u8 = 0xDC;
pub const VK_OEM_6: u8 = 0xDD;
pub const VK_OEM_7: u8 = 0xDE;
pub const VK_OEM_102: u8 = 0xE2;

const DIGITS: [KeyboardKey; 10] = [
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
];

const LETTERS: [KeyboardKey; 26] = [
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
];

const KEYPAD: [KeyboardKey; 10] = [
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
];

const FUNCTION: [KeyboardKey; 24] = [
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
];

/**
Translates a native virtual-key code.

Total over `u8`: codes without a mapping (IME, OEM-specific, reserved) return
[`KeyboardKey::Unknown`].
*/
pub const fn translate(vk: u8) -> KeyboardKey {
    match vk {
        VK_BACK => KeyboardKey::Backspace,
        VK_TAB => KeyboardKey::Tab,
        VK_CLEAR => KeyboardKey::Clear,
        VK_RETURN => KeyboardKey::Return,
        VK_SHIFT => KeyboardKey::Shift,
        VK_CONTROL => KeyboardKey::Control,
        VK_MENU => KeyboardKey::Alt,
        VK_PAUSE => KeyboardKey::Pause,
        VK_CAPITAL => KeyboardKey::CapsLock,
        //kana/hangul, junja, final, hanja/kanji, convert, nonconvert, accept, modechange
        VK_ESCAPE => KeyboardKey::Escape,
        VK_SPACE => KeyboardKey::Space,
        VK_PRIOR => KeyboardKey::PageUp,
        VK_NEXT => KeyboardKey::PageDown,
        VK_END => KeyboardKey::End,
        VK_HOME => KeyboardKey::Home,
        VK_LEFT => KeyboardKey::Left,
        VK_UP => KeyboardKey::Up,
        VK_RIGHT => KeyboardKey::Right,
        VK_DOWN => KeyboardKey::Down,
        //vk_select, vk_execute
        VK_PRINT => KeyboardKey::Print,
        VK_SNAPSHOT => KeyboardKey::PrintScreen,
        VK_INSERT => KeyboardKey::Insert,
        VK_DELETE => KeyboardKey::Delete,
        VK_HELP => KeyboardKey::Help,
        0x30..=0x39 => DIGITS[(vk - 0x30) as usize],
        0x41..=0x5A => LETTERS[(vk - 0x41) as usize],
        VK_LWIN => KeyboardKey::LeftWindows,
        VK_RWIN => KeyboardKey::RightWindows,
        VK_APPS => KeyboardKey::Apps,
        //vk_sleep
        VK_NUMPAD0..=VK_NUMPAD9 => KEYPAD[(vk - VK_NUMPAD0) as usize],
        VK_MULTIPLY => KeyboardKey::Multiply,
        VK_ADD => KeyboardKey::Add,
        VK_SEPARATOR => KeyboardKey::Separator,
        VK_SUBTRACT => KeyboardKey::Subtract,
        VK_DECIMAL => KeyboardKey::Decimal,
        VK_DIVIDE => KeyboardKey::Divide,
        VK_F1..=VK_F24 => FUNCTION[(vk - VK_F1) as usize],
        VK_NUMLOCK => KeyboardKey::NumLock,
        VK_SCROLL => KeyboardKey::ScrollLock,
        VK_LSHIFT => KeyboardKey::LeftShift,
        VK_RSHIFT => KeyboardKey::RightShift,
        VK_LCONTROL => KeyboardKey::LeftControl,
        VK_RCONTROL => KeyboardKey::RightControl,
        VK_LMENU => KeyboardKey::LeftAlt,
        VK_RMENU => KeyboardKey::RightAlt,
        //browser, volume, media and launch keys
        VK_OEM_1 => KeyboardKey::Semicolon,
        VK_OEM_PLUS => KeyboardKey::Plus,
        VK_OEM_COMMA => KeyboardKey::Comma,
        VK_OEM_MINUS => KeyboardKey::Minus,
        VK_OEM_PERIOD => KeyboardKey::Period,
        VK_OEM_2 => KeyboardKey::Slash,
        VK_OEM_3 => KeyboardKey::Grave,
        VK_OEM_4 => KeyboardKey::LeftBracket,
        VK_OEM_5 => KeyboardKey::Circumflex,
        VK_OEM_6 => KeyboardKey::RightBracket,
        VK_OEM_7 => KeyboardKey::Quote,
        VK_OEM_102 => KeyboardKey::LessGreater,
        //vk_processkey, vk_packet, attn, crsel, exsel, ereof, play, zoom, pa1, oem_clear
        _ => KeyboardKey::Unknown,
    }
}
