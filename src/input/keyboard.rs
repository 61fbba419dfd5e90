// SPDX-License-Identifier: MPL-2.0

//! Keyboard input translation.
//!
//! Native key messages arrive as raw virtual-key codes with a platform-resolved character.
//! They flow through three layers:
//!
//! 1. **Translation** ([`vk`]): native code to the platform-independent [`KeyboardKey`].
//! 2. **Edge detection** ([`KeyTracker`]): collapses the OS auto-repeat stream so a held key
//!    produces one down transition per physical press.
//! 3. **Delivery** ([`KeyboardSink`]): the framework-facing receiver. [`Keyboard`] is the
//!    stock sink, tracking pressed state and forwarding events to an optional listener.
//!
//! # Example
//!
//! ```
//! use app_system::input::keyboard::{Keyboard, KeyTracker, key::KeyboardKey, vk};
//!
//! let mut tracker = KeyTracker::new();
//! let mut keyboard = Keyboard::new();
//!
//! // the OS repeats WM_KEYDOWN while the key is held
//! tracker.key_down(vk::VK_SPACE, Some(' '), &mut keyboard);
//! tracker.key_down(vk::VK_SPACE, Some(' '), &mut keyboard);
//! assert!(keyboard.is_pressed(KeyboardKey::Space));
//!
//! tracker.key_up(vk::VK_SPACE, Some(' '), &mut keyboard);
//! assert!(!keyboard.is_pressed(KeyboardKey::Space));
//! ```

use std::fmt::Debug;

/// Keyboard key definitions and enumerations.
pub mod key;
/// Native virtual-key codes and the translation table.
pub mod vk;

use crate::input::keyboard::key::KeyboardKey;

/**
Receives normalized key transitions.

`character` is the text the platform resolved for the key under the current modifier and
dead-key state, if any.
*/
pub trait KeyboardSink {
    fn key_down(&mut self, key: KeyboardKey, character: Option<char>);
    fn key_up(&mut self, key: KeyboardKey, character: Option<char>);
}

/// A key transition as delivered to a [`Keyboard`] listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down {
        key: KeyboardKey,
        character: Option<char>,
    },
    Up {
        key: KeyboardKey,
        character: Option<char>,
    },
}

/**
Edge detector over native key codes.

Holds one pressed flag per native code. A down message for a code that is already down is
dropped (this is how OS auto-repeat is suppressed); an up message always clears the flag and
is always forwarded, even for a key we never saw go down.
*/
#[derive(Debug, Clone)]
pub struct KeyTracker {
    pressed: [bool; 256],
}

impl KeyTracker {
    pub const fn new() -> Self {
        KeyTracker {
            pressed: [false; 256],
        }
    }

    /// Handles a native key-down. Emits at most one event.
    pub fn key_down<S: KeyboardSink + ?Sized>(
        &mut self,
        code: u8,
        character: Option<char>,
        sink: &mut S,
    ) {
        let slot = &mut self.pressed[code as usize];
        if *slot {
            return;
        }
        *slot = true;
        let key = vk::translate(code);
        if key == KeyboardKey::Unknown {
            logwise::debuginternal_sync!("Unknown key {code}", code = code);
        }
        sink.key_down(key, character);
    }

    /// Handles a native key-up. Always emits exactly one event.
    pub fn key_up<S: KeyboardSink + ?Sized>(
        &mut self,
        code: u8,
        character: Option<char>,
        sink: &mut S,
    ) {
        self.pressed[code as usize] = false;
        sink.key_up(vk::translate(code), character);
    }

    /// Whether the native code is currently considered held.
    pub fn is_held(&self, code: u8) -> bool {
        self.pressed[code as usize]
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock [`KeyboardSink`].
///
/// Tracks which normalized keys are down, so the application can poll between ticks, and
/// forwards every transition to an optional listener.
pub struct Keyboard {
    key_states: Vec<bool>,
    listener: Option<Box<dyn FnMut(KeyEvent)>>,
}

impl Keyboard {
    /// Creates a keyboard with every key released and no listener.
    pub fn new() -> Self {
        Keyboard {
            key_states: vec![false; KeyboardKey::all_keys().len()],
            listener: None,
        }
    }

    /// Installs the listener that receives every key transition, replacing any previous one.
    pub fn set_listener<F: FnMut(KeyEvent) + 'static>(&mut self, listener: F) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Checks if the specified key is currently pressed.
    ///
    /// Several native codes can share a normalized key (e.g. `Unknown`); the state reflects the
    /// most recent transition delivered for it.
    pub fn is_pressed(&self, key: KeyboardKey) -> bool {
        self.key_states[key as usize]
    }

    fn set_key_state(&mut self, key: KeyboardKey, state: bool) {
        logwise::debuginternal_sync!(
            "Setting key {key} to {state}",
            key = logwise::privacy::LogIt(key),
            state = state
        );
        self.key_states[key as usize] = state;
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Keyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyboard")
            .field("pressed", &self.key_states.iter().filter(|s| **s).count())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl KeyboardSink for Keyboard {
    fn key_down(&mut self, key: KeyboardKey, character: Option<char>) {
        self.set_key_state(key, true);
        if let Some(listener) = self.listener.as_mut() {
            listener(KeyEvent::Down { key, character });
        }
    }

    fn key_up(&mut self, key: KeyboardKey, character: Option<char>) {
        self.set_key_state(key, false);
        if let Some(listener) = self.listener.as_mut() {
            listener(KeyEvent::Up { key, character });
        }
    }
}

#[cfg(test)]
mod test {
    use super::key::KeyboardKey;
    use super::{KeyEvent, KeyTracker, Keyboard, KeyboardSink, vk};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder(Vec<KeyEvent>);

    impl KeyboardSink for Recorder {
        fn key_down(&mut self, key: KeyboardKey, character: Option<char>) {
            self.0.push(KeyEvent::Down { key, character });
        }
        fn key_up(&mut self, key: KeyboardKey, character: Option<char>) {
            self.0.push(KeyEvent::Up { key, character });
        }
    }

    #[test]
    fn repeats_collapse_to_one_down() {
        let mut tracker = KeyTracker::new();
        let mut sink = Recorder::default();
        for _ in 0..5 {
            tracker.key_down(b'W', Some('w'), &mut sink);
        }
        tracker.key_up(b'W', Some('w'), &mut sink);
        assert_eq!(
            sink.0,
            vec![
                KeyEvent::Down {
                    key: KeyboardKey::W,
                    character: Some('w')
                },
                KeyEvent::Up {
                    key: KeyboardKey::W,
                    character: Some('w')
                },
            ]
        );
    }

    #[test]
    fn press_after_release_fires_again() {
        let mut tracker = KeyTracker::new();
        let mut sink = Recorder::default();
        tracker.key_down(vk::VK_ESCAPE, None, &mut sink);
        tracker.key_up(vk::VK_ESCAPE, None, &mut sink);
        tracker.key_down(vk::VK_ESCAPE, None, &mut sink);
        assert_eq!(sink.0.len(), 3);
        assert!(tracker.is_held(vk::VK_ESCAPE));
    }

    #[test]
    fn up_without_down_still_emits() {
        let mut tracker = KeyTracker::new();
        let mut sink = Recorder::default();
        tracker.key_up(vk::VK_SHIFT, None, &mut sink);
        tracker.key_up(vk::VK_SHIFT, None, &mut sink);
        assert_eq!(sink.0.len(), 2);
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut tracker = KeyTracker::new();
        let mut sink = Recorder::default();
        tracker.key_down(b'A', None, &mut sink);
        tracker.key_down(b'S', None, &mut sink);
        tracker.key_down(b'A', None, &mut sink);
        assert_eq!(sink.0.len(), 2);
    }

    #[test]
    fn unmapped_codes_are_delivered_as_unknown() {
        let mut tracker = KeyTracker::new();
        let mut sink = Recorder::default();
        tracker.key_down(0xE5, None, &mut sink);
        assert_eq!(
            sink.0,
            vec![KeyEvent::Down {
                key: KeyboardKey::Unknown,
                character: None
            }]
        );
    }

    #[test]
    fn keyboard_state_and_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_listener = seen.clone();
        let mut keyboard = Keyboard::new();
        keyboard.set_listener(move |event| seen_listener.borrow_mut().push(event));

        keyboard.key_down(KeyboardKey::Space, Some(' '));
        assert!(keyboard.is_pressed(KeyboardKey::Space));
        keyboard.key_up(KeyboardKey::Space, Some(' '));
        assert!(!keyboard.is_pressed(KeyboardKey::Space));
        assert_eq!(seen.borrow().len(), 2);

        keyboard.clear_listener();
        keyboard.key_down(KeyboardKey::A, None);
        assert_eq!(seen.borrow().len(), 2);
    }
}
