// SPDX-License-Identifier: MPL-2.0
/*!
Gamepad polling.

Controllers are not event sources: every tick the dispatch loop asks the driver for a full
snapshot of each device slot and [`Gamepads::poll_once`] diffs it against the previous
snapshot, invoking the per-device listeners only for values that changed.

# Layout

Each device reports six axes and sixteen buttons.

| Axis | Meaning | Range |
|------|---------|-------|
| 0 | left stick x | about -1..1 |
| 1 | left stick y | about -1..1 |
| 2 | right stick x | about -1..1 |
| 3 | right stick y | about -1..1 |
| 4 | left trigger | 0..1 |
| 5 | right trigger | 0..1 |

Buttons 0..=15 are A, B, X, Y, left shoulder, right shoulder, left trigger, right trigger,
back, start, left stick, right stick, d-pad up, down, left, right. The triggers appear twice,
as axes 4/5 and as analog buttons 6/7, for frameworks that model them as buttons.

# Example

```
use app_system::input::gamepad::{Gamepads, GamepadDriver, DeviceIdentity, RawGamepadState, DisconnectPolicy};

struct OnePad(RawGamepadState);
impl GamepadDriver for OnePad {
    fn slot_count(&self) -> usize { 1 }
    fn query(&mut self, _slot: usize) -> Option<RawGamepadState> { Some(self.0) }
    fn identity(&self) -> DeviceIdentity { DeviceIdentity::XBOX_360 }
}

let mut pads = Gamepads::new(DisconnectPolicy::PreserveLastKnown);
let mut driver = OnePad(RawGamepadState { thumb_lx: 16384, ..Default::default() });
pads.poll_once(&mut driver);
assert_eq!(pads.get(0).unwrap().axis(0), 0.5);
assert_eq!(pads.get(0).unwrap().vendor(), Some("Microsoft"));
```
*/

/// Number of device slots the framework exposes. Drivers may support fewer.
pub const MAX_GAMEPADS: usize = 12;
pub const AXIS_COUNT: usize = 6;
pub const BUTTON_COUNT: usize = 16;

/// Digital button bitmask as reported by the controller driver (XInput layout).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadButtons(pub u16);

impl GamepadButtons {
    pub const DPAD_UP: u16 = 0x0001;
    pub const DPAD_DOWN: u16 = 0x0002;
    pub const DPAD_LEFT: u16 = 0x0004;
    pub const DPAD_RIGHT: u16 = 0x0008;
    pub const START: u16 = 0x0010;
    pub const BACK: u16 = 0x0020;
    pub const LEFT_THUMB: u16 = 0x0040;
    pub const RIGHT_THUMB: u16 = 0x0080;
    pub const LEFT_SHOULDER: u16 = 0x0100;
    pub const RIGHT_SHOULDER: u16 = 0x0200;
    pub const A: u16 = 0x1000;
    pub const B: u16 = 0x2000;
    pub const X: u16 = 0x4000;
    pub const Y: u16 = 0x8000;

    #[inline]
    pub const fn contains(self, mask: u16) -> bool {
        self.0 & mask != 0
    }

    #[inline]
    fn value(self, mask: u16) -> f32 {
        if self.contains(mask) { 1.0 } else { 0.0 }
    }
}

/// One raw controller snapshot, in driver units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawGamepadState {
    pub buttons: GamepadButtons,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub thumb_lx: i16,
    pub thumb_ly: i16,
    pub thumb_rx: i16,
    pub thumb_ry: i16,
}

#[inline]
fn stick(raw: i16) -> f32 {
    f32::from(raw) / 32768.0
}

#[inline]
fn trigger(raw: u8) -> f32 {
    f32::from(raw) / 255.0
}

impl RawGamepadState {
    /// Sticks are divided by 32768, triggers by 255.
    pub fn axes(&self) -> [f32; AXIS_COUNT] {
        [
            stick(self.thumb_lx),
            stick(self.thumb_ly),
            stick(self.thumb_rx),
            stick(self.thumb_ry),
            trigger(self.left_trigger),
            trigger(self.right_trigger),
        ]
    }

    pub fn button_values(&self) -> [f32; BUTTON_COUNT] {
        let b = self.buttons;
        [
            b.value(GamepadButtons::A),
            b.value(GamepadButtons::B),
            b.value(GamepadButtons::X),
            b.value(GamepadButtons::Y),
            b.value(GamepadButtons::LEFT_SHOULDER),
            b.value(GamepadButtons::RIGHT_SHOULDER),
            trigger(self.left_trigger),
            trigger(self.right_trigger),
            b.value(GamepadButtons::BACK),
            b.value(GamepadButtons::START),
            b.value(GamepadButtons::LEFT_THUMB),
            b.value(GamepadButtons::RIGHT_THUMB),
            b.value(GamepadButtons::DPAD_UP),
            b.value(GamepadButtons::DPAD_DOWN),
            b.value(GamepadButtons::DPAD_LEFT),
            b.value(GamepadButtons::DPAD_RIGHT),
        ]
    }
}

/// Vendor and product strings a driver reports for the devices it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub vendor: &'static str,
    pub product_name: &'static str,
}

impl DeviceIdentity {
    pub const XBOX_360: DeviceIdentity = DeviceIdentity {
        vendor: "Microsoft",
        product_name: "Xbox 360 Controller",
    };
}

/**
A controller driver that can be queried synchronously.

`query` must not block; `None` means no device is connected in that slot (or the slot is
beyond what the driver supports).
*/
pub trait GamepadDriver {
    /// How many slots the driver supports. Slots at or beyond this are reported absent.
    fn slot_count(&self) -> usize;
    fn query(&mut self, slot: usize) -> Option<RawGamepadState>;
    fn identity(&self) -> DeviceIdentity;
}

/// What happens to a device's cached snapshot when it disconnects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectPolicy {
    /// Keep the last values. A reconnecting device that reports the same values fires nothing.
    #[default]
    PreserveLastKnown,
    /// Zero the snapshot without notifying, so the first non-zero report after a reconnect fires.
    Clear,
}

type Listener = Box<dyn FnMut(usize, f32)>;

/// One device slot: identity, last snapshot and the listeners the application registered.
pub struct Gamepad {
    vendor: Option<&'static str>,
    product_name: Option<&'static str>,
    axes: [f32; AXIS_COUNT],
    buttons: [f32; BUTTON_COUNT],
    axis_listener: Option<Listener>,
    button_listener: Option<Listener>,
}

impl Gamepad {
    fn new() -> Self {
        Gamepad {
            vendor: None,
            product_name: None,
            axes: [0.0; AXIS_COUNT],
            buttons: [0.0; BUTTON_COUNT],
            axis_listener: None,
            button_listener: None,
        }
    }

    /// `None` while no device is connected.
    pub fn vendor(&self) -> Option<&'static str> {
        self.vendor
    }

    pub fn product_name(&self) -> Option<&'static str> {
        self.product_name
    }

    pub fn is_connected(&self) -> bool {
        self.vendor.is_some()
    }

    /// The cached value of an axis; 0.0 for out-of-range indices.
    pub fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    /// The cached value of a button; 0.0 for out-of-range indices.
    pub fn button(&self, index: usize) -> f32 {
        self.buttons.get(index).copied().unwrap_or(0.0)
    }

    pub fn set_axis_listener<F: FnMut(usize, f32) + 'static>(&mut self, listener: F) {
        self.axis_listener = Some(Box::new(listener));
    }

    pub fn set_button_listener<F: FnMut(usize, f32) + 'static>(&mut self, listener: F) {
        self.button_listener = Some(Box::new(listener));
    }

    pub fn clear_listeners(&mut self) {
        self.axis_listener = None;
        self.button_listener = None;
    }

    fn mark_absent(&mut self, policy: DisconnectPolicy) {
        self.vendor = None;
        self.product_name = None;
        if policy == DisconnectPolicy::Clear {
            self.axes = [0.0; AXIS_COUNT];
            self.buttons = [0.0; BUTTON_COUNT];
        }
    }

    fn apply(&mut self, identity: DeviceIdentity, state: &RawGamepadState) {
        self.vendor = Some(identity.vendor);
        self.product_name = Some(identity.product_name);

        let axes = state.axes();
        for (index, value) in axes.into_iter().enumerate() {
            if self.axes[index] != value {
                if let Some(listener) = self.axis_listener.as_mut() {
                    listener(index, value);
                }
                self.axes[index] = value;
            }
        }
        let buttons = state.button_values();
        for (index, value) in buttons.into_iter().enumerate() {
            if self.buttons[index] != value {
                if let Some(listener) = self.button_listener.as_mut() {
                    listener(index, value);
                }
                self.buttons[index] = value;
            }
        }
    }
}

impl std::fmt::Debug for Gamepad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gamepad")
            .field("vendor", &self.vendor)
            .field("product_name", &self.product_name)
            .field("axes", &self.axes)
            .field("buttons", &self.buttons)
            .finish_non_exhaustive()
    }
}

/// The fixed table of [`MAX_GAMEPADS`] device slots.
#[derive(Debug)]
pub struct Gamepads {
    pads: Vec<Gamepad>,
    policy: DisconnectPolicy,
}

impl Gamepads {
    pub fn new(policy: DisconnectPolicy) -> Self {
        Gamepads {
            pads: (0..MAX_GAMEPADS).map(|_| Gamepad::new()).collect(),
            policy,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Gamepad> {
        self.pads.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Gamepad> {
        self.pads.get_mut(index)
    }

    pub fn policy(&self) -> DisconnectPolicy {
        self.policy
    }

    /**
    Queries every slot once and notifies listeners of changes.

    Devices are visited in ascending slot order; within a device all axes are diffed before any
    button, each in ascending index order.
    */
    pub fn poll_once<D: GamepadDriver + ?Sized>(&mut self, driver: &mut D) {
        let supported = driver.slot_count().min(MAX_GAMEPADS);
        let identity = driver.identity();
        for (slot, pad) in self.pads.iter_mut().enumerate() {
            let state = if slot < supported {
                driver.query(slot)
            } else {
                None
            };
            match state {
                Some(state) => {
                    if !pad.is_connected() {
                        logwise::info_sync!("Gamepad {slot} connected", slot = slot);
                    }
                    pad.apply(identity, &state);
                }
                None => {
                    if pad.is_connected() {
                        logwise::info_sync!("Gamepad {slot} disconnected", slot = slot);
                    }
                    pad.mark_absent(self.policy);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Scripted {
        slots: Vec<Option<RawGamepadState>>,
    }

    impl GamepadDriver for Scripted {
        fn slot_count(&self) -> usize {
            self.slots.len()
        }
        fn query(&mut self, slot: usize) -> Option<RawGamepadState> {
            self.slots[slot]
        }
        fn identity(&self) -> DeviceIdentity {
            DeviceIdentity::XBOX_360
        }
    }

    type Log = Rc<RefCell<Vec<(&'static str, usize, usize, f32)>>>;

    fn listen(pads: &mut Gamepads, slot: usize, log: &Log) {
        let axis_log = log.clone();
        let button_log = log.clone();
        let pad = pads.get_mut(slot).unwrap();
        pad.set_axis_listener(move |i, v| axis_log.borrow_mut().push(("axis", slot, i, v)));
        pad.set_button_listener(move |i, v| button_log.borrow_mut().push(("button", slot, i, v)));
    }

    #[test]
    fn normalization() {
        let state = RawGamepadState {
            thumb_lx: 16384,
            thumb_ly: -32768,
            thumb_rx: 32767,
            left_trigger: 128,
            right_trigger: 255,
            ..Default::default()
        };
        let axes = state.axes();
        assert_eq!(axes[0], 0.5);
        assert_eq!(axes[1], -1.0);
        assert!((axes[2] - 0.99997).abs() < 1e-4);
        assert_eq!(axes[3], 0.0);
        assert!((axes[4] - 0.502).abs() < 1e-3);
        assert_eq!(axes[5], 1.0);
    }

    #[test]
    fn buttons_layout() {
        let state = RawGamepadState {
            buttons: GamepadButtons(GamepadButtons::A | GamepadButtons::START | GamepadButtons::DPAD_RIGHT),
            left_trigger: 255,
            ..Default::default()
        };
        let values = state.button_values();
        let pressed: Vec<usize> = (0..BUTTON_COUNT).filter(|i| values[*i] != 0.0).collect();
        assert_eq!(pressed, vec![0, 6, 9, 15]);
        assert_eq!(values[6], 1.0);
    }

    #[test]
    fn unchanged_snapshot_fires_nothing() {
        let mut pads = Gamepads::new(DisconnectPolicy::default());
        let log: Log = Rc::default();
        listen(&mut pads, 0, &log);
        let mut driver = Scripted {
            slots: vec![Some(RawGamepadState {
                thumb_lx: 100,
                buttons: GamepadButtons(GamepadButtons::B),
                ..Default::default()
            })],
        };
        pads.poll_once(&mut driver);
        assert_eq!(log.borrow().len(), 2);
        pads.poll_once(&mut driver);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn single_axis_change_fires_once() {
        let mut pads = Gamepads::new(DisconnectPolicy::default());
        let log: Log = Rc::default();
        listen(&mut pads, 0, &log);
        let mut driver = Scripted {
            slots: vec![Some(RawGamepadState::default())],
        };
        pads.poll_once(&mut driver);
        assert!(log.borrow().is_empty());

        driver.slots[0] = Some(RawGamepadState {
            thumb_ry: 16384,
            ..Default::default()
        });
        pads.poll_once(&mut driver);
        assert_eq!(*log.borrow(), vec![("axis", 0, 3, 0.5)]);
        assert_eq!(pads.get(0).unwrap().axis(3), 0.5);
    }

    #[test]
    fn ordering_axes_before_buttons_and_devices_ascending() {
        let mut pads = Gamepads::new(DisconnectPolicy::default());
        let log: Log = Rc::default();
        listen(&mut pads, 0, &log);
        listen(&mut pads, 1, &log);
        let moved = RawGamepadState {
            buttons: GamepadButtons(GamepadButtons::Y),
            left_trigger: 255,
            thumb_lx: -16384,
            ..Default::default()
        };
        let mut driver = Scripted {
            slots: vec![Some(moved), Some(moved)],
        };
        pads.poll_once(&mut driver);
        let expected_one = |slot| {
            vec![
                ("axis", slot, 0, -0.5),
                ("axis", slot, 4, 1.0),
                ("button", slot, 3, 1.0),
                ("button", slot, 6, 1.0),
            ]
        };
        let mut expected = expected_one(0);
        expected.extend(expected_one(1));
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn identity_and_slots_beyond_driver() {
        let mut pads = Gamepads::new(DisconnectPolicy::default());
        let mut driver = Scripted {
            slots: vec![None, Some(RawGamepadState::default())],
        };
        pads.poll_once(&mut driver);
        assert!(!pads.get(0).unwrap().is_connected());
        assert_eq!(pads.get(1).unwrap().vendor(), Some("Microsoft"));
        assert_eq!(pads.get(1).unwrap().product_name(), Some("Xbox 360 Controller"));
        for slot in 2..MAX_GAMEPADS {
            assert_eq!(pads.get(slot).unwrap().vendor(), None);
        }
        assert!(pads.get(MAX_GAMEPADS).is_none());
    }

    #[test]
    fn preserve_last_known_suppresses_reconnect() {
        let mut pads = Gamepads::new(DisconnectPolicy::PreserveLastKnown);
        let log: Log = Rc::default();
        listen(&mut pads, 0, &log);
        let held = RawGamepadState {
            buttons: GamepadButtons(GamepadButtons::A),
            ..Default::default()
        };
        let mut driver = Scripted { slots: vec![Some(held)] };
        pads.poll_once(&mut driver);
        driver.slots[0] = None;
        pads.poll_once(&mut driver);
        assert_eq!(pads.get(0).unwrap().vendor(), None);
        assert_eq!(pads.get(0).unwrap().button(0), 1.0);
        driver.slots[0] = Some(held);
        pads.poll_once(&mut driver);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn clear_policy_refires_after_reconnect() {
        let mut pads = Gamepads::new(DisconnectPolicy::Clear);
        let log: Log = Rc::default();
        listen(&mut pads, 0, &log);
        let held = RawGamepadState {
            buttons: GamepadButtons(GamepadButtons::A),
            ..Default::default()
        };
        let mut driver = Scripted { slots: vec![Some(held)] };
        pads.poll_once(&mut driver);
        driver.slots[0] = None;
        pads.poll_once(&mut driver);
        assert_eq!(log.borrow().len(), 1, "disconnect itself is silent");
        assert_eq!(pads.get(0).unwrap().button(0), 0.0);
        driver.slots[0] = Some(held);
        pads.poll_once(&mut driver);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn values_are_cached_without_listeners() {
        let mut pads = Gamepads::new(DisconnectPolicy::default());
        let mut driver = Scripted {
            slots: vec![Some(RawGamepadState {
                right_trigger: 255,
                ..Default::default()
            })],
        };
        pads.poll_once(&mut driver);
        assert_eq!(pads.get(0).unwrap().axis(5), 1.0);
        assert_eq!(pads.get(0).unwrap().button(7), 1.0);
        assert_eq!(pads.get(0).unwrap().axis(99), 0.0);
    }
}
