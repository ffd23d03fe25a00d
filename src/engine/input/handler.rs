// Per-device input state for a single consumer

use super::action::Action;
use super::devices::DeviceState;
use super::keymap::Keymap;
use enum_map::EnumMap;
use std::sync::Arc;

/// Reads one device slot through one keymap
///
/// Each handler keeps its own pressed state, so several handlers built
/// from the same keymap never observe each other.
#[derive(Debug)]
pub struct Handler {
    /// Which physical device of the keymap's family to read (gamepad 0, 1, ...)
    slot: usize,

    keymap: Arc<Keymap>,

    /// Actions active this tick
    pressed: EnumMap<Action, bool>,

    /// Actions active on the previous tick
    previous_pressed: EnumMap<Action, bool>,

    /// Whether the device was present on the last update
    connected: bool,
}

impl Handler {
    /// Create a handler; does not require the device to exist yet
    pub fn new(slot: usize, keymap: Arc<Keymap>) -> Self {
        Self {
            slot,
            keymap,
            pressed: EnumMap::default(),
            previous_pressed: EnumMap::default(),
            connected: false,
        }
    }

    /// Get the device slot
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Get the keymap this handler reads through
    pub fn keymap(&self) -> &Arc<Keymap> {
        &self.keymap
    }

    /// Poll the devices for a new tick
    /// Call this exactly once per tick
    pub fn update(&mut self, devices: &DeviceState) {
        self.previous_pressed = self.pressed;

        let mut pressed = EnumMap::default();
        let mut connected = false;
        for (action, key) in self.keymap.bindings() {
            if !devices.is_connected(self.slot, key) {
                continue;
            }
            connected = true;
            pressed[action] = devices.is_down(self.slot, key) || devices.went_down(self.slot, key);
        }

        self.pressed = pressed;
        self.connected = connected;
    }

    /// Check if the device was present on the last update
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action]
    }

    /// Check if an action was just pressed this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed[action] && !self.previous_pressed[action]
    }

    /// Check if an action was just released this tick
    pub fn just_released(&self, action: Action) -> bool {
        !self.pressed[action] && self.previous_pressed[action]
    }

    /// Check if an action is held (pressed for multiple ticks)
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed[action] && self.previous_pressed[action]
    }

    /// Get all currently pressed actions
    pub fn pressed_actions(&self) -> Vec<Action> {
        self.pressed
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(action, _)| action)
            .collect()
    }

    /// Reset all input state; the device counts as absent until the next update
    pub fn reset(&mut self) {
        self.pressed = EnumMap::default();
        self.previous_pressed = EnumMap::default();
        self.connected = false;
    }
}
