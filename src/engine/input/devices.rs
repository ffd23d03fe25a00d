// Raw state of the physical input devices

use super::action::{GamepadButton, Key};
use enum_map::EnumMap;
use glam::Vec2;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Left stick deflection needed to register a direction
const STICK_PRESS_THRESHOLD: f32 = 0.5;

/// Current state of a single gamepad
#[derive(Debug, Clone, Default)]
pub struct GamepadState {
    buttons: EnumMap<GamepadButton, bool>,
    /// Buttons that went down since the last tick, even if already released
    tapped: EnumMap<GamepadButton, bool>,
    left_stick: Vec2,
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a button; directions also fire from the left stick
    pub fn is_down(&self, button: GamepadButton) -> bool {
        if self.buttons[button] {
            return true;
        }
        match button {
            GamepadButton::Left => self.left_stick.x <= -STICK_PRESS_THRESHOLD,
            GamepadButton::Right => self.left_stick.x >= STICK_PRESS_THRESHOLD,
            GamepadButton::Up => self.left_stick.y >= STICK_PRESS_THRESHOLD,
            GamepadButton::Down => self.left_stick.y <= -STICK_PRESS_THRESHOLD,
            _ => false,
        }
    }

    /// Check whether a button went down since the last tick
    pub fn went_down(&self, button: GamepadButton) -> bool {
        self.tapped[button]
    }

    pub fn set_button(&mut self, button: GamepadButton, down: bool) {
        if down {
            self.tapped[button] = true;
        }
        self.buttons[button] = down;
    }

    pub fn set_left_stick_x(&mut self, value: f32) {
        self.left_stick.x = value;
    }

    pub fn set_left_stick_y(&mut self, value: f32) {
        self.left_stick.y = value;
    }

    pub fn left_stick(&self) -> Vec2 {
        self.left_stick
    }
}

/// Snapshot of every device the handlers can read from
///
/// The keyboard exists only in slot 0. Gamepad slots are assigned in
/// connection order; a slot without a connected gamepad reads as released.
///
/// Presses are also latched until [`DeviceState::end_tick`], so a key that
/// goes down and up between two ticks is still seen by the handlers.
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    keyboard: HashSet<KeyCode>,
    /// Keys that went down since the last tick
    keyboard_tapped: HashSet<KeyCode>,
    gamepads: Vec<Option<GamepadState>>,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `key` is down on device `slot`
    pub fn is_down(&self, slot: usize, key: Key) -> bool {
        match key {
            Key::Keyboard(code) => slot == 0 && self.keyboard.contains(&code),
            Key::Gamepad(button) => self
                .gamepad(slot)
                .is_some_and(|gamepad| gamepad.is_down(button)),
        }
    }

    /// Check whether `key` went down on device `slot` since the last tick
    pub fn went_down(&self, slot: usize, key: Key) -> bool {
        match key {
            Key::Keyboard(code) => slot == 0 && self.keyboard_tapped.contains(&code),
            Key::Gamepad(button) => self
                .gamepad(slot)
                .is_some_and(|gamepad| gamepad.went_down(button)),
        }
    }

    /// Check whether the device in `slot` is present for the given key's family
    pub fn is_connected(&self, slot: usize, key: Key) -> bool {
        match key {
            Key::Keyboard(_) => slot == 0,
            Key::Gamepad(_) => self.gamepad(slot).is_some(),
        }
    }

    pub fn gamepad(&self, slot: usize) -> Option<&GamepadState> {
        self.gamepads.get(slot).and_then(Option::as_ref)
    }

    pub fn gamepad_mut(&mut self, slot: usize) -> Option<&mut GamepadState> {
        self.gamepads.get_mut(slot).and_then(Option::as_mut)
    }

    pub fn press_key(&mut self, code: KeyCode) {
        self.keyboard.insert(code);
        self.keyboard_tapped.insert(code);
    }

    pub fn release_key(&mut self, code: KeyCode) {
        self.keyboard.remove(&code);
    }

    /// Release every keyboard key (e.g. on focus loss)
    pub fn clear_keyboard(&mut self) {
        self.keyboard.clear();
    }

    /// Forget the presses latched during the tick that just ran
    /// Call this after every handler has been updated
    pub fn end_tick(&mut self) {
        self.keyboard_tapped.clear();
        for gamepad in self.gamepads.iter_mut().flatten() {
            gamepad.tapped = EnumMap::default();
        }
    }

    /// Mark a gamepad slot as connected, keeping any existing state
    pub fn connect_gamepad(&mut self, slot: usize) -> &mut GamepadState {
        if self.gamepads.len() <= slot {
            self.gamepads.resize(slot + 1, None);
        }
        self.gamepads[slot].get_or_insert_with(GamepadState::new)
    }

    /// Drop a gamepad; its slot reads as released until it reconnects
    pub fn disconnect_gamepad(&mut self, slot: usize) {
        if let Some(gamepad) = self.gamepads.get_mut(slot) {
            *gamepad = None;
        }
    }

    /// Number of connected gamepads
    pub fn connected_gamepads(&self) -> usize {
        self.gamepads.iter().filter(|gamepad| gamepad.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_only_in_slot_zero() {
        let mut devices = DeviceState::new();
        devices.press_key(KeyCode::KeyA);

        assert!(devices.is_down(0, Key::key(KeyCode::KeyA)));
        assert!(!devices.is_down(1, Key::key(KeyCode::KeyA)));
        assert!(!devices.is_connected(1, Key::key(KeyCode::KeyA)));
    }

    #[test]
    fn test_release_key() {
        let mut devices = DeviceState::new();
        devices.press_key(KeyCode::Space);
        devices.release_key(KeyCode::Space);

        assert!(!devices.is_down(0, Key::key(KeyCode::Space)));
    }

    #[test]
    fn test_tap_latched_until_end_tick() {
        let mut devices = DeviceState::new();
        devices.press_key(KeyCode::Space);
        devices.release_key(KeyCode::Space);

        let key = Key::key(KeyCode::Space);
        assert!(!devices.is_down(0, key));
        assert!(devices.went_down(0, key));

        devices.end_tick();
        assert!(!devices.went_down(0, key));
    }

    #[test]
    fn test_gamepad_tap_latched_until_end_tick() {
        let mut devices = DeviceState::new();
        let gamepad = devices.connect_gamepad(0);
        gamepad.set_button(GamepadButton::A, true);
        gamepad.set_button(GamepadButton::A, false);

        let key = Key::gamepad(GamepadButton::A);
        assert!(!devices.is_down(0, key));
        assert!(devices.went_down(0, key));
        assert!(!devices.went_down(1, key));

        devices.end_tick();
        assert!(!devices.went_down(0, key));
    }

    #[test]
    fn test_clear_keyboard() {
        let mut devices = DeviceState::new();
        devices.press_key(KeyCode::KeyW);
        devices.press_key(KeyCode::KeyS);
        devices.clear_keyboard();

        assert!(!devices.is_down(0, Key::key(KeyCode::KeyW)));
        assert!(!devices.is_down(0, Key::key(KeyCode::KeyS)));
    }

    #[test]
    fn test_absent_gamepad_reads_released() {
        let devices = DeviceState::new();
        let key = Key::gamepad(GamepadButton::A);

        assert!(!devices.is_down(3, key));
        assert!(!devices.is_connected(3, key));
    }

    #[test]
    fn test_gamepad_slots_are_independent() {
        let mut devices = DeviceState::new();
        devices.connect_gamepad(0);
        devices
            .connect_gamepad(1)
            .set_button(GamepadButton::A, true);

        let key = Key::gamepad(GamepadButton::A);
        assert!(!devices.is_down(0, key));
        assert!(devices.is_down(1, key));
        assert_eq!(devices.connected_gamepads(), 2);
    }

    #[test]
    fn test_disconnect_gamepad() {
        let mut devices = DeviceState::new();
        devices.connect_gamepad(0).set_button(GamepadButton::B, true);
        devices.disconnect_gamepad(0);

        assert!(!devices.is_down(0, Key::gamepad(GamepadButton::B)));
        assert_eq!(devices.connected_gamepads(), 0);
    }

    #[test]
    fn test_reconnect_keeps_slot() {
        let mut devices = DeviceState::new();
        devices.connect_gamepad(1).set_button(GamepadButton::X, true);
        devices.connect_gamepad(1);

        assert!(devices.is_down(1, Key::gamepad(GamepadButton::X)));
    }

    #[test]
    fn test_left_stick_as_direction() {
        let mut gamepad = GamepadState::new();
        gamepad.set_left_stick_x(-0.8);
        assert!(gamepad.is_down(GamepadButton::Left));
        assert!(!gamepad.is_down(GamepadButton::Right));

        gamepad.set_left_stick_x(0.2);
        assert!(!gamepad.is_down(GamepadButton::Left));

        gamepad.set_left_stick_y(0.9);
        assert!(gamepad.is_down(GamepadButton::Up));
    }
}
