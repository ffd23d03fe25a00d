// Player input state shared by the scenes

use super::controls::{gamepad_keymap, keyboard_keymap};
use crate::engine::input::{DeviceState, Handler, InputSystem};
use std::sync::Arc;

/// Which handler drives single-player flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainInput {
    Keyboard,
    Gamepad,
}

/// Input handlers for every local player
///
/// All three handlers stay live; `main` only picks which one menus and
/// single-player scenes listen to.
#[derive(Debug)]
pub struct GameState {
    pub player1_keyboard: Handler,
    pub player1_gamepad: Handler,
    pub player2_gamepad: Handler,
    main: MainInput,
}

impl GameState {
    /// Bind the controls and create the handlers
    pub fn new(input: &InputSystem, main: MainInput) -> Self {
        let gamepad_keymap = Arc::new(gamepad_keymap());
        let keyboard_keymap = Arc::new(keyboard_keymap());

        Self {
            player1_keyboard: input.new_handler(0, keyboard_keymap),
            player1_gamepad: input.new_handler(0, gamepad_keymap.clone()),
            player2_gamepad: input.new_handler(1, gamepad_keymap),
            main,
        }
    }

    /// Get the handler that drives single-player flows
    pub fn main_input(&self) -> &Handler {
        match self.main {
            MainInput::Keyboard => &self.player1_keyboard,
            MainInput::Gamepad => &self.player1_gamepad,
        }
    }

    pub fn main_selection(&self) -> MainInput {
        self.main
    }

    /// Poll every handler for a new tick
    pub fn update_inputs(&mut self, devices: &DeviceState) {
        self.player1_keyboard.update(devices);
        self.player1_gamepad.update(devices);
        self.player2_gamepad.update(devices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{Action, GamepadButton};
    use winit::keyboard::KeyCode;

    #[test]
    fn test_main_input_selection() {
        let input = InputSystem::without_gamepads();

        let keyboard = GameState::new(&input, MainInput::Keyboard);
        assert_eq!(keyboard.main_input().slot(), 0);
        assert!(Arc::ptr_eq(
            keyboard.main_input().keymap(),
            keyboard.player1_keyboard.keymap()
        ));

        let gamepad = GameState::new(&input, MainInput::Gamepad);
        assert_eq!(gamepad.main_selection(), MainInput::Gamepad);
        assert!(Arc::ptr_eq(
            gamepad.main_input().keymap(),
            gamepad.player1_gamepad.keymap()
        ));
    }

    #[test]
    fn test_gamepad_players_share_keymap() {
        let input = InputSystem::without_gamepads();
        let state = GameState::new(&input, MainInput::Keyboard);

        assert!(Arc::ptr_eq(
            state.player1_gamepad.keymap(),
            state.player2_gamepad.keymap()
        ));
        assert_eq!(state.player1_gamepad.slot(), 0);
        assert_eq!(state.player2_gamepad.slot(), 1);
    }

    #[test]
    fn test_players_read_their_own_devices() {
        let input = InputSystem::without_gamepads();
        let mut state = GameState::new(&input, MainInput::Keyboard);
        let mut devices = DeviceState::new();
        devices.press_key(KeyCode::KeyA);
        devices.connect_gamepad(0);
        devices.connect_gamepad(1).set_button(GamepadButton::Y, true);

        state.update_inputs(&devices);

        assert!(state.player1_keyboard.is_pressed(Action::SectorLeft));
        assert!(!state.player1_gamepad.is_pressed(Action::SectorLeft));
        assert!(!state.player1_gamepad.is_pressed(Action::Fortify));
        assert!(state.player2_gamepad.is_pressed(Action::Fortify));
        assert!(!state.player2_gamepad.is_pressed(Action::SectorLeft));
    }

    #[test]
    fn test_non_main_handlers_stay_live() {
        let input = InputSystem::without_gamepads();
        let mut state = GameState::new(&input, MainInput::Keyboard);
        let mut devices = DeviceState::new();
        devices.connect_gamepad(1).set_button(GamepadButton::A, true);

        state.update_inputs(&devices);

        assert!(!state.main_input().is_pressed(Action::Confirm));
        assert!(state.player2_gamepad.just_pressed(Action::Confirm));
    }
}
