// Control schemes for the two device families

use crate::engine::input::{Action, GamepadButton, Key, Keymap};
use winit::keyboard::KeyCode;

/// Default gamepad bindings
///
/// Directions double as item/category navigation inside menus.
pub fn gamepad_keymap() -> Keymap {
    Keymap::new([
        (Action::SectorLeft, Key::gamepad(GamepadButton::Left)),
        (Action::SectorRight, Key::gamepad(GamepadButton::Right)),
        (Action::SectorDown, Key::gamepad(GamepadButton::Down)),
        (Action::SectorUp, Key::gamepad(GamepadButton::Up)),
        (Action::Confirm, Key::gamepad(GamepadButton::A)),
        (Action::OpenMenu, Key::gamepad(GamepadButton::X)),
        (Action::Cancel, Key::gamepad(GamepadButton::B)),
        (Action::PrevItem, Key::gamepad(GamepadButton::Left)),
        (Action::NextItem, Key::gamepad(GamepadButton::Right)),
        (Action::NextCategory, Key::gamepad(GamepadButton::Down)),
        (Action::PrevCategory, Key::gamepad(GamepadButton::Up)),
        (Action::Fortify, Key::gamepad(GamepadButton::Y)),
        (Action::Exit, Key::gamepad(GamepadButton::Start)),
    ])
}

/// Default keyboard bindings (WASD layout)
pub fn keyboard_keymap() -> Keymap {
    Keymap::new([
        (Action::SectorLeft, Key::key(KeyCode::KeyA)),
        (Action::SectorRight, Key::key(KeyCode::KeyD)),
        (Action::SectorDown, Key::key(KeyCode::KeyS)),
        (Action::SectorUp, Key::key(KeyCode::KeyW)),
        (Action::Confirm, Key::key(KeyCode::Space)),
        (Action::OpenMenu, Key::key(KeyCode::Enter)),
        (Action::Cancel, Key::key(KeyCode::KeyQ)),
        (Action::PrevItem, Key::key(KeyCode::KeyA)),
        (Action::NextItem, Key::key(KeyCode::KeyD)),
        (Action::NextCategory, Key::key(KeyCode::KeyS)),
        (Action::PrevCategory, Key::key(KeyCode::KeyW)),
        (Action::Fortify, Key::key(KeyCode::KeyE)),
        (Action::Exit, Key::key(KeyCode::Escape)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::DeviceFamily;
    use enum_map::Enum;

    #[test]
    fn test_keymaps_bind_every_action() {
        assert_eq!(gamepad_keymap().len(), Action::LENGTH);
        assert_eq!(keyboard_keymap().len(), Action::LENGTH);
    }

    #[test]
    fn test_keymap_families() {
        assert_eq!(gamepad_keymap().family(), Some(DeviceFamily::Gamepad));
        assert_eq!(keyboard_keymap().family(), Some(DeviceFamily::Keyboard));
    }

    #[test]
    fn test_sector_left_bindings() {
        assert_eq!(
            keyboard_keymap().key(Action::SectorLeft),
            Some(Key::key(KeyCode::KeyA))
        );
        assert_eq!(
            gamepad_keymap().key(Action::SectorLeft),
            Some(Key::gamepad(GamepadButton::Left))
        );
    }

    #[test]
    fn test_exit_bindings() {
        assert_eq!(
            keyboard_keymap().key(Action::Exit),
            Some(Key::key(KeyCode::Escape))
        );
        assert_eq!(
            gamepad_keymap().key(Action::Exit),
            Some(Key::gamepad(GamepadButton::Start))
        );
    }
}
