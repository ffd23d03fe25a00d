// Game action definitions and the physical key vocabulary

use enum_map::Enum;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
///
/// Actions are dense and zero-based, so per-action tables can be plain arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Action {
    // Sector cursor
    SectorLeft,
    SectorRight,
    SectorUp,
    SectorDown,

    // Menu navigation
    Cancel,
    OpenMenu,
    Confirm,
    NextItem,
    PrevItem,
    NextCategory,
    PrevCategory,

    // Battle commands
    Fortify,

    // Meta actions
    Exit,
}

/// Gamepad buttons the engine understands
///
/// Directions cover both the d-pad and the left stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum GamepadButton {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    Start,
    Select,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    LeftStick,
    RightStick,
}

impl GamepadButton {
    /// Map a gilrs button onto the engine vocabulary
    pub fn from_gilrs(button: gilrs::Button) -> Option<Self> {
        use gilrs::Button::*;
        Some(match button {
            South => GamepadButton::A,
            East => GamepadButton::B,
            West => GamepadButton::X,
            North => GamepadButton::Y,
            Start => GamepadButton::Start,
            Select => GamepadButton::Select,
            LeftTrigger => GamepadButton::LeftShoulder,
            RightTrigger => GamepadButton::RightShoulder,
            LeftTrigger2 => GamepadButton::LeftTrigger,
            RightTrigger2 => GamepadButton::RightTrigger,
            LeftThumb => GamepadButton::LeftStick,
            RightThumb => GamepadButton::RightStick,
            DPadUp => GamepadButton::Up,
            DPadDown => GamepadButton::Down,
            DPadLeft => GamepadButton::Left,
            DPadRight => GamepadButton::Right,
            _ => return None,
        })
    }
}

/// Device families a key can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    Keyboard,
    Gamepad,
}

/// A concrete physical input (keyboard key or gamepad button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Keyboard(KeyCode),
    Gamepad(GamepadButton),
}

impl Key {
    /// Create a keyboard key
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a gamepad key
    pub fn gamepad(button: GamepadButton) -> Self {
        Self::Gamepad(button)
    }

    /// The device family this key is read from
    pub fn family(&self) -> DeviceFamily {
        match self {
            Key::Keyboard(_) => DeviceFamily::Keyboard,
            Key::Gamepad(_) => DeviceFamily::Gamepad,
        }
    }
}
