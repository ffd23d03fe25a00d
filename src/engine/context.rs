// Engine context shared by setup code and scenes

use super::assets::Loader;
use super::input::InputSystem;

/// Window settings used when the run loop opens the window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Game"),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Everything a scene can reach: window settings, input devices and assets
pub struct Context {
    pub window: WindowConfig,
    pub input: InputSystem,
    pub loader: Loader,
}

impl Context {
    pub fn new(window: WindowConfig, input: InputSystem, loader: Loader) -> Self {
        Self {
            window,
            input,
            loader,
        }
    }
}
