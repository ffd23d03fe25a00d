// Game setup
//
// This module wires the game on top of the engine:
// - Control schemes for keyboard and gamepad
// - Asset tables and their preloading
// - Player input state and the main input selection
// - The menu scene that receives it all

pub mod controls;
pub mod menu;
pub mod resources;
pub mod state;

// Re-export commonly used types
pub use menu::MenuController;
pub use state::{GameState, MainInput};

use crate::engine::context::{Context, WindowConfig};
use crate::engine::scene::RootScene;
use anyhow::Result;
use log::info;

const WINDOW_TITLE: &str = "Tanks";
const WINDOW_WIDTH: u32 = 1920;
const WINDOW_HEIGHT: u32 = 1080;

/// Window settings for the game
pub fn window_config(fullscreen: bool) -> WindowConfig {
    WindowConfig {
        title: WINDOW_TITLE.to_string(),
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
        fullscreen,
    }
}

/// Bind controls, preload every asset and build the initial scene
pub fn setup(ctx: &mut Context, main: MainInput) -> Result<RootScene> {
    let state = GameState::new(&ctx.input, main);
    info!("Main input: {:?}", state.main_selection());

    resources::register_resources(&mut ctx.loader)?;

    Ok(RootScene::new("menu", MenuController::new(state)))
}
