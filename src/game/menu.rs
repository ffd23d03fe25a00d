// Main menu scene

use super::state::GameState;
use crate::engine::context::Context;
use crate::engine::input::Action;
use crate::engine::scene::{SceneCommand, SceneController};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Exit,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::Play, MenuItem::Exit];

/// Controller of the "menu" scene
pub struct MenuController {
    state: GameState,
    cursor: usize,
}

impl MenuController {
    pub fn new(state: GameState) -> Self {
        Self { state, cursor: 0 }
    }

    pub fn selected(&self) -> MenuItem {
        MENU_ITEMS[self.cursor]
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl SceneController for MenuController {
    fn init(&mut self, ctx: &mut Context) {
        info!(
            "Menu opened ({:?} input, {} gamepad(s) connected)",
            self.state.main_selection(),
            ctx.input.devices().connected_gamepads()
        );
    }

    fn update(&mut self, ctx: &mut Context, _delta: f64) -> SceneCommand {
        self.state.update_inputs(ctx.input.devices());

        let input = self.state.main_input();
        if input.just_pressed(Action::Exit) {
            return SceneCommand::Exit;
        }

        let next = input.just_pressed(Action::NextItem) || input.just_pressed(Action::SectorDown);
        let prev = input.just_pressed(Action::PrevItem) || input.just_pressed(Action::SectorUp);
        let confirm = input.just_pressed(Action::Confirm);

        if next {
            self.cursor = (self.cursor + 1) % MENU_ITEMS.len();
        }
        if prev {
            self.cursor = (self.cursor + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
        }

        if confirm {
            match self.selected() {
                MenuItem::Play => info!("Starting battle"),
                MenuItem::Exit => return SceneCommand::Exit,
            }
        }

        SceneCommand::Continue
    }
}
