use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use tanks::engine::assets::{exit_on_critical_error, DirSource, Loader};
use tanks::engine::context::Context;
use tanks::engine::input::InputSystem;
use tanks::engine::scene::run_game;
use tanks::game::{self, MainInput};

/// Tanks: a real-time strategy game
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Use gamepad controls instead of keyboard
    #[arg(long)]
    gamepad: bool,

    /// Directory containing the game assets
    #[arg(long, value_name = "DIR", default_value = "assets")]
    assets: PathBuf,

    /// Run in a window instead of fullscreen
    #[arg(long)]
    windowed: bool,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Starting Tanks...");

    let loader = Loader::new(DirSource::locate(&cli.assets), exit_on_critical_error());
    let mut ctx = Context::new(
        game::window_config(!cli.windowed),
        InputSystem::new(),
        loader,
    );

    let main_input = if cli.gamepad {
        MainInput::Gamepad
    } else {
        MainInput::Keyboard
    };
    let scene = game::setup(&mut ctx, main_input)?;

    run_game(ctx, scene)
}
