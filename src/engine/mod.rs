// Engine modules: input, assets, scenes, run loop

pub mod assets;
pub mod context;
pub mod game_loop;
pub mod input;
pub mod scene;
