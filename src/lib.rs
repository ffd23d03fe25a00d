//! Tanks: a real-time strategy game.
//!
//! - [`engine`] – input bindings, asset registries and preloading, scenes and the run loop
//! - [`game`] – the game's control schemes, asset tables, player state and menu scene

pub mod engine;
pub mod game;
