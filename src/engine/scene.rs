// Scene controllers and the window-driven run loop

use super::context::Context;
use super::game_loop::{GameLoop, FIXED_TIMESTEP};
use anyhow::{anyhow, bail, Result};
use log::info;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Fullscreen, WindowBuilder},
};

/// What the run loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    Continue,
    Exit,
}

/// Game logic for one scene
pub trait SceneController {
    /// Called once when the scene becomes active
    fn init(&mut self, _ctx: &mut Context) {}

    /// Called once per fixed tick
    fn update(&mut self, ctx: &mut Context, delta: f64) -> SceneCommand;
}

/// The scene the run loop starts with
pub struct RootScene {
    name: &'static str,
    controller: Box<dyn SceneController>,
    active: bool,
}

impl RootScene {
    pub fn new(name: &'static str, controller: impl SceneController + 'static) -> Self {
        Self {
            name,
            controller: Box::new(controller),
            active: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the scene; all requested assets must be resident
    pub fn activate(&mut self, ctx: &mut Context) -> Result<()> {
        if !ctx.loader.is_ready() {
            bail!("Scene '{}' activated before assets finished loading", self.name);
        }

        info!("Activating scene '{}'", self.name);
        self.controller.init(ctx);
        self.active = true;
        Ok(())
    }

    /// Run one fixed tick
    pub fn tick(&mut self, ctx: &mut Context) -> SceneCommand {
        let command = self.controller.update(ctx, FIXED_TIMESTEP);
        ctx.input.end_tick();
        command
    }
}

/// Open the window and run `scene` until it exits or the window closes
pub fn run_game(mut ctx: Context, mut scene: RootScene) -> Result<()> {
    scene.activate(&mut ctx)?;

    let event_loop = EventLoop::new()?;
    let mut builder = WindowBuilder::new()
        .with_title(ctx.window.title.clone())
        .with_inner_size(LogicalSize::new(ctx.window.width, ctx.window.height))
        .with_resizable(true);
    if ctx.window.fullscreen {
        builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    let window = builder.build(&event_loop)?;

    info!("Window created successfully");

    let mut game_loop = GameLoop::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event,
                        // synthetic presses arrive on focus changes; focus loss is handled below
                        is_synthetic: false,
                        ..
                    },
                ..
            } => {
                ctx.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                ctx.input.process_focus_lost();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                ctx.input.poll_gamepads();
                for _ in 0..game_loop.begin_frame() {
                    if scene.tick(&mut ctx) == SceneCommand::Exit {
                        info!("Scene '{}' requested exit", scene.name());
                        elwt.exit();
                        break;
                    }
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow!("Event loop error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetError, ImageId, ImageInfo, Loader, MemorySource};
    use crate::engine::context::WindowConfig;
    use crate::engine::input::{InputSystem, Key};
    use winit::keyboard::KeyCode;

    struct CountingScene {
        updates: usize,
    }

    impl SceneController for CountingScene {
        fn update(&mut self, _ctx: &mut Context, delta: f64) -> SceneCommand {
            assert!((delta - FIXED_TIMESTEP).abs() < 1e-12);
            self.updates += 1;
            if self.updates >= 2 {
                SceneCommand::Exit
            } else {
                SceneCommand::Continue
            }
        }
    }

    fn context(source: MemorySource) -> Context {
        let hook = Box::new(|_: &AssetError| {});
        Context::new(
            WindowConfig::default(),
            InputSystem::without_gamepads(),
            Loader::new(source, hook),
        )
    }

    #[test]
    fn test_activate_runs_init() {
        let mut ctx = context(MemorySource::new());
        let mut scene = RootScene::new("menu", CountingScene { updates: 0 });

        scene.activate(&mut ctx).unwrap();

        assert_eq!(scene.name(), "menu");
        assert!(scene.is_active());
    }

    #[test]
    fn test_activate_refuses_unloaded_assets() {
        let mut ctx = context(MemorySource::new());
        ctx.loader.set_image(ImageId::Grid, ImageInfo::new("grid.png"));
        let _ = ctx.loader.preload_image(ImageId::Grid);

        let mut scene = RootScene::new("menu", CountingScene { updates: 0 });

        assert!(scene.activate(&mut ctx).is_err());
        assert!(!scene.is_active());
    }

    #[test]
    fn test_tick_forwards_scene_command() {
        let mut ctx = context(MemorySource::new());
        let mut scene = RootScene::new("game", CountingScene { updates: 0 });

        assert_eq!(scene.tick(&mut ctx), SceneCommand::Continue);
        assert_eq!(scene.tick(&mut ctx), SceneCommand::Exit);
    }

    #[test]
    fn test_tick_clears_latched_presses() {
        let mut ctx = context(MemorySource::new());
        let mut scene = RootScene::new("game", CountingScene { updates: 0 });
        let space = Key::key(KeyCode::Space);
        ctx.input.devices_mut().press_key(KeyCode::Space);
        ctx.input.devices_mut().release_key(KeyCode::Space);
        assert!(ctx.input.devices().went_down(0, space));

        scene.tick(&mut ctx);

        assert!(!ctx.input.devices().went_down(0, space));
    }
}
