use anyhow::{Context, Result};
use log::{debug, error, info};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::GameConfig;
use engine::game_loop::FrameClock;
use engine::renderer::Renderer;
use game::{Game, GameContext};

const CONFIG_PATH: &str = "config.json";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GameConfig::load(CONFIG_PATH).context("Failed to read config")?;
    info!("Starting {}...", config.title);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.screen_width,
                config.screen_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut game = Game::new(GameContext::new(config).context("Failed to start asset loading")?);
    let mut clock = FrameClock::new();

    // Main event loop
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
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                game.context_mut().input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                game.frame(clock.begin_frame());
                if let Err(e) = renderer.render(game.screen().frame()) {
                    error!("Render error: {}", e);
                }

                if clock.frame_count() % 600 == 0 {
                    debug!(
                        "{:.1} fps, {} blits so far",
                        clock.fps(),
                        game.screen().blit_count()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
