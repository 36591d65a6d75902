// Loading screen: waits for the asset jobs

use super::SceneStatus;
use crate::engine::assets::AssetError;
use crate::engine::renderer::Screen;
use crate::game::GameContext;
use image::Rgba;
use log::info;

const BACKGROUND: Rgba<u8> = Rgba([0xee, 0xee, 0xee, 0xff]);

#[derive(Debug, Default)]
pub struct LoadingScene {
    /// First tick this scene saw
    started_at: Option<f64>,
    /// When the last asset arrived
    loaded_at: Option<f64>,
}

impl LoadingScene {
    pub fn init(&mut self) {
        self.started_at = None;
        self.loaded_at = None;
    }

    pub fn update(&mut self, ctx: &mut GameContext, time: f64) -> Result<SceneStatus, AssetError> {
        let started_at = *self.started_at.get_or_insert(time);

        if self.loaded_at.is_none() {
            if ctx.assets.poll()? {
                let images = ctx.assets.take_images();
                info!("Handing {} images to the screen", images.len());
                ctx.screen.insert_images(images);
                self.loaded_at = Some(time);
            } else {
                check_timeout(
                    time - started_at,
                    ctx.config.load_timeout_ms,
                    ctx.assets.pending(),
                )?;
            }
        }

        Ok(match self.loaded_at {
            Some(loaded_at) if time - loaded_at > ctx.config.load_grace_ms => SceneStatus::Loaded,
            _ => SceneStatus::Working,
        })
    }

    pub fn draw(&self, screen: &mut Screen) {
        screen.fill(BACKGROUND);
        screen.print(50, 50, "Loading...");
    }
}

/// Fail once a load has been waiting longer than `timeout` (ms)
fn check_timeout(elapsed: f64, timeout: Option<f64>, pending: usize) -> Result<(), AssetError> {
    match timeout {
        Some(timeout) if elapsed > timeout => Err(AssetError::LoadTimeout {
            elapsed_ms: elapsed as u64,
            pending,
        }),
        _ => Ok(()),
    }
}
