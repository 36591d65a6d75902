// Game logic: characters, scenes and the scene driver

pub mod characters;
pub mod scenes;

use crate::config::GameConfig;
use crate::engine::assets::{AssetError, AssetLoader, AssetManager, LevelData};
use crate::engine::input::InputState;
use crate::engine::renderer::Screen;
use image::{Rgba, RgbaImage};
use log::{error, info};
use scenes::{Scene, SceneId, SceneStatus};
use std::collections::HashMap;

const ERROR_BACKGROUND: Rgba<u8> = Rgba([0x20, 0x20, 0x20, 0xff]);

/// Services every scene works against
pub struct GameContext {
    pub screen: Screen,
    pub input: InputState,
    pub assets: AssetManager,
    pub config: GameConfig,
}

impl GameContext {
    /// Create the context and start loading every asset the config names
    pub fn new(config: GameConfig) -> Result<Self, AssetError> {
        let mut assets = AssetManager::new(AssetLoader::new(&config.asset_root));
        assets.load_images(config.images.iter())?;
        assets.load_level(&config.map_path, &config.animations_path)?;
        info!("Loading {} assets from {:?}", assets.pending(), config.asset_root);

        Ok(Self::with_assets(config, assets))
    }

    /// Create a context over assets that are already in memory
    #[allow(dead_code)]
    pub fn preloaded(
        config: GameConfig,
        images: HashMap<String, RgbaImage>,
        level: Option<LevelData>,
    ) -> Self {
        let assets = AssetManager::preloaded(AssetLoader::new(&config.asset_root), images, level);
        Self::with_assets(config, assets)
    }

    fn with_assets(config: GameConfig, assets: AssetManager) -> Self {
        Self {
            screen: Screen::new(config.screen_width, config.screen_height),
            input: InputState::new(),
            assets,
            config,
        }
    }
}

/// Drives the current scene once per frame
pub struct Game {
    ctx: GameContext,
    scene: Scene,
    /// First error a scene raised; the game stops updating once set
    halted: Option<AssetError>,
}

impl Game {
    pub fn new(ctx: GameContext) -> Self {
        let mut game = Self {
            ctx,
            scene: Scene::new(SceneId::Loading),
            halted: None,
        };
        if let Err(err) = game.scene.init(&mut game.ctx) {
            game.halt(err);
        }
        game
    }

    /// Run one frame at `time` (ms since start)
    pub fn frame(&mut self, time: f64) {
        self.ctx.input.begin_frame();

        if self.halted.is_none() {
            if let Err(err) = self.step(time) {
                self.halt(err);
            }
        }

        if self.halted.is_some() {
            self.draw_error();
        }
    }

    fn step(&mut self, time: f64) -> Result<(), AssetError> {
        let status = self.scene.status();
        if status != SceneStatus::Working {
            let next = SceneId::after(status);
            info!("Scene {:?} finished with {:?}, switching to {:?}", self.scene.id(), status, next);
            self.scene = Scene::new(next);
            self.scene.init(&mut self.ctx)?;
        }

        self.scene.render(&mut self.ctx, time)
    }

    fn halt(&mut self, err: AssetError) {
        error!("Game halted in {:?}: {}", self.scene.id(), err);
        self.halted = Some(err);
    }

    fn draw_error(&mut self) {
        let message = match &self.halted {
            Some(err) => err.to_string(),
            None => return,
        };
        let screen = &mut self.ctx.screen;
        screen.set_camera(None);
        screen.fill(ERROR_BACKGROUND);
        screen.print(50, 50, "Error");
        screen.print(50, 90, &message);
    }

    #[allow(dead_code)]
    pub fn current_scene(&self) -> SceneId {
        self.scene.id()
    }

    #[allow(dead_code)]
    pub fn status(&self) -> SceneStatus {
        self.scene.status()
    }

    #[allow(dead_code)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&AssetError> {
        self.halted.as_ref()
    }

    pub fn screen(&self) -> &Screen {
        &self.ctx.screen
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }
}
