// Scene state machine
//
// - `loading`: waits for the asset jobs, then hands the images to the screen
// - `menu`: title screen, waits for the hit key
// - `level`: the map, the player and the camera

pub mod level;
pub mod loading;
pub mod menu;

pub use level::LevelScene;
#[allow(unused_imports)]
pub use level::LevelSession;
pub use loading::LoadingScene;
pub use menu::MenuScene;

use super::GameContext;
use crate::engine::assets::AssetError;

/// What a scene reports back to the game after a tick
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneStatus {
    /// Still running
    #[default]
    Working,
    Loaded,
    GameStart,
    GameOver,
    GameWin,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Loading,
    Menu,
    GameLevel,
}

impl SceneId {
    /// Scene that follows a finished status
    pub fn after(status: SceneStatus) -> SceneId {
        match status {
            SceneStatus::Loaded => SceneId::Menu,
            SceneStatus::GameStart => SceneId::GameLevel,
            _ => SceneId::Menu,
        }
    }
}

#[derive(Debug)]
pub enum SceneKind {
    Loading(LoadingScene),
    Menu(MenuScene),
    GameLevel(LevelScene),
}

/// A scene plus its status
#[derive(Debug)]
pub struct Scene {
    status: SceneStatus,
    kind: SceneKind,
}

impl Scene {
    pub fn new(id: SceneId) -> Self {
        let kind = match id {
            SceneId::Loading => SceneKind::Loading(LoadingScene::default()),
            SceneId::Menu => SceneKind::Menu(MenuScene),
            SceneId::GameLevel => SceneKind::GameLevel(LevelScene::default()),
        };
        Self {
            status: SceneStatus::Working,
            kind,
        }
    }

    pub fn id(&self) -> SceneId {
        match self.kind {
            SceneKind::Loading(_) => SceneId::Loading,
            SceneKind::Menu(_) => SceneId::Menu,
            SceneKind::GameLevel(_) => SceneId::GameLevel,
        }
    }

    pub fn status(&self) -> SceneStatus {
        self.status
    }

    #[allow(dead_code)]
    pub fn kind(&self) -> &SceneKind {
        &self.kind
    }

    /// Reset to working and do the per-activation setup
    pub fn init(&mut self, ctx: &mut GameContext) -> Result<(), AssetError> {
        self.status = SceneStatus::Working;
        match &mut self.kind {
            SceneKind::Loading(scene) => scene.init(),
            SceneKind::Menu(scene) => scene.init(ctx),
            SceneKind::GameLevel(scene) => scene.init(ctx)?,
        }
        Ok(())
    }

    pub fn update(&mut self, ctx: &mut GameContext, time: f64) -> Result<(), AssetError> {
        self.status = match &mut self.kind {
            SceneKind::Loading(scene) => scene.update(ctx, time)?,
            SceneKind::Menu(scene) => scene.update(ctx),
            SceneKind::GameLevel(scene) => scene.update(ctx, time)?,
        };
        Ok(())
    }

    /// Update, then draw into the context's screen
    pub fn render(&mut self, ctx: &mut GameContext, time: f64) -> Result<(), AssetError> {
        self.update(ctx, time)?;
        let screen = &mut ctx.screen;
        match &self.kind {
            SceneKind::Loading(scene) => scene.draw(screen),
            SceneKind::Menu(scene) => scene.draw(screen),
            SceneKind::GameLevel(scene) => scene.draw(screen),
        }
        Ok(())
    }
}
