// The playable level: one map, one player, a following camera

use super::SceneStatus;
use crate::engine::assets::AssetError;
use crate::engine::renderer::{Camera, Screen, SpriteSheet, TileMap};
use crate::game::characters::{CharacterSheet, Player};
use crate::game::GameContext;
use glam::Vec2;
use image::Rgba;
use log::info;

/// Tileset image geometry, 10x10 cells of 64px
pub const TILESET_SIZE: u32 = 640;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0xff]);

/// Everything built when the level starts
#[derive(Debug)]
pub struct LevelSession {
    pub player: Player,
    pub map: TileMap,
    pub camera: Camera,
}

#[derive(Debug, Default)]
pub struct LevelScene {
    session: Option<LevelSession>,
}

impl LevelScene {
    /// Build a fresh session from the loaded level data
    pub fn init(&mut self, ctx: &mut GameContext) -> Result<(), AssetError> {
        let config = &ctx.config;
        let level = ctx.assets.level_data()?;

        let tiles = SpriteSheet::new("tiles", TILESET_SIZE, TILESET_SIZE);
        let sheet = CharacterSheet::player("player", &level.animations);
        let player = Player::new(
            &sheet,
            config.player_speed,
            config.frame_duration,
            Vec2::new(config.spawn_x, config.spawn_y),
        )?;

        let map = ctx.screen.create_map("map", &level.map, &tiles)?;
        let camera = Camera::for_world(
            Vec2::new(ctx.screen.width() as f32, ctx.screen.height() as f32),
            Vec2::new(map.width() as f32, map.height() as f32),
            config.scroll_edge,
        );
        ctx.screen.set_camera(Some(camera));

        info!(
            "Level ready: {}x{} map, {} hitboxes",
            map.width(),
            map.height(),
            map.hitboxes().len()
        );
        self.session = Some(LevelSession {
            player,
            map,
            camera,
        });
        Ok(())
    }

    pub fn update(&mut self, ctx: &mut GameContext, time: f64) -> Result<SceneStatus, AssetError> {
        let session = self.session_mut()?;

        session.player.update(&ctx.input.controls(), time);
        session.camera.update(session.player.position(), time);
        ctx.screen.set_camera(Some(session.camera));

        Ok(SceneStatus::Working)
    }

    pub fn draw(&self, screen: &mut Screen) {
        screen.fill(BACKGROUND);
        if let Some(session) = &self.session {
            screen.draw_sprite(&session.map);
            screen.draw_sprite(session.player.body.view());
        }
    }

    #[allow(dead_code)]
    pub fn session(&self) -> Option<&LevelSession> {
        self.session.as_ref()
    }

    fn session_mut(&mut self) -> Result<&mut LevelSession, AssetError> {
        self.session
            .as_mut()
            .ok_or_else(|| AssetError::Missing("level session".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scenes::{Scene, SceneId, SceneKind};
    use crate::game::tests::{config, images, level};
    use winit::keyboard::KeyCode;

    fn context() -> GameContext {
        let mut ctx = GameContext::preloaded(config(), images(), Some(level()));
        let images = ctx.assets.take_images();
        ctx.screen.insert_images(images);
        ctx
    }

    fn session(scene: &Scene) -> &LevelSession {
        match scene.kind() {
            SceneKind::GameLevel(level) => level.session().unwrap(),
            other => panic!("expected the level scene, got {:?}", other),
        }
    }

    #[test]
    fn test_init_builds_session_and_attaches_camera() {
        let mut ctx = context();
        let mut scene = Scene::new(SceneId::GameLevel);
        scene.init(&mut ctx).unwrap();

        let session = session(&scene);
        assert_eq!(session.player.position(), Vec2::new(200.0, 450.0));
        // 640x320 world under a 320x240 viewport
        assert_eq!(session.camera.limit_x, 320.0);
        assert_eq!(session.camera.limit_y, 80.0);
        assert_eq!(ctx.screen.camera(), Some(&session.camera));
    }

    #[test]
    fn test_update_before_init_is_an_error() {
        let mut ctx = context();
        let mut scene = LevelScene::default();
        let err = scene.update(&mut ctx, 0.0).unwrap_err();
        assert!(matches!(err, AssetError::Missing(_)));
    }

    #[test]
    fn test_reinit_rebuilds_session() {
        let mut ctx = context();
        let mut scene = Scene::new(SceneId::GameLevel);
        scene.init(&mut ctx).unwrap();

        ctx.input.queue_key(KeyCode::ArrowRight, true);
        ctx.input.begin_frame();
        scene.update(&mut ctx, 0.0).unwrap();
        scene.update(&mut ctx, 1_000.0).unwrap();

        let walked = session(&scene);
        assert_eq!(walked.player.position(), Vec2::new(500.0, 450.0));
        // scroll edge 100: 500 - 320 + 100 and 450 - 240 + 100 clamped to 80
        assert_eq!(walked.camera.position(), Vec2::new(280.0, 80.0));
        let scrolled = *ctx.screen.camera().unwrap();
        assert_eq!(scrolled, walked.camera);

        ctx.input.queue_key(KeyCode::ArrowRight, false);
        ctx.input.begin_frame();
        scene.init(&mut ctx).unwrap();

        let fresh = session(&scene);
        assert_eq!(fresh.player.position(), Vec2::new(200.0, 450.0));
        assert_eq!(fresh.camera.position(), Vec2::ZERO);
        assert_eq!(ctx.screen.camera(), Some(&fresh.camera));
        assert_ne!(ctx.screen.camera(), Some(&scrolled));
        assert_eq!(scene.status(), SceneStatus::Working);
    }
}
