// Title screen

use super::SceneStatus;
use crate::engine::renderer::Screen;
use crate::game::GameContext;

#[derive(Debug, Default)]
pub struct MenuScene;

impl MenuScene {
    pub fn init(&mut self, ctx: &mut GameContext) {
        // The title is drawn in screen space
        ctx.screen.set_camera(None);
    }

    pub fn update(&mut self, ctx: &GameContext) -> SceneStatus {
        if ctx.input.controls().hit {
            SceneStatus::GameStart
        } else {
            SceneStatus::Working
        }
    }

    pub fn draw(&self, screen: &mut Screen) {
        screen.draw_image(0, 0, "title");
        screen.print(250, 500, "Press space");
    }
}
