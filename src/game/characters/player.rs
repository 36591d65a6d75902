// The player character and its control mapping

use super::animation::CharacterSheet;
use super::character::Body;
use super::state::Heading;
use crate::engine::assets::AssetError;
use crate::engine::input::Controls;
use glam::Vec2;

/// Walking speed in pixels per second
pub const PLAYER_SPEED: f32 = 300.0;
/// Where the player appears when a level starts
pub const PLAYER_SPAWN: Vec2 = Vec2::new(200.0, 450.0);

/// What the player wants to do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Walk(Heading),
    Stand(Heading),
}

impl Intent {
    /// Resolve held controls with priority up > down > left > right
    ///
    /// Down plays the idle cycle in place; with nothing held the body stands
    /// facing `current`.
    pub fn resolve(controls: &Controls, current: Heading) -> Self {
        if controls.up {
            Self::Walk(Heading::Up)
        } else if controls.down {
            Self::Walk(Heading::Stop)
        } else if controls.left {
            Self::Walk(Heading::Left)
        } else if controls.right {
            Self::Walk(Heading::Right)
        } else {
            Self::Stand(current)
        }
    }
}

#[derive(Debug)]
pub struct Player {
    pub body: Body,
}

impl Player {
    pub fn new(sheet: &CharacterSheet, speed: f32, frame_duration: f64, spawn: Vec2) -> Result<Self, AssetError> {
        let mut body = Body::new(sheet, speed, frame_duration)?;
        body.position = spawn;
        Ok(Self { body })
    }

    /// Apply the controls, then move and animate up to `time` (ms)
    pub fn update(&mut self, controls: &Controls, time: f64) {
        match Intent::resolve(controls, self.body.velocity().heading) {
            Intent::Walk(heading) => self.body.walk(heading),
            Intent::Stand(heading) => self.body.stand(heading),
        }
        self.body.update(time);
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }
}
