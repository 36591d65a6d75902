// Pre-composited tile map

use super::sprite::{Drawable, FramePosition, Sprite};
use crate::engine::assets::MapObject;

/// Axis-aligned rectangle from a map object layer
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x1: f32,
    pub x2: f32,
    pub y1: f32,
    pub y2: f32,
}

impl From<&MapObject> for Hitbox {
    fn from(obj: &MapObject) -> Self {
        Self {
            x1: obj.x,
            x2: obj.x + obj.width,
            y1: obj.y,
            y2: obj.y + obj.height,
        }
    }
}

/// The whole level baked into a single raster
///
/// Hitboxes are kept for collision work; nothing reads them yet.
#[derive(Debug, Clone)]
pub struct TileMap {
    sprite: Sprite,
    hitboxes: Vec<Hitbox>,
}

impl TileMap {
    pub fn new(image: impl Into<String>, width: u32, height: u32, hitboxes: Vec<Hitbox>) -> Self {
        Self {
            sprite: Sprite::new(image, FramePosition::ORIGIN, width, height),
            hitboxes,
        }
    }

    pub fn width(&self) -> u32 {
        self.sprite.width
    }

    pub fn height(&self) -> u32 {
        self.sprite.height
    }

    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }
}

impl Drawable for TileMap {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
