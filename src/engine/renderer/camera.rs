// Camera and viewport system for 2D rendering

use crate::core::clamp;
use glam::Vec2;

/// Scrolling camera that follows a point across the world
///
/// The camera origin is the world coordinate shown at the top-left corner of
/// the screen. It moves only when the followed point comes within
/// `scroll_edge` pixels of a viewport edge, and never leaves `[0, limit]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera origin in world space
    pub x: f32,
    pub y: f32,
    /// Viewport size
    pub width: f32,
    pub height: f32,
    /// Largest origin allowed on each axis
    pub limit_x: f32,
    pub limit_y: f32,
    /// Distance from a viewport edge that triggers scrolling
    pub scroll_edge: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1280.0, 1024.0, 50_000.0, 50_000.0, 200.0)
    }
}

impl Camera {
    /// Create a new camera at the world origin
    pub fn new(width: f32, height: f32, limit_x: f32, limit_y: f32, scroll_edge: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            limit_x: limit_x.max(0.0),
            limit_y: limit_y.max(0.0),
            scroll_edge,
        }
    }

    /// Camera for a viewport over a world of the given size
    pub fn for_world(viewport: Vec2, world: Vec2, scroll_edge: f32) -> Self {
        Self::new(
            viewport.x,
            viewport.y,
            world.x - viewport.x,
            world.y - viewport.y,
            scroll_edge,
        )
    }

    /// Scroll toward the followed point
    ///
    /// `_time` is unused; the camera depends only on the followed position.
    pub fn update(&mut self, followed: Vec2, _time: f64) {
        if followed.x > self.x + self.width - self.scroll_edge {
            self.x = clamp(followed.x - self.width + self.scroll_edge, 0.0, self.limit_x);
        }

        if followed.x < self.x + self.scroll_edge {
            self.x = clamp(followed.x - self.scroll_edge, 0.0, self.limit_x);
        }

        if followed.y > self.y + self.height - self.scroll_edge {
            self.y = clamp(followed.y - self.height + self.scroll_edge, 0.0, self.limit_y);
        }

        if followed.y < self.y + self.scroll_edge {
            self.y = clamp(followed.y - self.scroll_edge, 0.0, self.limit_y);
        }
    }

    /// Integer origin subtracted from world positions when drawing
    pub fn offset(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    #[allow(dead_code)]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
