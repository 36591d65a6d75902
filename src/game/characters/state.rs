// Movement heading and velocity

use glam::Vec2;

/// Direction a body faces or walks in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    /// Standing in place
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 5] = [
        Heading::Stop,
        Heading::Up,
        Heading::Down,
        Heading::Left,
        Heading::Right,
    ];

    /// Name of the sequence animating this heading
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Stop => "walk_stop",
            Self::Up => "walk_up",
            Self::Down => "walk_down",
            Self::Left => "walk_left",
            Self::Right => "walk_right",
        }
    }

    /// Unit step in screen coordinates (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Self::Stop => Vec2::ZERO,
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// A heading with per-axis components derived from it and a speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub heading: Heading,
    /// Per-axis pixels per second
    pub components: Vec2,
}

impl Velocity {
    /// `speed` in pixels per second
    pub fn new(heading: Heading, speed: f32) -> Self {
        Self {
            heading,
            components: heading.unit() * speed,
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::new(Heading::Stop, 0.0)
    }
}
