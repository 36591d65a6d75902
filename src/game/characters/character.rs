// Moving, animated body

use super::animation::CharacterSheet;
use super::state::{Heading, Velocity};
use crate::engine::assets::AssetError;
use crate::engine::renderer::Animation;
use glam::Vec2;
use log::debug;
use std::collections::HashMap;

/// A body that walks around the world with one animation per heading
///
/// Position is kept fractional; the view gets truncated pixel coordinates.
#[derive(Debug)]
pub struct Body {
    /// Position in world space
    pub position: Vec2,
    /// Walking speed in pixels per second
    speed: f32,
    velocity: Velocity,
    /// Animation currently shown, and the heading it belongs to
    view: Animation,
    view_heading: Heading,
    /// Animations for the other headings
    shelved: HashMap<Heading, Animation>,
    /// Time of the previous update; `None` until the first tick
    last_time: Option<f64>,
}

impl Body {
    /// Create a body standing still, with animations for every heading the
    /// sheet has a sequence for
    pub fn new(sheet: &CharacterSheet, speed: f32, frame_duration: f64) -> Result<Self, AssetError> {
        let mut shelved = HashMap::new();
        for heading in Heading::ALL {
            let name = heading.animation_name();
            if sheet.has_sequence(name) {
                shelved.insert(heading, sheet.animation(name, frame_duration, true, true)?);
            }
        }

        let view = shelved
            .remove(&Heading::Stop)
            .ok_or_else(|| AssetError::Missing(Heading::Stop.animation_name().to_string()))?;

        let mut body = Self {
            position: Vec2::ZERO,
            speed,
            velocity: Velocity::default(),
            view,
            view_heading: Heading::Stop,
            shelved,
            last_time: None,
        };
        body.stand(Heading::Stop);
        Ok(body)
    }

    /// Start walking; the animation keeps its place if it is already playing
    pub fn walk(&mut self, heading: Heading) {
        self.velocity = Velocity::new(heading, self.speed);
        self.show(heading);
        self.view.run();
    }

    /// Stop moving and freeze the heading's animation on its current frame
    pub fn stand(&mut self, heading: Heading) {
        self.velocity = Velocity::new(heading, 0.0);
        self.show(heading);
        self.view.stop();
    }

    fn show(&mut self, heading: Heading) {
        if heading == self.view_heading {
            return;
        }
        match self.shelved.remove(&heading) {
            Some(next) => {
                let previous = std::mem::replace(&mut self.view, next);
                self.shelved.insert(self.view_heading, previous);
                self.view_heading = heading;
            }
            None => debug!(
                "No {} animation, keeping {:?}",
                heading.animation_name(),
                self.view_heading
            ),
        }
    }

    /// Integrate the position up to `time` (ms) and advance the animation
    pub fn update(&mut self, time: f64) {
        // First tick only sets the baseline
        if let Some(last_time) = self.last_time {
            let dt = (time - last_time) as f32;
            self.position += self.velocity.components * (dt / 1000.0);
        }
        self.last_time = Some(time);

        self.sync_view();
        self.view.update(time);
    }

    fn sync_view(&mut self) {
        let (x, y) = (self.position.x.trunc() as i32, self.position.y.trunc() as i32);
        self.view.set_xy(x, y);
    }

    /// The animation currently shown
    pub fn view(&self) -> &Animation {
        &self.view
    }

    pub fn view_heading(&self) -> Heading {
        self.view_heading
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::assets::{AnimationData, AnimationLayer};
    use crate::engine::renderer::Drawable;
    use approx::assert_relative_eq;

    /// The shipped sequence set: stop, right and left only
    pub(crate) fn player_data() -> AnimationData {
        let layer = |name: &str, data: Vec<i64>| AnimationLayer {
            name: name.to_string(),
            data,
        };
        AnimationData {
            layers: vec![
                layer("walk_stop", vec![1, 2, 0, 0, 0, 0]),
                layer("walk_right", vec![0, 0, 3, 4, 0, 0]),
                layer("walk_left", vec![0, 0, 0, 0, 5, 6]),
            ],
        }
    }

    fn body() -> Body {
        let sheet = CharacterSheet::player("player", &player_data());
        Body::new(&sheet, 300.0, 100.0).unwrap()
    }

    #[test]
    fn test_starts_standing() {
        let body = body();
        assert_eq!(body.view_heading(), Heading::Stop);
        assert_eq!(body.velocity(), Velocity::new(Heading::Stop, 0.0));
        assert!(!body.view().is_running());
    }

    #[test]
    fn test_requires_stop_sequence() {
        let data = AnimationData {
            layers: vec![AnimationLayer {
                name: "walk_left".to_string(),
                data: vec![1],
            }],
        };
        let sheet = CharacterSheet::player("player", &data);
        let err = Body::new(&sheet, 300.0, 100.0).unwrap_err();
        assert!(matches!(err, AssetError::Missing(name) if name == "walk_stop"));
    }

    #[test]
    fn test_baseline_tick_does_not_move() {
        let mut body = body();
        body.position = Vec2::new(200.0, 450.0);
        body.walk(Heading::Right);

        body.update(5_000.0);
        assert_eq!(body.position, Vec2::new(200.0, 450.0));
        assert_eq!(body.view().sprite().x, 200);

        body.update(5_016.0);
        // 300 px/s over 16 ms
        assert_relative_eq!(body.position.x, 204.8, epsilon = 1e-3);
        assert_eq!(body.position.y, 450.0);
    }

    #[test]
    fn test_position_accumulates_fractions() {
        let mut body = body();
        body.walk(Heading::Left);
        body.position = Vec2::new(100.0, 0.0);

        let mut t = 0.0;
        body.update(t);
        for _ in 0..3 {
            t += 1.0;
            body.update(t);
        }
        // 0.3 px per tick: truncating every tick would never move
        assert_relative_eq!(body.position.x, 99.1, epsilon = 1e-3);
        assert_eq!(body.view().sprite().x, 99);
    }

    #[test]
    fn test_walk_switches_and_runs_view() {
        let mut body = body();
        body.walk(Heading::Right);
        assert_eq!(body.view_heading(), Heading::Right);
        assert!(body.view().is_running());
        assert_eq!(body.velocity().components.x, 300.0);
    }

    #[test]
    fn test_walk_keeps_animation_continuity() {
        let mut body = body();
        body.walk(Heading::Right);
        body.update(0.0);
        body.update(150.0);
        assert_eq!(body.view().current_frame(), 1);

        body.walk(Heading::Right);
        assert_eq!(body.view().current_frame(), 1);
    }

    #[test]
    fn test_stand_freezes_frame() {
        let mut body = body();
        body.walk(Heading::Left);
        body.update(0.0);
        body.update(150.0);
        body.stand(Heading::Left);

        assert_eq!(body.velocity().components, Vec2::ZERO);
        assert_eq!(body.view_heading(), Heading::Left);
        assert!(!body.view().is_running());
        assert_eq!(body.view().current_frame(), 1);

        let before = body.position;
        body.update(1_000.0);
        assert_eq!(body.position, before);
    }

    #[test]
    fn test_heading_without_animation_keeps_view() {
        let mut body = body();
        body.walk(Heading::Right);
        assert!(player_data().layers.iter().all(|l| l.name != "walk_up"));

        body.walk(Heading::Up);
        assert_eq!(body.view_heading(), Heading::Right);
        assert_eq!(body.velocity().components.y, -300.0);
    }
}
