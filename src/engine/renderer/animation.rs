// Frame animation over a sprite sheet

use super::sprite::{Drawable, FramePosition, Sprite, SpriteSheet};
use crate::engine::assets::AssetError;

/// A timed sequence of sheet cells with playback state
///
/// Timestamps are milliseconds from the frame clock. Playback never catches
/// up: a long gap between updates advances a single frame.
#[derive(Debug, Clone)]
pub struct Animation {
    sprite: Sprite,
    /// Cell positions, never empty
    frames: Vec<FramePosition>,
    /// Minimum time a frame stays on screen (ms)
    frame_duration: f64,
    repeat: bool,
    running: bool,
    current_frame: usize,
    /// Time of the last frame change; `None` until the first tick after a start
    last_time: Option<f64>,
}

impl Animation {
    /// Create an animation from resolved cell positions
    pub fn new(
        image: impl Into<String>,
        frames: Vec<FramePosition>,
        width: u32,
        height: u32,
        frame_duration: f64,
        repeat: bool,
        autorun: bool,
    ) -> Result<Self, AssetError> {
        let image = image.into();
        let Some(&first) = frames.first() else {
            return Err(AssetError::EmptySequence(image));
        };

        Ok(Self {
            sprite: Sprite::new(image, first, width, height),
            frames,
            frame_duration,
            repeat,
            running: autorun,
            current_frame: 0,
            last_time: None,
        })
    }

    /// Show a specific frame
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Animation::total_frames`].
    pub fn set_frame(&mut self, index: usize) {
        self.current_frame = index;
        self.sprite.set_source(self.frames[index]);
    }

    /// Start from the first frame; does nothing while already running
    pub fn run(&mut self) {
        if !self.running {
            self.set_frame(0);
            self.last_time = None;
            self.running = true;
        }
    }

    /// Pause on the current frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    fn next_frame(&mut self) {
        if self.current_frame + 1 == self.frames.len() {
            if self.repeat {
                self.set_frame(0);
            } else {
                self.stop();
            }
            return;
        }
        self.set_frame(self.current_frame + 1);
    }

    /// Advance playback to `time` (ms)
    pub fn update(&mut self, time: f64) {
        if !self.running {
            return;
        }

        let Some(last_time) = self.last_time else {
            self.last_time = Some(time);
            return;
        };

        if time - last_time > self.frame_duration {
            self.next_frame();
            self.last_time = Some(time);
        }
    }

    pub fn set_xy(&mut self, x: i32, y: i32) {
        self.sprite.set_xy(x, y);
    }

    #[allow(dead_code)]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    #[allow(dead_code)]
    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[allow(dead_code)]
    pub fn frame_duration(&self) -> f64 {
        self.frame_duration
    }
}

impl Drawable for Animation {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl SpriteSheet {
    /// Build an animation from 1-based cell indexes, resolved eagerly
    pub fn animation(
        &self,
        indexes: &[u32],
        frame_duration: f64,
        repeat: bool,
        autorun: bool,
    ) -> Result<Animation, AssetError> {
        let frames = indexes
            .iter()
            .map(|&index| self.frame(index))
            .collect::<Result<Vec<_>, _>>()?;

        Animation::new(
            self.image.clone(),
            frames,
            self.sprite_width,
            self.sprite_height,
            frame_duration,
            repeat,
            autorun,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SpriteSheet {
        SpriteSheet::new("tiles", 640, 640)
    }

    fn abc(repeat: bool) -> Animation {
        sheet().animation(&[1, 2, 3], 100.0, repeat, true).unwrap()
    }

    #[test]
    fn test_frames_resolved_at_construction() {
        let anim = sheet().animation(&[11, 2], 100.0, true, true).unwrap();
        assert_eq!(anim.total_frames(), 2);
        assert_eq!(anim.sprite().source_x, 0);
        assert_eq!(anim.sprite().source_y, 64);
        assert_eq!(anim.sprite().width, 64);
    }

    #[test]
    fn test_invalid_index_fails_construction() {
        let err = sheet().animation(&[1, 0], 100.0, true, true).unwrap_err();
        assert!(matches!(err, AssetError::FrameOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = sheet().animation(&[], 100.0, true, true).unwrap_err();
        assert!(matches!(err, AssetError::EmptySequence(_)));
    }

    #[test]
    fn test_one_frame_per_update_at_most() {
        let mut anim = abc(true);

        anim.update(0.0); // baseline
        assert_eq!(anim.current_frame(), 0);

        anim.update(50.0);
        assert_eq!(anim.current_frame(), 0);

        anim.update(160.0);
        assert_eq!(anim.current_frame(), 1);
        assert_eq!(anim.sprite().source_x, 64);

        // Huge gap still moves a single frame
        anim.update(10_000.0);
        assert_eq!(anim.current_frame(), 2);

        anim.update(10_050.0);
        assert_eq!(anim.current_frame(), 2);

        anim.update(10_101.0);
        assert_eq!(anim.current_frame(), 0);
        assert!(anim.is_running());
    }

    #[test]
    fn test_exact_duration_does_not_advance() {
        let mut anim = abc(true);
        anim.update(0.0);
        anim.update(100.0);
        assert_eq!(anim.current_frame(), 0);
        anim.update(100.5);
        assert_eq!(anim.current_frame(), 1);
    }

    #[test]
    fn test_one_shot_freezes_on_last_frame() {
        let mut anim = abc(false);
        anim.update(0.0);
        anim.update(200.0);
        anim.update(400.0);
        assert_eq!(anim.current_frame(), 2);
        assert!(anim.is_running());

        anim.update(600.0);
        assert_eq!(anim.current_frame(), 2);
        assert!(!anim.is_running());

        anim.update(5_000.0);
        anim.update(9_000.0);
        assert_eq!(anim.current_frame(), 2);
        assert_eq!(anim.sprite().source_x, 128);
    }

    #[test]
    fn test_stop_keeps_frame() {
        let mut anim = abc(true);
        anim.update(0.0);
        anim.update(150.0);
        anim.stop();
        anim.update(400.0);
        assert_eq!(anim.current_frame(), 1);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_run_restarts_only_when_stopped() {
        let mut anim = abc(true);
        anim.update(0.0);
        anim.update(150.0);

        // Already running: keeps its place
        anim.run();
        assert_eq!(anim.current_frame(), 1);

        anim.stop();
        anim.run();
        assert_eq!(anim.current_frame(), 0);
        assert!(anim.is_running());

        // First tick after the restart is a new baseline
        anim.update(1_000.0);
        assert_eq!(anim.current_frame(), 0);
        anim.update(1_101.0);
        assert_eq!(anim.current_frame(), 1);
    }

    #[test]
    fn test_autorun_off_waits_for_run() {
        let mut anim = sheet().animation(&[1, 2], 100.0, true, false).unwrap();
        anim.update(0.0);
        anim.update(500.0);
        assert_eq!(anim.current_frame(), 0);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_set_frame_moves_source() {
        let mut anim = abc(true);
        anim.set_frame(2);
        assert_eq!(anim.current_frame(), 2);
        assert_eq!(anim.sprite().source_x, 128);
    }

    #[test]
    #[should_panic]
    fn test_set_frame_past_end_panics() {
        let mut anim = abc(true);
        anim.set_frame(anim.total_frames());
    }
}
