// Character animation sheets

use crate::engine::assets::{AnimationData, AssetError};
use crate::engine::renderer::{Animation, SpriteSheet};
use std::collections::HashMap;

/// Player sheet geometry: 3x2 cells of 128x128, the hero is two tiles tall
pub const PLAYER_SHEET_WIDTH: u32 = 384;
pub const PLAYER_SHEET_HEIGHT: u32 = 256;
pub const PLAYER_CELL_SIZE: u32 = 128;

/// Default time each frame stays on screen (ms)
pub const DEFAULT_FRAME_DURATION: f64 = 100.0;

/// A sprite sheet with named frame sequences
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    sheet: SpriteSheet,
    /// Sequence name -> 1-based cell indexes
    sequences: HashMap<String, Vec<u32>>,
}

impl CharacterSheet {
    /// Build a sheet from sequence data, dropping zero and negative entries
    pub fn new(sheet: SpriteSheet, data: &AnimationData) -> Self {
        let sequences = data
            .layers
            .iter()
            .map(|layer| {
                let frames = layer
                    .data
                    .iter()
                    .filter(|&&index| index > 0)
                    .filter_map(|&index| u32::try_from(index).ok())
                    .collect();
                (layer.name.clone(), frames)
            })
            .collect();

        Self { sheet, sequences }
    }

    /// The player's sheet over the image named `image`
    pub fn player(image: impl Into<String>, data: &AnimationData) -> Self {
        Self::new(
            SpriteSheet::with_cell_size(
                image,
                PLAYER_SHEET_WIDTH,
                PLAYER_SHEET_HEIGHT,
                PLAYER_CELL_SIZE,
                PLAYER_CELL_SIZE,
            ),
            data,
        )
    }

    /// Frame indexes of a named sequence
    pub fn sequence(&self, name: &str) -> Option<&[u32]> {
        self.sequences.get(name).map(Vec::as_slice)
    }

    pub fn has_sequence(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    /// Build the animation for a named sequence
    pub fn animation(
        &self,
        name: &str,
        frame_duration: f64,
        repeat: bool,
        autorun: bool,
    ) -> Result<Animation, AssetError> {
        let indexes = self
            .sequence(name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))?;

        match self
            .sheet
            .animation(indexes, frame_duration, repeat, autorun)
        {
            Err(AssetError::EmptySequence(_)) => Err(AssetError::EmptySequence(name.to_string())),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AnimationLayer;
    use crate::engine::renderer::Drawable;

    fn data() -> AnimationData {
        AnimationData {
            layers: vec![
                AnimationLayer {
                    name: "walk_stop".to_string(),
                    data: vec![1, 0, 0, 0, 0, 0],
                },
                AnimationLayer {
                    name: "walk_right".to_string(),
                    data: vec![0, 2, 3, -4, 0, 5],
                },
                AnimationLayer {
                    name: "blank".to_string(),
                    data: vec![0, 0, -1],
                },
            ],
        }
    }

    #[test]
    fn test_sequences_keep_only_positive_entries() {
        let sheet = CharacterSheet::player("player", &data());
        assert_eq!(sheet.sequence("walk_stop"), Some(&[1][..]));
        assert_eq!(sheet.sequence("walk_right"), Some(&[2, 3, 5][..]));
        assert_eq!(sheet.sequence("blank"), Some(&[][..]));
        assert!(!sheet.has_sequence("walk_up"));
    }

    #[test]
    fn test_animation_by_name() {
        let sheet = CharacterSheet::player("player", &data());
        let anim = sheet
            .animation("walk_right", DEFAULT_FRAME_DURATION, true, true)
            .unwrap();

        assert_eq!(anim.total_frames(), 3);
        assert_eq!(anim.frame_duration(), 100.0);
        // Index 2 on a 3-column sheet of 128px cells
        assert_eq!(anim.sprite().source_x, 128);
        assert_eq!(anim.sprite().source_y, 0);
        assert_eq!(anim.sprite().width, 128);
        assert_eq!(anim.sprite().height, 128);
    }

    #[test]
    fn test_unknown_sequence() {
        let sheet = CharacterSheet::player("player", &data());
        let err = sheet.animation("walk_up", 100.0, true, true).unwrap_err();
        assert!(matches!(err, AssetError::Missing(name) if name == "walk_up"));
    }

    #[test]
    fn test_empty_sequence_names_the_sequence() {
        let sheet = CharacterSheet::player("player", &data());
        let err = sheet.animation("blank", 100.0, true, true).unwrap_err();
        assert!(matches!(err, AssetError::EmptySequence(name) if name == "blank"));
    }
}
