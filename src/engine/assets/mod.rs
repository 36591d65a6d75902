// Asset management system
//
// Loads images and level data on worker threads during the loading phase and
// hands typed results back to the frame loop.

mod data;
mod loader;
mod manager;

pub use data::{AnimationData, MapData, MapLayer, MapObject};
#[allow(unused_imports)]
pub use data::AnimationLayer;
pub use loader::AssetLoader;
pub use manager::{AssetManager, LevelData};

use std::path::PathBuf;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to fetch {}: {reason}", .path.display())]
    Fetch { path: PathBuf, reason: String },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Asset not found: {0}")]
    Missing(String),

    #[error("Assets still loading after {elapsed_ms} ms ({pending} pending)")]
    LoadTimeout { elapsed_ms: u64, pending: usize },

    #[error("Sprite index {index} is outside the sheet (capacity {capacity})")]
    FrameOutOfRange { index: u32, capacity: u32 },

    #[error("Animation sequence {0} has no frames")]
    EmptySequence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
