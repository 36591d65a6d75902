// Game configuration with built-in defaults

use crate::engine::assets::AssetError;
use crate::game::characters::{DEFAULT_FRAME_DURATION, PLAYER_SPAWN, PLAYER_SPEED};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Everything tunable about the game
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    /// Framebuffer size in pixels
    pub screen_width: u32,
    pub screen_height: u32,

    /// Directory every asset path is relative to
    pub asset_root: String,
    /// Image name -> file
    pub images: BTreeMap<String, String>,
    pub map_path: String,
    pub animations_path: String,

    /// Pixels per second
    pub player_speed: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Distance from the viewport edge at which the camera starts scrolling
    pub scroll_edge: f32,
    /// Milliseconds each animation frame stays on screen
    pub frame_duration: f64,

    /// How long the loading screen stays up after the last asset arrives (ms)
    pub load_grace_ms: f64,
    /// Give up loading after this long (ms); waits forever when unset
    pub load_timeout_ms: Option<f64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let images = [
            ("player", "img/player.png"),
            ("title", "img/title_test.jpg"),
            ("tiles", "img/map_tiles.png"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        Self {
            title: "Tile Walker".to_string(),
            screen_width: 1280,
            screen_height: 720,
            asset_root: "assets".to_string(),
            images,
            map_path: "maps/map.json".to_string(),
            animations_path: "maps/animations.json".to_string(),
            player_speed: PLAYER_SPEED,
            spawn_x: PLAYER_SPAWN.x,
            spawn_y: PLAYER_SPAWN.y,
            scroll_edge: 200.0,
            frame_duration: DEFAULT_FRAME_DURATION,
            load_grace_ms: 500.0,
            load_timeout_ms: None,
        }
    }
}

impl GameConfig {
    /// Read the config at `path`, falling back to defaults when it is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text).map_err(|source| AssetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
