// Central asset management system

use super::{AnimationData, AssetError, AssetLoader, MapData};
use crossbeam_channel::{Receiver, Sender};
use image::RgbaImage;
use log::{debug, info};
use std::collections::HashMap;
use std::thread;

/// Map and character data needed to enter the level
#[derive(Debug, Clone)]
pub struct LevelData {
    pub map: MapData,
    pub animations: AnimationData,
}

/// Result of one background job
enum Loaded {
    Image { name: String, image: RgbaImage },
    Level(LevelData),
}

/// Central asset manager for the game
///
/// Every asset is fetched on its own worker thread. The frame loop calls
/// [`AssetManager::poll`] once per tick and never blocks on a load.
pub struct AssetManager {
    /// Asset loader shared with the workers
    loader: AssetLoader,

    sender: Sender<Result<Loaded, AssetError>>,
    receiver: Receiver<Result<Loaded, AssetError>>,

    /// Jobs issued but not yet reported back
    pending: usize,

    /// Decoded images waiting to be handed to the screen
    images: HashMap<String, RgbaImage>,

    /// Parsed level data
    level: Option<LevelData>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new(loader: AssetLoader) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            loader,
            sender,
            receiver,
            pending: 0,
            images: HashMap::new(),
            level: None,
        }
    }

    /// Create a manager whose assets are already in memory
    #[allow(dead_code)]
    pub fn preloaded(
        loader: AssetLoader,
        images: HashMap<String, RgbaImage>,
        level: Option<LevelData>,
    ) -> Self {
        let mut manager = Self::new(loader);
        manager.images = images;
        manager.level = level;
        manager
    }

    /// Start loading a set of named images
    pub fn load_images<'a, I>(&mut self, files: I) -> Result<(), AssetError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, path) in files {
            let loader = self.loader.clone();
            let sender = self.sender.clone();
            let name = name.clone();
            let path = path.clone();

            thread::Builder::new()
                .name(format!("load-{}", name))
                .spawn(move || {
                    let result = loader
                        .load_image(&path)
                        .map(|image| Loaded::Image { name, image });
                    // Receiver gone means the game already shut down
                    let _ = sender.send(result);
                })?;

            self.pending += 1;
        }

        Ok(())
    }

    /// Start loading the map and animation documents
    pub fn load_level(&mut self, map_path: &str, animations_path: &str) -> Result<(), AssetError> {
        let loader = self.loader.clone();
        let sender = self.sender.clone();
        let map_path = map_path.to_string();
        let animations_path = animations_path.to_string();

        thread::Builder::new()
            .name("load-level".to_string())
            .spawn(move || {
                let result = loader.load_json::<MapData>(&map_path).and_then(|map| {
                    let animations = loader.load_json::<AnimationData>(&animations_path)?;
                    Ok(Loaded::Level(LevelData { map, animations }))
                });
                let _ = sender.send(result);
            })?;

        self.pending += 1;
        Ok(())
    }

    /// Collect finished jobs, returning whether everything has arrived
    pub fn poll(&mut self) -> Result<bool, AssetError> {
        while let Ok(result) = self.receiver.try_recv() {
            self.pending = self.pending.saturating_sub(1);

            match result? {
                Loaded::Image { name, image } => {
                    debug!(
                        "Image '{}' loaded ({}x{})",
                        name,
                        image.width(),
                        image.height()
                    );
                    self.images.insert(name, image);
                }
                Loaded::Level(level) => {
                    debug!(
                        "Level data loaded: {}x{} tiles, {} sequences",
                        level.map.width,
                        level.map.height,
                        level.animations.layers.len()
                    );
                    self.level = Some(level);
                }
            }

            if self.pending == 0 {
                info!("All assets loaded");
            }
        }

        Ok(self.is_ready())
    }

    /// Whether no job is outstanding
    pub fn is_ready(&self) -> bool {
        self.pending == 0
    }

    /// Number of jobs still in flight
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Hand over every image decoded so far
    pub fn take_images(&mut self) -> HashMap<String, RgbaImage> {
        std::mem::take(&mut self.images)
    }

    /// Level data, once loaded
    pub fn level_data(&self) -> Result<&LevelData, AssetError> {
        self.level
            .as_ref()
            .ok_or_else(|| AssetError::Missing("level data".to_string()))
    }
}
