// Asset loading functionality

use super::AssetError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Read a text asset, the equivalent of a blocking GET
    pub fn fetch_text(&self, name: &str) -> Result<String, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::Fetch {
                path,
                reason: "not found".to_string(),
            });
        }

        std::fs::read_to_string(&path).map_err(|e| AssetError::Fetch {
            reason: e.to_string(),
            path,
        })
    }

    /// Fetch a JSON document and deserialize it
    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, AssetError> {
        let text = self.fetch_text(name)?;
        serde_json::from_str(&text).map_err(|source| AssetError::Parse {
            path: self.resolve_path(name),
            source,
        })
    }

    /// Read and decode an image into an RGBA raster
    pub fn load_image(&self, name: &str) -> Result<image::RgbaImage, AssetError> {
        let path = self.resolve_path(name);

        let bytes = std::fs::read(&path).map_err(|e| AssetError::Fetch {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let img = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode { path, source })?;
        Ok(img.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AnimationData;

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("img/player.png");

        assert_eq!(path.to_str().unwrap(), "/game/assets/img/player.png");
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());

        let err = loader.fetch_text("maps/map.json").unwrap_err();
        assert!(matches!(err, AssetError::Fetch { ref path, .. } if path.ends_with("maps/map.json")));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("animations.json"),
            r#"{"layers": [{"name": "walk_stop", "data": [1, 2]}]}"#,
        )
        .unwrap();

        let loader = AssetLoader::new(dir.path());
        let data: AnimationData = loader.load_json("animations.json").unwrap();
        assert_eq!(data.layers[0].name, "walk_stop");
    }

    #[test]
    fn test_load_json_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let loader = AssetLoader::new(dir.path());
        let err = loader.load_json::<AnimationData>("broken.json").unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }

    #[test]
    fn test_load_image_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
        img.save(dir.path().join("tiny.png")).unwrap();

        let loader = AssetLoader::new(dir.path());
        let loaded = loader.load_image("tiny.png").unwrap();
        assert_eq!(loaded.dimensions(), (4, 2));
        assert_eq!(loaded.get_pixel(3, 1), &image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_load_image_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.png"), b"definitely not a png").unwrap();

        let loader = AssetLoader::new(dir.path());
        let err = loader.load_image("bad.png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
