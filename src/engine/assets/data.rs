// Level data formats read from JSON

use serde::Deserialize;

/// Tile map exported from the map editor
#[derive(Debug, Clone, Deserialize)]
pub struct MapData {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Tile width in pixels
    pub tilewidth: u32,
    /// Tile height in pixels
    pub tileheight: u32,
    pub layers: Vec<MapLayer>,
}

impl MapData {
    /// Size of the whole map in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width * self.tilewidth, self.height * self.tileheight)
    }
}

/// One map layer, discriminated by the `type` field
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum MapLayer {
    /// Row-major 1-based tile indexes, 0 marks an empty cell
    #[serde(rename = "tilelayer")]
    Tiles { data: Vec<u32> },

    #[serde(rename = "objectgroup")]
    Objects { objects: Vec<MapObject> },

    /// Image layers, groups and anything else the game does not draw
    #[serde(other)]
    Unsupported,
}

/// Rectangle placed on an object layer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapObject {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

/// Named frame-index sequences for a character sheet
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationData {
    pub layers: Vec<AnimationLayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationLayer {
    pub name: String,
    /// Sheet indexes; zero and negative entries are padding
    pub data: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map_layers() {
        let json = r#"{
            "width": 3, "height": 2, "tilewidth": 64, "tileheight": 64,
            "layers": [
                {"type": "tilelayer", "name": "ground", "data": [1, 2, 0, 4, 5, 6]},
                {"type": "objectgroup", "objects": [{"x": 10, "y": 20, "width": 30, "height": 40, "id": 7}]},
                {"type": "imagelayer", "image": "sky.png"}
            ]
        }"#;

        let map: MapData = serde_json::from_str(json).unwrap();
        assert_eq!(map.pixel_size(), (192, 128));
        assert_eq!(map.layers.len(), 3);

        match &map.layers[0] {
            MapLayer::Tiles { data } => assert_eq!(data, &vec![1, 2, 0, 4, 5, 6]),
            other => panic!("expected tile layer, got {:?}", other),
        }
        match &map.layers[1] {
            MapLayer::Objects { objects } => {
                assert_eq!(objects[0].width, 30.0);
                assert_eq!(objects[0].y, 20.0);
            }
            other => panic!("expected object layer, got {:?}", other),
        }
        assert!(matches!(map.layers[2], MapLayer::Unsupported));
    }

    #[test]
    fn test_parse_animation_data() {
        let json = r#"{"layers": [{"name": "walk_right", "data": [0, 4, 5, -1, 6]}]}"#;
        let data: AnimationData = serde_json::from_str(json).unwrap();
        assert_eq!(data.layers[0].name, "walk_right");
        assert_eq!(data.layers[0].data, vec![0, 4, 5, -1, 6]);
    }
}
