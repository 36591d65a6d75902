// CPU compositing surface shared by all scenes

use super::camera::Camera;
use super::sprite::{Drawable, Sprite, SpriteSheet};
use super::text;
use super::tilemap::{Hitbox, TileMap};
use crate::core::Rect;
use crate::engine::assets::{AssetError, MapData, MapLayer};
use image::{imageops, GenericImageView, Rgba, RgbaImage};
use log::{info, warn};
use std::collections::HashMap;

/// Text color used by [`Screen::print`]
pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Glyph scale used by [`Screen::print`]
pub const TEXT_SCALE: u32 = 2;

/// A source/destination pair already cropped to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    pub source_x: u32,
    pub source_y: u32,
    pub width: u32,
    pub height: u32,
    pub dest_x: u32,
    pub dest_y: u32,
}

/// Crop a sprite placed at (`screen_x`, `screen_y`) to a viewport
///
/// Returns `None` when nothing of the sprite is visible. Otherwise the source
/// offset grows by whatever hangs off the top/left edge and both rectangles
/// shrink to the visible intersection.
pub fn clip_to_viewport(
    sprite: &Sprite,
    screen_x: i32,
    screen_y: i32,
    viewport_width: u32,
    viewport_height: u32,
) -> Option<Blit> {
    let placed = Rect::new(screen_x, screen_y, sprite.width as i32, sprite.height as i32);
    let viewport = Rect::new(0, 0, viewport_width as i32, viewport_height as i32);
    let visible = placed.intersection(&viewport)?;

    Some(Blit {
        source_x: sprite.source_x + (visible.x - screen_x) as u32,
        source_y: sprite.source_y + (visible.y - screen_y) as u32,
        width: visible.width as u32,
        height: visible.height as u32,
        dest_x: visible.x as u32,
        dest_y: visible.y as u32,
    })
}

/// The drawing surface
///
/// Owns the framebuffer, the table of loaded images and a copy of the active
/// camera. Scenes only ever draw through these methods.
pub struct Screen {
    width: u32,
    height: u32,
    frame: RgbaImage,
    images: HashMap<String, RgbaImage>,
    camera: Option<Camera>,
    /// Blits issued since creation
    blits: usize,
}

impl Screen {
    /// Create a blank screen
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame: RgbaImage::new(width, height),
            images: HashMap::new(),
            camera: None,
            blits: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The composited frame
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Attach or detach the camera used by [`Screen::draw_sprite`]
    pub fn set_camera(&mut self, camera: Option<Camera>) {
        self.camera = camera;
    }

    #[allow(dead_code)]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Add images to the table, replacing any with the same name
    pub fn insert_images(&mut self, images: HashMap<String, RgbaImage>) {
        self.images.extend(images);
    }

    #[allow(dead_code)]
    pub fn insert_image(&mut self, name: impl Into<String>, image: RgbaImage) {
        self.images.insert(name.into(), image);
    }

    #[allow(dead_code)]
    pub fn image(&self, name: &str) -> Option<&RgbaImage> {
        self.images.get(name)
    }

    #[allow(dead_code)]
    pub fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of blits issued so far
    pub fn blit_count(&self) -> usize {
        self.blits
    }

    /// Paint the whole frame with one color
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.frame.pixels_mut() {
            *pixel = color;
        }
    }

    /// Write text with its baseline at `y`
    pub fn print(&mut self, x: i32, y: i32, text: &str) {
        text::draw_text(&mut self.frame, x, y, text, TEXT_COLOR, TEXT_SCALE);
    }

    /// Draw a whole image in screen space, ignoring the camera
    pub fn draw_image(&mut self, x: i32, y: i32, name: &str) {
        let Some((width, height)) = self.images.get(name).map(|img| img.dimensions()) else {
            warn!("draw_image: no image named '{}'", name);
            return;
        };

        let whole = Sprite {
            image: name.to_string(),
            source_x: 0,
            source_y: 0,
            width,
            height,
            x,
            y,
        };
        if let Some(blit) = clip_to_viewport(&whole, x, y, self.width, self.height) {
            self.blit(name, blit);
        }
    }

    /// Draw a sprite in world space, offset by the camera and clipped
    pub fn draw_sprite<D: Drawable + ?Sized>(&mut self, drawable: &D) {
        let sprite = drawable.sprite();
        let (mut x, mut y) = (sprite.x, sprite.y);

        if let Some(camera) = &self.camera {
            let (offset_x, offset_y) = camera.offset();
            x -= offset_x;
            y -= offset_y;
        }

        if let Some(blit) = clip_to_viewport(sprite, x, y, self.width, self.height) {
            self.blit(&sprite.image, blit);
        }
    }

    fn blit(&mut self, name: &str, blit: Blit) {
        let Some(image) = self.images.get(name) else {
            warn!("No image named '{}'", name);
            return;
        };

        if !fits(image, blit.source_x, blit.source_y, blit.width, blit.height) {
            warn!(
                "Source {}x{} at ({}, {}) lies outside image '{}'",
                blit.width, blit.height, blit.source_x, blit.source_y, name
            );
            return;
        }

        let region = image.view(blit.source_x, blit.source_y, blit.width, blit.height);
        imageops::overlay(
            &mut self.frame,
            &*region,
            blit.dest_x as i64,
            blit.dest_y as i64,
        );
        self.blits += 1;
    }

    /// Bake a tile map into one image named `name`
    ///
    /// Every tile layer is composited in order; object layers become hitboxes.
    pub fn create_map(
        &mut self,
        name: &str,
        map: &MapData,
        tileset: &SpriteSheet,
    ) -> Result<TileMap, AssetError> {
        let tiles = self
            .images
            .get(&tileset.image)
            .ok_or_else(|| AssetError::Missing(tileset.image.clone()))?;

        let (map_width, map_height) = map.pixel_size();
        let mut raster = RgbaImage::new(map_width, map_height);
        let mut hitboxes = Vec::new();
        let mut placed = 0usize;

        for layer in &map.layers {
            match layer {
                MapLayer::Tiles { data } if map.width > 0 => {
                    for (cell, &index) in data.iter().enumerate() {
                        if index == 0 {
                            continue;
                        }
                        let col = cell as u32 % map.width;
                        let row = cell as u32 / map.width;

                        let source = match tileset.frame(index) {
                            Ok(source) => source,
                            Err(e) => {
                                warn!("Skipping tile at ({}, {}): {}", col, row, e);
                                continue;
                            }
                        };
                        if !fits(tiles, source.x, source.y, map.tilewidth, map.tileheight) {
                            warn!("Tile {} lies outside '{}'", index, tileset.image);
                            continue;
                        }

                        let tile = tiles.view(source.x, source.y, map.tilewidth, map.tileheight);
                        imageops::overlay(
                            &mut raster,
                            &*tile,
                            (col * map.tilewidth) as i64,
                            (row * map.tileheight) as i64,
                        );
                        placed += 1;
                    }
                }
                MapLayer::Objects { objects } => {
                    hitboxes.extend(objects.iter().map(Hitbox::from));
                }
                _ => {}
            }
        }

        info!(
            "Map '{}' built: {}x{} px, {} tiles, {} hitboxes",
            name,
            map_width,
            map_height,
            placed,
            hitboxes.len()
        );

        self.images.insert(name.to_string(), raster);
        Ok(TileMap::new(name, map_width, map_height, hitboxes))
    }
}

fn fits(image: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> bool {
    u64::from(x) + u64::from(width) <= u64::from(image.width())
        && u64::from(y) + u64::from(height) <= u64::from(image.height())
}
