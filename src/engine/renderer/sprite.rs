// Sprites and sprite sheets

use crate::engine::assets::AssetError;

/// A drawable cut from a named image
///
/// Size and source are fixed at construction, the position moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// Key into the screen's image table
    pub image: String,
    /// Top-left corner of the cell inside the image
    pub source_x: u32,
    pub source_y: u32,
    /// Size in pixels (width, height)
    pub width: u32,
    pub height: u32,
    /// Position in world space
    pub x: i32,
    pub y: i32,
}

impl Sprite {
    /// Create a new sprite at the world origin
    pub fn new(image: impl Into<String>, source: FramePosition, width: u32, height: u32) -> Self {
        Self {
            image: image.into(),
            source_x: source.x,
            source_y: source.y,
            width,
            height,
            x: 0,
            y: 0,
        }
    }

    pub fn set_xy(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_source(&mut self, source: FramePosition) {
        self.source_x = source.x;
        self.source_y = source.y;
    }
}

/// Anything the screen can blit
pub trait Drawable {
    fn sprite(&self) -> &Sprite;
}

impl Drawable for Sprite {
    fn sprite(&self) -> &Sprite {
        self
    }
}

/// Top-left corner of a cell inside a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePosition {
    pub x: u32,
    pub y: u32,
}

impl FramePosition {
    pub const ORIGIN: FramePosition = FramePosition { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A packed image of equally sized cells addressed by a 1-based index
///
/// Cells are numbered left to right, top to bottom. Index 0 is reserved for
/// "no tile" in map and sequence data.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub sprite_width: u32,
    pub sprite_height: u32,
}

impl SpriteSheet {
    /// Create a sheet of 64x64 cells
    pub fn new(image: impl Into<String>, image_width: u32, image_height: u32) -> Self {
        Self::with_cell_size(image, image_width, image_height, 64, 64)
    }

    pub fn with_cell_size(
        image: impl Into<String>,
        image_width: u32,
        image_height: u32,
        sprite_width: u32,
        sprite_height: u32,
    ) -> Self {
        Self {
            image: image.into(),
            image_width,
            image_height,
            sprite_width,
            sprite_height,
        }
    }

    /// Source x of a 1-based index
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0; [`SpriteSheet::frame`] is the checked lookup.
    pub fn source_x(&self, index: u32) -> u32 {
        ((index - 1) * self.sprite_width) % self.image_width
    }

    /// Source y of a 1-based index
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    pub fn source_y(&self, index: u32) -> u32 {
        ((index - 1) * self.sprite_width) / self.image_width * self.sprite_height
    }

    pub fn columns(&self) -> u32 {
        self.image_width / self.sprite_width
    }

    pub fn rows(&self) -> u32 {
        self.image_height / self.sprite_height
    }

    /// Number of addressable cells
    pub fn capacity(&self) -> u32 {
        self.columns() * self.rows()
    }

    /// Checked lookup of a cell position
    pub fn frame(&self, index: u32) -> Result<FramePosition, AssetError> {
        if index == 0 || index > self.capacity() {
            return Err(AssetError::FrameOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }

        Ok(FramePosition::new(self.source_x(index), self.source_y(index)))
    }

    /// A static sprite showing one cell
    #[allow(dead_code)]
    pub fn sprite(&self, index: u32) -> Result<Sprite, AssetError> {
        let source = self.frame(index)?;
        Ok(Sprite::new(
            self.image.clone(),
            source,
            self.sprite_width,
            self.sprite_height,
        ))
    }
}
