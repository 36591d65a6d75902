// Bitmap text rendering into the framebuffer

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Glyph cell size before scaling
pub const GLYPH_SIZE: u32 = 8;

/// Draw `text` with its baseline at `y`
///
/// Characters outside basic latin render as blanks. Pixels falling outside the
/// target are skipped.
pub fn draw_text(target: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>, scale: u32) {
    let cell = (GLYPH_SIZE * scale) as i32;
    let top = y - cell;

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + i as i32 * cell;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Least significant bit is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                fill_block(
                    target,
                    origin_x + (col * scale) as i32,
                    top + (row as u32 * scale) as i32,
                    scale,
                    color,
                );
            }
        }
    }
}

fn fill_block(target: &mut RgbaImage, x: i32, y: i32, size: u32, color: Rgba<u8>) {
    let (width, height) = target.dimensions();
    for dy in 0..size as i32 {
        for dx in 0..size as i32 {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                target.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
