//! Caption fonts: a TrueType face when one can be loaded, otherwise the built-in 8x8 bitmap font.
//!
//! The bundled Ubuntu Light face covers Cyrillic, so captions stay legible on hosts without any
//! system font. The bitmap font only has Latin and Greek glyphs and is a last resort.

use ab_glyph::{FontVec, PxScale};
use epaint_default_fonts::UBUNTU_LIGHT;
use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;
use tracing::{debug, warn};

/// Pixel size of the TrueType face.
pub const FONT_SIZE: f32 = 30.0;

/// Each bitmap glyph cell is 8x8 and drawn at this integer scale.
const BUILTIN_SCALE: u32 = 2;
const BUILTIN_CELL: u32 = 8 * BUILTIN_SCALE;

/// System fonts tried after the configured one; all of them cover Cyrillic.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub enum CaptionFont {
    TrueType { font: FontVec, scale: PxScale },
    Builtin,
}

impl CaptionFont {
    /// Loads the preferred font, then the system candidates, then the bundled face; never fails.
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .into_iter()
            .chain(SYSTEM_FONT_CANDIDATES.iter().map(|p| Path::new(*p)));

        for path in candidates {
            match std::fs::read(path) {
                Ok(bytes) => match FontVec::try_from_vec(bytes) {
                    Ok(font) => {
                        debug!(path = %path.display(), "Caption font loaded");
                        return Self::truetype(font);
                    }
                    Err(e) => warn!(path = %path.display(), error = %e, "Invalid font file"),
                },
                Err(_) => debug!(path = %path.display(), "Font not found"),
            }
        }

        if let Some(font) = Self::embedded() {
            debug!("Using bundled caption font");
            return font;
        }

        warn!("No TrueType font available, using built-in bitmap font");
        Self::Builtin
    }

    /// The bundled Ubuntu Light face.
    pub fn embedded() -> Option<Self> {
        match FontVec::try_from_vec(UBUNTU_LIGHT.to_vec()) {
            Ok(font) => Some(Self::truetype(font)),
            Err(e) => {
                warn!(error = %e, "Bundled font failed to parse");
                None
            }
        }
    }

    fn truetype(font: FontVec) -> Self {
        Self::TrueType {
            font,
            scale: PxScale::from(FONT_SIZE),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Width and height of `line` in pixels.
    pub fn measure(&self, line: &str) -> (u32, u32) {
        match self {
            Self::TrueType { font, scale } => text_size(*scale, font, line),
            Self::Builtin => {
                let chars = line.chars().count() as u32;
                if chars == 0 {
                    (0, 0)
                } else {
                    (chars * BUILTIN_CELL, BUILTIN_CELL)
                }
            }
        }
    }

    /// Draws `line` with its top-left corner at (x, y). Pixels outside the canvas are dropped.
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, line: &str, color: Rgb<u8>) {
        match self {
            Self::TrueType { font, scale } => draw_text_mut(canvas, color, x, y, *scale, font, line),
            Self::Builtin => {
                for (i, ch) in line.chars().enumerate() {
                    let origin_x = x + (i as u32 * BUILTIN_CELL) as i32;
                    draw_bitmap_glyph(canvas, origin_x, y, builtin_glyph(ch), color);
                }
            }
        }
    }
}

fn builtin_glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| GREEK_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Rows are top to bottom; bit 0 of each row is the leftmost pixel.
fn draw_bitmap_glyph(canvas: &mut RgbImage, x: i32, y: i32, glyph: [u8; 8], color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8u32 {
            if bits & (1 << col) == 0 {
                continue;
            }
            for dy in 0..BUILTIN_SCALE {
                for dx in 0..BUILTIN_SCALE {
                    let px = x + (col * BUILTIN_SCALE + dx) as i32;
                    let py = y + (row as u32 * BUILTIN_SCALE + dy) as i32;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}
